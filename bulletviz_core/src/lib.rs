// Copyright 2026 the Bulletviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal retained-mode mark runtime for `bulletviz_chart`.
//!
//! This crate provides the "drawable surface" capability a chart widget is
//! composed against:
//! - [`Mark`]s are stable-identity graphic primitives (rect, line, text) with
//!   an explicit `z_index` for render ordering.
//! - A [`Scene`] owns marks, supports restyle-in-place, destroy, and
//!   raise-to-front, and yields a deterministic draw order.
//!
//! Compositing, hit-testing, and redraw scheduling are out of scope; a
//! renderer consumes [`Scene::marks_in_draw_order`] and paints.

mod mark;
mod scene;

pub use mark::{LineMark, Mark, MarkId, MarkKind, MarkPayload, RectMark, TextAnchor, TextBaseline, TextMark};
pub use scene::Scene;
