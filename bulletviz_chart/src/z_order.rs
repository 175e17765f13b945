// Copyright 2026 the Bulletviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for chart-generated marks.
//!
//! `bulletviz_core` marks carry an explicit `z_index`; ties break by
//! insertion sequence. The chart layer sets z-indexes consistently so callers
//! never hand-tune paint order. All series fills share one tier on purpose:
//! the reconciler controls occlusion within that tier through insertion order
//! (comparative bands back-to-front, actual bar raised on top).

/// Gridlines drawn behind series.
pub const GRID_LINES: i32 = -50;

/// Filled series marks (comparative bands and the actual bar).
pub const SERIES_FILL: i32 = 0;
/// Stroked series marks (the target line).
pub const SERIES_STROKE: i32 = 10;

/// Axis domain lines and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels and the category label.
pub const AXIS_LABELS: i32 = 40;

/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;
/// Chart-level title.
pub const TITLES: i32 = 80;
