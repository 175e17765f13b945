// Copyright 2026 the Bulletviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A bullet chart widget over `bulletviz_core` marks.
//!
//! A [`BulletChart`] overlays a single actual measurement on one or more
//! qualitative expected-range bands, with an optional target line. The widget
//! owns its [`bulletviz_core::Scene`] and keeps it synchronized with the
//! configuration through a full reconciliation pass:
//!
//! 1. sync the comparative-band primitive count to the expected series,
//!    re-raising the actual bar and target line when bands are recreated;
//! 2. derive one color per band by interpolating the palette;
//! 3. assign expected values to bands in reverse, so ascending input paints
//!    back-to-front without caller-side sorting;
//! 4. re-check the actual value's scalar invariant and restyle the actual
//!    bar;
//! 5. apply orientation: numeric axis (ticks, optional grid) on one edge,
//!    category axis (single label, no ticks) on the other;
//! 6. bind the legend to the band set only;
//! 7. apply the title.
//!
//! The pass re-runs on every property mutation, synchronously, before the
//! setter returns. Failures are typed [`ChartError`]s raised at the
//! triggering call site; there is no rollback for a pass that fails partway.
//!
//! Manual axis limits survive a save/reload cycle through
//! [`PersistedLimits`]; all other state is reconstructed from properties.

mod args;
mod axis;
mod chart;
mod error;
mod legend;
mod palette;
mod persist;
mod scale;
pub mod z_order;

pub use args::ArgValue;
pub use axis::{AxisOrient, AxisStyle, CategoryAxis, GridStyle, NumericAxis, StrokeStyle};
pub use chart::{
    ACTUAL_BAR_ID, AxisChannel, BulletChart, LimitMode, Orientation, RANGE_BAR_ID_BASE, TARGET_LINE_ID,
    TITLE_ID,
};
pub use error::ChartError;
pub use legend::{LegendItem, LegendSwatches};
pub use palette::Palette;
pub use persist::PersistedLimits;
pub use scale::ScaleLinear;
