// Copyright 2026 the Bulletviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bullet chart widget.
//!
//! A [`BulletChart`] owns a [`Scene`] and keeps it synchronized with its
//! configuration through a full reconciliation pass that re-runs on every
//! property mutation. Comparative bands, the actual-value bar, and the target
//! line are retained marks restyled in place; guide marks (axes, grid,
//! legend, title, category label) are regenerated each pass.

use bulletviz_core::{Mark, MarkId, Scene, TextAnchor, TextBaseline};
use kurbo::{Point, Rect};
use peniko::color::palette::css;
use peniko::{Brush, Color};
use smallvec::SmallVec;

use crate::args::{ArgValue, parse_args};
use crate::axis::{AxisOrient, CategoryAxis, GridStyle, NumericAxis};
use crate::error::ChartError;
use crate::legend::{LegendItem, LegendSwatches};
use crate::palette::Palette;
use crate::persist::PersistedLimits;
use crate::scale::ScaleLinear;
use crate::z_order;

/// Chart orientation: which axis carries the numeric value scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Bars run left-to-right; the numeric axis is X, the category axis Y.
    Horizontal,
    /// Bars run bottom-to-top; the numeric axis is Y, the category axis X.
    #[default]
    Vertical,
}

/// How an axis range is determined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LimitMode {
    /// Range recomputed from data on every reconciliation.
    #[default]
    Auto,
    /// Range explicitly pinned; survives a save/reload cycle.
    Manual,
}

/// Per-axis range state.
#[derive(Clone, Copy, Debug)]
pub struct AxisChannel {
    /// Current `(low, high)` range.
    pub limits: (f64, f64),
    /// Whether the range is pinned or auto-computed.
    pub mode: LimitMode,
}

impl Default for AxisChannel {
    fn default() -> Self {
        Self {
            limits: (0.0, 1.0),
            mode: LimitMode::Auto,
        }
    }
}

/// Stable mark id of the actual-value bar.
pub const ACTUAL_BAR_ID: MarkId = MarkId::from_raw(1);
/// Stable mark id of the target line.
pub const TARGET_LINE_ID: MarkId = MarkId::from_raw(2);
/// Stable mark id of the title.
pub const TITLE_ID: MarkId = MarkId::from_raw(3);
/// Comparative band `i` (in creation order) uses `RANGE_BAR_ID_BASE + i`.
pub const RANGE_BAR_ID_BASE: u64 = 100;

const NUMERIC_AXIS_ID_BASE: u64 = 1_000;
const CATEGORY_AXIS_ID_BASE: u64 = 20_000;
const LEGEND_ID_BASE: u64 = 30_000;

const DEFAULT_VIEWPORT: Rect = Rect::new(40.0, 20.0, 440.0, 280.0);

/// Fraction of the category extent covered by the comparative bands.
const BAND_FRACTION: f64 = 0.5;
/// The actual bar is this fraction of the comparative band width.
const ACTUAL_FRACTION: f64 = 1.0 / 3.0;

/// A bullet chart: comparative bands, one actual-value bar, and an optional
/// target line.
///
/// Construction validates, sets up the fixed primitives, and runs one
/// reconciliation pass; every setter re-runs the pass before returning. There
/// is no rollback: a pass that fails partway (for example on a legend
/// display-name mismatch) leaves the marks it already updated in place.
#[derive(Debug)]
pub struct BulletChart {
    scene: Scene,
    viewport: Rect,
    expected: Vec<f64>,
    // Kept as supplied so the scalar invariant stays checkable on every pass.
    actual: Vec<f64>,
    category: Option<String>,
    palette: Palette,
    grid: bool,
    face_color: Color,
    orientation: Orientation,
    title: String,
    legend_visible: bool,
    legend_names: Option<Vec<String>>,
    target_visible: bool,
    target: Option<f64>,
    x_axis: AxisChannel,
    y_axis: AxisChannel,
    range_bar_ids: SmallVec<[MarkId; 8]>,
    guide_ids: Vec<MarkId>,
}

impl BulletChart {
    /// Creates a chart from an expected series and a single actual value,
    /// with default options.
    pub fn new(expected: impl Into<Vec<f64>>, actual: f64) -> Result<Self, ChartError> {
        Self::build(None, expected.into(), vec![actual], None, Vec::new())
    }

    /// Creates a chart from a dynamic argument list.
    ///
    /// The list is an optional leading [`ArgValue::Viewport`], positional
    /// `(expectedSeries, actualValue[, categoryLabel])`, then name/value
    /// pairs. See [`crate::args`] for the parsing rules.
    pub fn from_args(args: Vec<ArgValue>) -> Result<Self, ChartError> {
        let parsed = parse_args(args)?;
        Self::build(
            parsed.viewport,
            parsed.expected,
            parsed.actual,
            parsed.category,
            parsed.options,
        )
    }

    fn build(
        viewport: Option<Rect>,
        expected: Vec<f64>,
        actual: Vec<f64>,
        category: Option<String>,
        options: Vec<(String, ArgValue)>,
    ) -> Result<Self, ChartError> {
        let mut chart = Self {
            scene: Scene::new(),
            viewport: viewport.unwrap_or(DEFAULT_VIEWPORT),
            expected,
            actual,
            category,
            palette: Palette::default(),
            grid: true,
            face_color: css::BLACK,
            orientation: Orientation::default(),
            title: String::new(),
            legend_visible: false,
            legend_names: None,
            target_visible: false,
            target: None,
            x_axis: AxisChannel::default(),
            y_axis: AxisChannel::default(),
            range_bar_ids: SmallVec::new(),
            guide_ids: Vec::new(),
        };
        chart.setup();
        for (name, value) in options {
            chart.apply_option(&name, value)?;
        }
        chart.reconcile()?;
        Ok(chart)
    }

    /// Creates the fixed primitives: one actual bar and one target line.
    ///
    /// The comparative-band set is populated by the first reconciliation
    /// pass, which also re-raises these two above it.
    fn setup(&mut self) {
        self.scene.insert(
            Mark::rect(ACTUAL_BAR_ID, Rect::ZERO).with_z_index(z_order::SERIES_FILL),
        );
        self.scene.insert(
            Mark::line(TARGET_LINE_ID, Point::ZERO, Point::ZERO)
                .with_stroke(css::BLACK, 2.0)
                .with_z_index(z_order::SERIES_STROKE)
                .with_visible(false),
        );
    }

    fn apply_option(&mut self, name: &str, value: ArgValue) -> Result<(), ChartError> {
        match name {
            "ExpectedData" => self.expected = expect_series(value, "ExpectedData")?,
            "ActualData" => {
                let values = expect_series(value, "ActualData")?;
                if values.len() != 1 {
                    return Err(ChartError::ActualDataNonScalar { got: values.len() });
                }
                self.actual = values;
            }
            "Category" => match value {
                ArgValue::Text(label) => self.category = Some(label),
                _ => return Err(ChartError::InvalidCategory),
            },
            "Colormap" => self.palette = Palette::new(expect_color_rows(value, "Colormap")?),
            "Grid" => self.grid = expect_switch(value, "Grid")?,
            "FaceColor" => {
                let rows = expect_color_rows(value, "FaceColor")?;
                if rows.len() != 1 {
                    return Err(ChartError::FaceColorNonScalar { got: rows.len() });
                }
                self.face_color = color_from_row(rows[0]);
            }
            "Orientation" => self.orientation = expect_orientation(value)?,
            "Title" => match value {
                ArgValue::Text(title) => self.title = title,
                _ => {
                    return Err(ChartError::OptionType {
                        name: "Title",
                        expected: "a string",
                    });
                }
            },
            "LegendVisible" => self.legend_visible = expect_switch(value, "LegendVisible")?,
            "LegendDisplayName" => match value {
                ArgValue::TextList(names) => self.legend_names = Some(names),
                ArgValue::Text(name) => self.legend_names = Some(vec![name]),
                _ => {
                    return Err(ChartError::OptionType {
                        name: "LegendDisplayName",
                        expected: "a list of strings",
                    });
                }
            },
            "TargetLineVisible" => self.target_visible = expect_switch(value, "TargetLineVisible")?,
            "TargetData" => match value {
                ArgValue::Scalar(v) => self.target = Some(v),
                _ => {
                    return Err(ChartError::OptionType {
                        name: "TargetData",
                        expected: "a numeric scalar",
                    });
                }
            },
            "Limits" => {
                let limits = match value {
                    ArgValue::Series(v) if v.len() == 2 => (v[0], v[1]),
                    _ => {
                        return Err(ChartError::OptionType {
                            name: "Limits",
                            expected: "an increasing (low, high) pair",
                        });
                    }
                };
                self.pin_limits(limits)?;
            }
            other => return Err(ChartError::UnknownOption(other.to_owned())),
        }
        Ok(())
    }

    // --- property surface -------------------------------------------------

    /// Replaces the expected series.
    pub fn set_expected_data(&mut self, expected: impl Into<Vec<f64>>) -> Result<(), ChartError> {
        self.expected = expected.into();
        self.reconcile()
    }

    /// Replaces the actual data.
    ///
    /// The data is stored as supplied; the scalar invariant is enforced by
    /// the reconciliation pass, so a non-scalar assignment fails here and on
    /// every later mutation until corrected.
    pub fn set_actual_data(&mut self, actual: impl Into<Vec<f64>>) -> Result<(), ChartError> {
        self.actual = actual.into();
        self.reconcile()
    }

    /// Sets or clears the category label.
    pub fn set_category(&mut self, category: Option<String>) -> Result<(), ChartError> {
        self.category = category;
        self.reconcile()
    }

    /// Replaces the comparative-band palette.
    pub fn set_colormap(&mut self, palette: Palette) -> Result<(), ChartError> {
        self.palette = palette;
        self.reconcile()
    }

    /// Toggles gridlines on the numeric axis.
    pub fn set_grid(&mut self, grid: bool) -> Result<(), ChartError> {
        self.grid = grid;
        self.reconcile()
    }

    /// Sets the actual bar's fill color.
    pub fn set_face_color(&mut self, color: Color) -> Result<(), ChartError> {
        self.face_color = color;
        self.reconcile()
    }

    /// Sets the chart orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), ChartError> {
        self.orientation = orientation;
        self.reconcile()
    }

    /// Sets the title; an empty string clears it visually but the title mark
    /// is applied unconditionally.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ChartError> {
        self.title = title.into();
        self.reconcile()
    }

    /// Shows or hides the legend.
    pub fn set_legend_visible(&mut self, visible: bool) -> Result<(), ChartError> {
        self.legend_visible = visible;
        self.reconcile()
    }

    /// Sets or clears custom legend display names.
    ///
    /// The name count must match the expected-series length whenever the
    /// legend is shown; the check runs at reconcile time because the series
    /// can change after the names are set.
    pub fn set_legend_display_names(
        &mut self,
        names: Option<Vec<String>>,
    ) -> Result<(), ChartError> {
        self.legend_names = names;
        self.reconcile()
    }

    /// Shows or hides the target line.
    pub fn set_target_line_visible(&mut self, visible: bool) -> Result<(), ChartError> {
        self.target_visible = visible;
        self.reconcile()
    }

    /// Sets or clears the target value. When unset, a visible target line
    /// sits at the largest expected value.
    pub fn set_target_data(&mut self, target: Option<f64>) -> Result<(), ChartError> {
        self.target = target;
        self.reconcile()
    }

    /// Sets the plot rectangle allotted by the host.
    pub fn set_viewport(&mut self, viewport: Rect) -> Result<(), ChartError> {
        self.viewport = viewport;
        self.reconcile()
    }

    /// Pins the numeric-axis range.
    ///
    /// The numeric axis is orientation-dependent (Y when vertical, X when
    /// horizontal); pinning switches that axis to manual-limit mode.
    pub fn set_limits(&mut self, limits: (f64, f64)) -> Result<(), ChartError> {
        self.pin_limits(limits)?;
        self.reconcile()
    }

    /// Returns the current numeric-axis range.
    pub fn limits(&self) -> (f64, f64) {
        self.numeric_channel().limits
    }

    /// Returns the expected series.
    pub fn expected_data(&self) -> &[f64] {
        &self.expected
    }

    /// Returns the actual data as supplied.
    pub fn actual_data(&self) -> &[f64] {
        &self.actual
    }

    /// Returns the chart orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the X axis range state.
    pub fn x_axis(&self) -> AxisChannel {
        self.x_axis
    }

    /// Returns the Y axis range state.
    pub fn y_axis(&self) -> AxisChannel {
        self.y_axis
    }

    /// Returns the retained scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    // --- persistence ------------------------------------------------------

    /// Captures axis-limit overrides for a save cycle.
    ///
    /// Returns `None` when both axes are in auto mode; everything else about
    /// the chart is reconstructible from its properties.
    pub fn persisted_state(&self) -> Option<PersistedLimits> {
        let state = PersistedLimits {
            x_lim: (self.x_axis.mode == LimitMode::Manual).then_some(self.x_axis.limits),
            y_lim: (self.y_axis.mode == LimitMode::Manual).then_some(self.y_axis.limits),
        };
        (!state.is_empty()).then_some(state)
    }

    /// Applies a loaded record, switching each present axis to manual-limit
    /// mode as a side effect.
    pub fn apply_persisted_state(&mut self, state: &PersistedLimits) -> Result<(), ChartError> {
        if let Some((lo, hi)) = state.x_lim {
            validate_limits((lo, hi))?;
            self.x_axis = AxisChannel {
                limits: (lo, hi),
                mode: LimitMode::Manual,
            };
        }
        if let Some((lo, hi)) = state.y_lim {
            validate_limits((lo, hi))?;
            self.y_axis = AxisChannel {
                limits: (lo, hi),
                mode: LimitMode::Manual,
            };
        }
        self.reconcile()
    }

    // --- reconciliation ---------------------------------------------------

    fn numeric_channel(&self) -> &AxisChannel {
        match self.orientation {
            Orientation::Vertical => &self.y_axis,
            Orientation::Horizontal => &self.x_axis,
        }
    }

    fn pin_limits(&mut self, limits: (f64, f64)) -> Result<(), ChartError> {
        validate_limits(limits)?;
        let channel = match self.orientation {
            Orientation::Vertical => &mut self.y_axis,
            Orientation::Horizontal => &mut self.x_axis,
        };
        *channel = AxisChannel {
            limits,
            mode: LimitMode::Manual,
        };
        Ok(())
    }

    /// Resolves the numeric-axis domain, recomputing auto limits from the
    /// data and writing them back so [`BulletChart::limits`] reads the
    /// current range.
    fn resolve_numeric_limits(&mut self) -> (f64, f64) {
        let target = self.target_value().filter(|_| self.target_visible);
        let channel = match self.orientation {
            Orientation::Vertical => &mut self.y_axis,
            Orientation::Horizontal => &mut self.x_axis,
        };
        if channel.mode == LimitMode::Manual {
            return channel.limits;
        }

        let mut lo = 0.0_f64;
        let mut hi = f64::NEG_INFINITY;
        for v in self
            .expected
            .iter()
            .chain(self.actual.iter())
            .copied()
            .chain(target)
            .filter(|v| v.is_finite())
        {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if !hi.is_finite() {
            hi = 1.0;
        }
        if hi <= lo {
            hi = lo + 1.0;
        }
        channel.limits = (lo, hi);
        (lo, hi)
    }

    /// The value the target line sits at: the explicit target if set,
    /// otherwise the largest expected value.
    fn target_value(&self) -> Option<f64> {
        self.target.or_else(|| {
            self.expected
                .iter()
                .copied()
                .filter(|v| v.is_finite())
                .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
        })
    }

    /// The full reconciliation pass; see the crate docs for the step order.
    ///
    /// There is no rollback: a failure partway (non-scalar actual data,
    /// legend name mismatch) leaves already-updated marks in place.
    fn reconcile(&mut self) -> Result<(), ChartError> {
        let n = self.expected.len();

        // 1. Primitive count sync: destroy the whole band set and recreate it
        // when the count changed, then re-raise the fixed primitives so they
        // stay in front within the series tier.
        if self.range_bar_ids.len() != n {
            for id in self.range_bar_ids.drain(..) {
                self.scene.remove(id);
            }
            for i in 0..n {
                let id = MarkId::from_raw(RANGE_BAR_ID_BASE + i as u64);
                self.scene
                    .insert(Mark::rect(id, Rect::ZERO).with_z_index(z_order::SERIES_FILL));
                self.range_bar_ids.push(id);
            }
            self.scene.raise(ACTUAL_BAR_ID);
            self.scene.raise(TARGET_LINE_ID);
        }

        let domain = self.resolve_numeric_limits();
        let plot = self.viewport;
        let (numeric_orient, category_orient) = match self.orientation {
            Orientation::Vertical => (AxisOrient::Left, AxisOrient::Bottom),
            Orientation::Horizontal => (AxisOrient::Bottom, AxisOrient::Left),
        };

        let mut numeric_axis = NumericAxis::new(NUMERIC_AXIS_ID_BASE, numeric_orient, domain);
        if self.grid {
            numeric_axis = numeric_axis.with_grid(GridStyle::default());
        }
        let scale = numeric_axis.scale(plot);

        // 2. Colors: one per band, a pure function of (palette, count).
        let colors = self.palette.sample(n);

        // 3. Reverse layering: band `i` (creation order, painted
        // back-to-front) shows `expected[n - 1 - i]`, so with ascending
        // input the widest band paints first and never occludes the rest.
        for i in 0..n {
            let id = self.range_bar_ids[i];
            let rect = self.bar_rect(&scale, self.expected[n - 1 - i], BAND_FRACTION);
            self.scene.insert(
                Mark::rect(id, rect)
                    .with_fill(colors[i])
                    .with_z_index(z_order::SERIES_FILL),
            );
        }

        // 4. Actual bar: the scalar invariant is re-checked on every pass,
        // not just at construction.
        if self.actual.len() != 1 {
            return Err(ChartError::ActualDataNonScalar {
                got: self.actual.len(),
            });
        }
        let actual_rect = self.bar_rect(&scale, self.actual[0], BAND_FRACTION * ACTUAL_FRACTION);
        self.scene.insert(
            Mark::rect(ACTUAL_BAR_ID, actual_rect)
                .with_fill(self.face_color)
                .with_z_index(z_order::SERIES_FILL),
        );

        // Target line: the primitive always exists; visibility toggles it.
        let target = self.target_value();
        let (t0, t1) = self.target_segment(&scale, target.unwrap_or(domain.0));
        self.scene.insert(
            Mark::line(TARGET_LINE_ID, t0, t1)
                .with_stroke(css::BLACK, 2.0)
                .with_visible(self.target_visible && target.is_some())
                .with_z_index(z_order::SERIES_STROKE),
        );

        // 5–7. Guides are regenerated wholesale: orientation, tick and grid
        // state, legend, category label, and title all derive from scratch.
        for id in self.guide_ids.drain(..) {
            self.scene.remove(id);
        }
        let mut guides = numeric_axis.marks(plot);
        guides.extend(
            CategoryAxis::new(CATEGORY_AXIS_ID_BASE, category_orient, self.category.clone())
                .marks(plot),
        );

        // 6. Legend: bound to the comparative bands only; the actual bar and
        // target line are never listed.
        if self.legend_visible {
            if let Some(names) = &self.legend_names
                && names.len() != n
            {
                return Err(ChartError::DisplayNameCountMismatch {
                    names: names.len(),
                    bars: n,
                });
            }
            let items = (0..n)
                .map(|j| LegendItem {
                    label: match &self.legend_names {
                        Some(names) => names[j].clone(),
                        None => format!("Expected {}", j + 1),
                    },
                    // expected[j] is painted by band n-1-j; reuse its color.
                    fill: Brush::Solid(colors[n - 1 - j]),
                })
                .collect();
            guides.extend(
                LegendSwatches::new(LEGEND_ID_BASE, items)
                    .marks(Point::new(plot.x1 + 16.0, plot.y0)),
            );
        }

        // 7. Title, applied unconditionally.
        guides.push(
            Mark::text(
                TITLE_ID,
                Point::new((plot.x0 + plot.x1) * 0.5, plot.y0 - 10.0),
                self.title.clone(),
            )
            .with_font_size(12.0)
            .with_anchor(TextAnchor::Middle)
            .with_baseline(TextBaseline::Alphabetic)
            .with_z_index(z_order::TITLES),
        );

        for mark in guides {
            self.guide_ids.push(mark.id);
            self.scene.insert(mark);
        }
        Ok(())
    }

    /// Rectangle for a bar of `value`, `fraction` of the category extent
    /// wide, rooted at the numeric-domain low end.
    fn bar_rect(&self, scale: &ScaleLinear, value: f64, fraction: f64) -> Rect {
        let plot = self.viewport;
        let v0 = scale.map_clamped(scale.domain_min());
        let v1 = scale.map_clamped(value);
        match self.orientation {
            Orientation::Vertical => {
                let cx = (plot.x0 + plot.x1) * 0.5;
                let half = plot.width() * fraction * 0.5;
                Rect::new(cx - half, v0.min(v1), cx + half, v0.max(v1))
            }
            Orientation::Horizontal => {
                let cy = (plot.y0 + plot.y1) * 0.5;
                let half = plot.height() * fraction * 0.5;
                Rect::new(v0.min(v1), cy - half, v0.max(v1), cy + half)
            }
        }
    }

    /// Endpoints of the target line at `value`, spanning the band width.
    fn target_segment(&self, scale: &ScaleLinear, value: f64) -> (Point, Point) {
        let plot = self.viewport;
        let v = scale.map_clamped(value);
        match self.orientation {
            Orientation::Vertical => {
                let cx = (plot.x0 + plot.x1) * 0.5;
                let half = plot.width() * BAND_FRACTION * 0.5;
                (Point::new(cx - half, v), Point::new(cx + half, v))
            }
            Orientation::Horizontal => {
                let cy = (plot.y0 + plot.y1) * 0.5;
                let half = plot.height() * BAND_FRACTION * 0.5;
                (Point::new(v, cy - half), Point::new(v, cy + half))
            }
        }
    }
}

fn validate_limits((lo, hi): (f64, f64)) -> Result<(), ChartError> {
    if hi > lo {
        Ok(())
    } else {
        Err(ChartError::InvalidLimits(lo, hi))
    }
}

fn color_from_row(row: [f64; 3]) -> Color {
    let row = row.map(|c| if c.is_finite() { c.clamp(0.0, 1.0) } else { 0.0 });
    Color::new([row[0] as f32, row[1] as f32, row[2] as f32, 1.0])
}

fn expect_series(value: ArgValue, name: &'static str) -> Result<Vec<f64>, ChartError> {
    match value {
        ArgValue::Series(values) => Ok(values),
        ArgValue::Scalar(value) => Ok(vec![value]),
        _ => Err(ChartError::OptionType {
            name,
            expected: "a numeric series",
        }),
    }
}

fn expect_color_rows(value: ArgValue, name: &'static str) -> Result<Vec<[f64; 3]>, ChartError> {
    match value {
        ArgValue::ColorRows(rows) => Ok(rows),
        _ => Err(ChartError::OptionType {
            name,
            expected: "RGB rows with channels in [0, 1]",
        }),
    }
}

fn expect_switch(value: ArgValue, name: &'static str) -> Result<bool, ChartError> {
    match value {
        ArgValue::Switch(b) => Ok(b),
        ArgValue::Text(s) if s.eq_ignore_ascii_case("on") => Ok(true),
        ArgValue::Text(s) if s.eq_ignore_ascii_case("off") => Ok(false),
        _ => Err(ChartError::OptionType {
            name,
            expected: "a boolean or \"on\"/\"off\"",
        }),
    }
}

fn expect_orientation(value: ArgValue) -> Result<Orientation, ChartError> {
    match value {
        ArgValue::Text(s) if s.eq_ignore_ascii_case("horizontal") => Ok(Orientation::Horizontal),
        ArgValue::Text(s) if s.eq_ignore_ascii_case("vertical") => Ok(Orientation::Vertical),
        _ => Err(ChartError::OptionType {
            name: "Orientation",
            expected: "\"horizontal\" or \"vertical\"",
        }),
    }
}

#[cfg(test)]
mod tests {
    use bulletviz_core::MarkPayload;

    use super::*;

    fn fill_marks(chart: &BulletChart) -> Vec<&Mark> {
        chart
            .scene()
            .marks_in_draw_order()
            .into_iter()
            .filter(|m| m.z_index == z_order::SERIES_FILL)
            .collect()
    }

    fn rect_of(mark: &Mark) -> Rect {
        match &mark.payload {
            MarkPayload::Rect(r) => r.rect,
            _ => panic!("expected a rect mark"),
        }
    }

    #[test]
    fn default_construction_matches_the_documented_shape() {
        let chart = BulletChart::new(vec![60.0, 80.0, 100.0], 72.0).expect("valid chart");

        assert_eq!(chart.orientation(), Orientation::Vertical);
        assert_eq!(chart.x_axis().mode, LimitMode::Auto);
        assert_eq!(chart.y_axis().mode, LimitMode::Auto);
        assert_eq!(chart.limits(), (0.0, 100.0));

        // Three bands colored by palette interpolation, plus the actual bar.
        let fills = fill_marks(&chart);
        assert_eq!(fills.len(), 4);
        let colors = Palette::default().sample(3);
        for (i, mark) in fills[..3].iter().enumerate() {
            let MarkPayload::Rect(r) = &mark.payload else {
                panic!("expected rect");
            };
            assert_eq!(r.fill, Brush::Solid(colors[i]), "band {i} color");
        }

        // No legend, target line present but invisible.
        assert!(!chart.scene().contains(MarkId::from_raw(30_000)));
        let target = chart.scene().get(TARGET_LINE_ID).expect("target line exists");
        assert!(!target.visible);
    }

    #[test]
    fn band_count_tracks_the_expected_series() {
        let mut chart = BulletChart::new(vec![60.0, 80.0, 100.0], 72.0).expect("valid chart");
        for len in [1_usize, 5, 0, 3] {
            let series: Vec<f64> = (0..len).map(|i| (i + 1) as f64 * 10.0).collect();
            chart.set_expected_data(series).expect("reconcile");
            let bars = (0..10)
                .filter(|i| chart.scene().contains(MarkId::from_raw(RANGE_BAR_ID_BASE + i)))
                .count();
            assert_eq!(bars, len, "band primitives after resize to {len}");
        }
    }

    #[test]
    fn bands_paint_back_to_front_with_the_actual_bar_on_top() {
        let mut chart = BulletChart::new(vec![60.0, 80.0, 100.0], 72.0).expect("valid chart");
        // Force a destroy/recreate after the fixed marks were already raised.
        chart.set_expected_data(vec![50.0, 70.0, 90.0, 110.0]).expect("reconcile");

        let fills = fill_marks(&chart);
        assert_eq!(fills.last().expect("non-empty").id, ACTUAL_BAR_ID);

        // In draw order the bands shrink: the widest range paints first.
        let heights: Vec<f64> = fills[..4].iter().map(|m| rect_of(m).height()).collect();
        for pair in heights.windows(2) {
            assert!(pair[0] >= pair[1], "bands must not grow in draw order: {heights:?}");
        }
    }

    #[test]
    fn actual_bar_geometry_follows_the_value() {
        let mut chart = BulletChart::new(vec![60.0, 80.0, 100.0], 72.0).expect("valid chart");
        chart.set_limits((0.0, 100.0)).expect("valid limits");

        let plot = DEFAULT_VIEWPORT;
        let rect = rect_of(chart.scene().get(ACTUAL_BAR_ID).expect("actual bar"));
        // Vertical: the bar rises from the plot bottom to 72% of the span.
        assert_eq!(rect.y1, plot.y1);
        let expected_top = plot.y1 - 0.72 * plot.height();
        assert!((rect.y0 - expected_top).abs() < 1e-9, "top at 72%: {rect:?}");
    }

    #[test]
    fn non_scalar_actual_data_fails_at_mutation_time() {
        let mut chart = BulletChart::new(vec![60.0, 80.0], 50.0).expect("valid chart");
        let err = chart.set_actual_data(vec![1.0, 2.0]).unwrap_err();
        assert_eq!(err, ChartError::ActualDataNonScalar { got: 2 });
        // The property stuck; the next pass reports it again.
        let err = chart.set_grid(false).unwrap_err();
        assert_eq!(err, ChartError::ActualDataNonScalar { got: 2 });
    }

    #[test]
    fn limits_validate_and_read_back() {
        let mut chart = BulletChart::new(vec![60.0, 80.0], 50.0).expect("valid chart");
        assert_eq!(
            chart.set_limits((5.0, 2.0)).unwrap_err(),
            ChartError::InvalidLimits(5.0, 2.0)
        );
        let err = chart.set_limits((f64::NAN, 2.0)).unwrap_err();
        assert!(
            matches!(err, ChartError::InvalidLimits(lo, _) if lo.is_nan()),
            "NaN bounds are never increasing: {err:?}"
        );
        chart.set_limits((2.0, 5.0)).expect("valid limits");
        assert_eq!(chart.limits(), (2.0, 5.0));
        assert_eq!(chart.y_axis().mode, LimitMode::Manual);
        assert_eq!(chart.x_axis().mode, LimitMode::Auto);
    }

    #[test]
    fn the_numeric_axis_follows_orientation() {
        let mut chart = BulletChart::new(vec![60.0, 80.0], 50.0).expect("valid chart");
        chart.set_orientation(Orientation::Horizontal).expect("reconcile");
        chart.set_limits((0.0, 10.0)).expect("valid limits");
        assert_eq!(chart.x_axis().mode, LimitMode::Manual);
        assert_eq!(chart.limits(), (0.0, 10.0));

        // Flipping back: the numeric axis is Y again, which is still auto.
        chart.set_orientation(Orientation::Vertical).expect("reconcile");
        assert_eq!(chart.y_axis().mode, LimitMode::Auto);
    }

    #[test]
    fn category_label_binds_to_the_orientation_dependent_axis() {
        let mut chart = BulletChart::new(vec![60.0, 80.0], 50.0).expect("valid chart");
        chart.set_category(Some("Revenue".into())).expect("reconcile");
        let label_id = MarkId::from_raw(20_001);

        // Vertical: category on the X (bottom) axis.
        let label = chart.scene().get(label_id).expect("category label");
        let MarkPayload::Text(t) = &label.payload else {
            panic!("expected text");
        };
        assert_eq!(t.text, "Revenue");
        assert!(t.pos.y > DEFAULT_VIEWPORT.y1, "label below the plot");

        // Horizontal: category on the Y (left) axis, rotated.
        chart.set_orientation(Orientation::Horizontal).expect("reconcile");
        let label = chart.scene().get(label_id).expect("category label");
        let MarkPayload::Text(t) = &label.payload else {
            panic!("expected text");
        };
        assert!(t.pos.x < DEFAULT_VIEWPORT.x0, "label left of the plot");
        assert_eq!(t.angle, -90.0);
    }

    #[test]
    fn grid_toggle_controls_grid_marks() {
        let mut chart = BulletChart::new(vec![60.0, 80.0], 50.0).expect("valid chart");
        let grid_marks = |chart: &BulletChart| {
            chart
                .scene()
                .marks_in_draw_order()
                .iter()
                .filter(|m| m.z_index == z_order::GRID_LINES)
                .count()
        };
        assert!(grid_marks(&chart) > 0, "grid defaults to on");
        chart.set_grid(false).expect("reconcile");
        assert_eq!(grid_marks(&chart), 0);
    }

    #[test]
    fn legend_name_mismatch_only_matters_while_the_legend_is_shown() {
        let mut chart = BulletChart::new(vec![60.0, 80.0, 100.0], 72.0).expect("valid chart");
        chart
            .set_legend_display_names(Some(vec!["Low".into(), "High".into()]))
            .expect("legend hidden, no check");

        let err = chart.set_legend_visible(true).unwrap_err();
        assert_eq!(err, ChartError::DisplayNameCountMismatch { names: 2, bars: 3 });

        chart
            .set_legend_display_names(Some(vec!["Low".into(), "Mid".into(), "High".into()]))
            .expect("matching names");
        let swatches = chart
            .scene()
            .marks_in_draw_order()
            .iter()
            .filter(|m| m.z_index == z_order::LEGEND_SWATCHES)
            .count();
        assert_eq!(swatches, 3, "one swatch per comparative band");
    }

    #[test]
    fn legend_excludes_the_actual_bar_and_target_line() {
        let mut chart = BulletChart::new(vec![60.0, 80.0, 100.0], 72.0).expect("valid chart");
        chart.set_target_line_visible(true).expect("reconcile");
        chart.set_legend_visible(true).expect("reconcile");
        let swatches = chart
            .scene()
            .marks_in_draw_order()
            .iter()
            .filter(|m| m.z_index == z_order::LEGEND_SWATCHES)
            .count();
        assert_eq!(swatches, 3);
    }

    #[test]
    fn target_line_defaults_to_the_largest_expected_value() {
        let mut chart = BulletChart::new(vec![60.0, 80.0, 100.0], 72.0).expect("valid chart");
        chart.set_limits((0.0, 100.0)).expect("valid limits");
        chart.set_target_line_visible(true).expect("reconcile");

        let target = chart.scene().get(TARGET_LINE_ID).expect("target line");
        assert!(target.visible);
        let MarkPayload::Line(l) = &target.payload else {
            panic!("expected line");
        };
        // Largest expected value is 100, the top of the plot.
        assert!((l.p0.y - DEFAULT_VIEWPORT.y0).abs() < 1e-9);

        chart.set_target_data(Some(50.0)).expect("reconcile");
        let target = chart.scene().get(TARGET_LINE_ID).expect("target line");
        let MarkPayload::Line(l) = &target.payload else {
            panic!("expected line");
        };
        let mid = (DEFAULT_VIEWPORT.y0 + DEFAULT_VIEWPORT.y1) * 0.5;
        assert!((l.p0.y - mid).abs() < 1e-9);
    }

    #[test]
    fn title_is_applied_unconditionally() {
        let mut chart = BulletChart::new(vec![60.0], 50.0).expect("valid chart");
        chart.set_title("Quota").expect("reconcile");
        let title = chart.scene().get(TITLE_ID).expect("title mark");
        let MarkPayload::Text(t) = &title.payload else {
            panic!("expected text");
        };
        assert_eq!(t.text, "Quota");
    }

    #[test]
    fn persisted_state_round_trips_manual_limits() {
        let mut chart = BulletChart::new(vec![60.0, 80.0], 50.0).expect("valid chart");
        assert!(chart.persisted_state().is_none(), "auto mode captures nothing");

        chart.set_limits((0.0, 10.0)).expect("valid limits");
        let state = chart.persisted_state().expect("manual mode captures");
        assert_eq!(state.y_lim, Some((0.0, 10.0)));
        assert_eq!(state.x_lim, None);

        let mut fresh = BulletChart::new(vec![1.0, 2.0], 1.5).expect("valid chart");
        fresh.apply_persisted_state(&state).expect("apply");
        assert_eq!(fresh.limits(), (0.0, 10.0));
        assert_eq!(fresh.y_axis().mode, LimitMode::Manual);
    }

    #[test]
    fn from_args_supports_the_full_name_value_surface() {
        let chart = BulletChart::from_args(vec![
            ArgValue::Series(vec![60.0, 80.0, 100.0]),
            ArgValue::Scalar(72.0),
            ArgValue::Text("Revenue".into()),
            ArgValue::Text("Orientation".into()),
            ArgValue::Text("horizontal".into()),
            ArgValue::Text("Grid".into()),
            ArgValue::Text("off".into()),
            ArgValue::Text("FaceColor".into()),
            ArgValue::ColorRows(vec![[0.0, 0.0, 1.0]]),
            ArgValue::Text("Limits".into()),
            ArgValue::Series(vec![0.0, 120.0]),
        ])
        .expect("valid arguments");

        assert_eq!(chart.orientation(), Orientation::Horizontal);
        assert_eq!(chart.limits(), (0.0, 120.0));
        assert_eq!(chart.x_axis().mode, LimitMode::Manual);
        let actual = chart.scene().get(ACTUAL_BAR_ID).expect("actual bar");
        let MarkPayload::Rect(r) = &actual.payload else {
            panic!("expected rect");
        };
        assert_eq!(r.fill, Brush::Solid(Color::new([0.0, 0.0, 1.0, 1.0])));
    }

    #[test]
    fn from_args_rejects_bad_options() {
        let base = || {
            vec![
                ArgValue::Series(vec![60.0, 80.0]),
                ArgValue::Scalar(50.0),
            ]
        };

        let mut args = base();
        args.push(ArgValue::Text("FaceColor".into()));
        args.push(ArgValue::ColorRows(vec![[0.0; 3], [1.0; 3]]));
        assert_eq!(
            BulletChart::from_args(args).unwrap_err(),
            ChartError::FaceColorNonScalar { got: 2 }
        );

        let mut args = base();
        args.push(ArgValue::Text("Bogus".into()));
        args.push(ArgValue::Switch(true));
        assert_eq!(
            BulletChart::from_args(args).unwrap_err(),
            ChartError::UnknownOption("Bogus".into())
        );

        let mut args = base();
        args.push(ArgValue::Text("Limits".into()));
        args.push(ArgValue::Series(vec![5.0, 2.0]));
        assert_eq!(
            BulletChart::from_args(args).unwrap_err(),
            ChartError::InvalidLimits(5.0, 2.0)
        );
    }

    #[test]
    fn empty_expected_series_is_a_valid_degenerate_chart() {
        let chart = BulletChart::new(Vec::new(), 5.0).expect("valid chart");
        assert_eq!(fill_marks(&chart).len(), 1, "only the actual bar");
        assert_eq!(chart.limits(), (0.0, 5.0));
    }
}
