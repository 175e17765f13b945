// Copyright 2026 the Bulletviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! A bullet chart has exactly two axes: a numeric axis carrying the value
//! scale and a category axis carrying a single label. Which edge each sits on
//! depends on chart orientation, so both axis types are parameterized over
//! [`AxisOrient`]: `Left` or `Bottom`.

use bulletviz_core::{Mark, MarkId, TextAnchor, TextBaseline};
use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use crate::scale::{ScaleLinear, format_tick, tick_step};
use crate::z_order;

/// A paint + width pair for stroked rules (domain lines, ticks, gridlines).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis domain line and tick marks.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels and the category label.
    pub label_fill: Brush,
    /// Font size for tick labels and the category label.
    pub label_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = StrokeStyle::default();
        Self {
            label_fill: rule.brush.clone(),
            rule,
            label_font_size: 10.0,
        }
    }
}

/// Gridline styling.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Stroke style for gridlines.
    pub stroke: StrokeStyle,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle {
                brush: Brush::Solid(css::BLACK.with_alpha(40.0 / 255.0)),
                stroke_width: 1.0,
            },
        }
    }
}

/// The plot edge an axis is placed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    /// A vertical axis to the left of the plot.
    Left,
    /// A horizontal axis below the plot.
    Bottom,
}

/// The numeric (value) axis: domain line, ticks, tick labels, optional grid.
#[derive(Clone, Debug)]
pub struct NumericAxis {
    /// Stable-id base; each generated mark uses a deterministic offset.
    pub id_base: u64,
    /// Plot edge the axis sits on.
    pub orient: AxisOrient,
    /// Value domain `(low, high)`.
    pub domain: (f64, f64),
    /// Approximate number of ticks.
    pub tick_count: usize,
    /// Tick line length in scene coordinates.
    pub tick_size: f64,
    /// Whether to draw tick marks.
    pub ticks: bool,
    /// Optional gridline styling; `Some` draws gridlines across the plot.
    pub grid: Option<GridStyle>,
    /// Axis styling.
    pub style: AxisStyle,
}

impl NumericAxis {
    /// Creates a numeric axis with default tick settings.
    pub fn new(id_base: u64, orient: AxisOrient, domain: (f64, f64)) -> Self {
        Self {
            id_base,
            orient,
            domain,
            tick_count: 6,
            tick_size: 5.0,
            ticks: true,
            grid: None,
            style: AxisStyle::default(),
        }
    }

    /// Enables gridlines using the provided style.
    pub fn with_grid(mut self, grid: GridStyle) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Sets the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Returns the scale mapping domain values into plot coordinates.
    ///
    /// A left axis maps low values to the bottom of the plot, a bottom axis
    /// maps them to the left edge.
    pub fn scale(&self, plot: Rect) -> ScaleLinear {
        let range = match self.orient {
            AxisOrient::Bottom => (plot.x0, plot.x1),
            AxisOrient::Left => (plot.y1, plot.y0),
        };
        ScaleLinear::new(self.domain, range)
    }

    /// Generates the axis marks for the given plot rectangle.
    pub fn marks(&self, plot: Rect) -> Vec<Mark> {
        let scale = self.scale(plot);
        let ticks = scale.ticks(self.tick_count);
        let step = tick_step(&ticks);
        let tick_extent = if self.ticks { self.tick_size } else { 0.0 };
        let label_gap = 6.0;

        let mut out = Vec::new();

        if let Some(grid) = &self.grid {
            for (i, v) in ticks.iter().copied().enumerate() {
                let id = MarkId::from_raw(self.id_base + 5000 + i as u64);
                let c = scale.map(v);
                let (p0, p1) = match self.orient {
                    AxisOrient::Bottom => (Point::new(c, plot.y0), Point::new(c, plot.y1)),
                    AxisOrient::Left => (Point::new(plot.x0, c), Point::new(plot.x1, c)),
                };
                out.push(
                    Mark::line(id, p0, p1)
                        .with_stroke(grid.stroke.brush.clone(), grid.stroke.stroke_width)
                        .with_z_index(z_order::GRID_LINES),
                );
            }
        }

        // Domain line.
        let (d0, d1) = match self.orient {
            AxisOrient::Bottom => (Point::new(plot.x0, plot.y1), Point::new(plot.x1, plot.y1)),
            AxisOrient::Left => (Point::new(plot.x0, plot.y0), Point::new(plot.x0, plot.y1)),
        };
        out.push(
            Mark::line(MarkId::from_raw(self.id_base), d0, d1)
                .with_stroke(self.style.rule.brush.clone(), self.style.rule.stroke_width)
                .with_z_index(z_order::AXIS_RULES),
        );

        for (i, v) in ticks.iter().copied().enumerate() {
            let c = scale.map(v);

            if self.ticks {
                let (p0, p1) = match self.orient {
                    AxisOrient::Bottom => {
                        (Point::new(c, plot.y1), Point::new(c, plot.y1 + self.tick_size))
                    }
                    AxisOrient::Left => {
                        (Point::new(plot.x0, c), Point::new(plot.x0 - self.tick_size, c))
                    }
                };
                out.push(
                    Mark::line(MarkId::from_raw(self.id_base + 1 + i as u64), p0, p1)
                        .with_stroke(self.style.rule.brush.clone(), self.style.rule.stroke_width)
                        .with_z_index(z_order::AXIS_RULES),
                );
            }

            let label = format_tick(v, step);
            let id = MarkId::from_raw(self.id_base + 1000 + i as u64);
            let mark = match self.orient {
                AxisOrient::Bottom => {
                    Mark::text(id, Point::new(c, plot.y1 + tick_extent + label_gap), label)
                        .with_anchor(TextAnchor::Middle)
                        .with_baseline(TextBaseline::Hanging)
                }
                AxisOrient::Left => {
                    Mark::text(id, Point::new(plot.x0 - tick_extent - label_gap, c), label)
                        .with_anchor(TextAnchor::End)
                        .with_baseline(TextBaseline::Middle)
                }
            };
            out.push(
                mark.with_font_size(self.style.label_font_size)
                    .with_fill(self.style.label_fill.clone())
                    .with_z_index(z_order::AXIS_LABELS),
            );
        }

        out
    }
}

/// The category axis: a domain line and one centered label.
///
/// Native per-tick labels are suppressed; the single category string stands
/// in for them. A left-edge category label is rotated −90°.
#[derive(Clone, Debug)]
pub struct CategoryAxis {
    /// Stable-id base; each generated mark uses a deterministic offset.
    pub id_base: u64,
    /// Plot edge the axis sits on.
    pub orient: AxisOrient,
    /// The category label, if any.
    pub label: Option<String>,
    /// Distance from the domain line to the label.
    pub label_offset: f64,
    /// Axis styling.
    pub style: AxisStyle,
}

impl CategoryAxis {
    /// Creates a category axis.
    pub fn new(id_base: u64, orient: AxisOrient, label: Option<String>) -> Self {
        Self {
            id_base,
            orient,
            label,
            label_offset: 14.0,
            style: AxisStyle::default(),
        }
    }

    /// Generates the axis marks for the given plot rectangle.
    pub fn marks(&self, plot: Rect) -> Vec<Mark> {
        let (d0, d1) = match self.orient {
            AxisOrient::Bottom => (Point::new(plot.x0, plot.y1), Point::new(plot.x1, plot.y1)),
            AxisOrient::Left => (Point::new(plot.x0, plot.y0), Point::new(plot.x0, plot.y1)),
        };
        let mut out = vec![
            Mark::line(MarkId::from_raw(self.id_base), d0, d1)
                .with_stroke(self.style.rule.brush.clone(), self.style.rule.stroke_width)
                .with_z_index(z_order::AXIS_RULES),
        ];

        if let Some(label) = &self.label {
            let id = MarkId::from_raw(self.id_base + 1);
            let mark = match self.orient {
                AxisOrient::Bottom => Mark::text(
                    id,
                    Point::new((plot.x0 + plot.x1) * 0.5, plot.y1 + self.label_offset),
                    label.clone(),
                )
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Hanging),
                AxisOrient::Left => Mark::text(
                    id,
                    Point::new(plot.x0 - self.label_offset, (plot.y0 + plot.y1) * 0.5),
                    label.clone(),
                )
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Alphabetic)
                .with_angle(-90.0),
            };
            out.push(
                mark.with_font_size(self.style.label_font_size)
                    .with_fill(self.style.label_fill.clone())
                    .with_z_index(z_order::AXIS_LABELS),
            );
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use bulletviz_core::{MarkKind, MarkPayload};

    use super::*;

    fn plot() -> Rect {
        Rect::new(40.0, 20.0, 440.0, 280.0)
    }

    #[test]
    fn grid_marks_appear_only_when_enabled() {
        let axis = NumericAxis::new(1000, AxisOrient::Left, (0.0, 100.0));
        let without: Vec<_> = axis.marks(plot());
        assert!(
            without.iter().all(|m| m.z_index != z_order::GRID_LINES),
            "no grid marks expected when grid is disabled"
        );

        let with_grid = axis.with_grid(GridStyle::default()).marks(plot());
        let grid_count = with_grid
            .iter()
            .filter(|m| m.z_index == z_order::GRID_LINES)
            .count();
        assert!(grid_count > 0, "grid marks expected when grid is enabled");
    }

    #[test]
    fn grid_lines_span_the_plot_and_stay_inside_it() {
        let marks = NumericAxis::new(1000, AxisOrient::Left, (0.0, 100.0))
            .with_grid(GridStyle::default())
            .marks(plot());
        for m in marks.iter().filter(|m| m.z_index == z_order::GRID_LINES) {
            let MarkPayload::Line(l) = &m.payload else {
                panic!("grid marks must be lines");
            };
            assert_eq!(l.p0.x, plot().x0);
            assert_eq!(l.p1.x, plot().x1);
            assert!(l.p0.y >= plot().y0 - 1e-9 && l.p0.y <= plot().y1 + 1e-9);
        }
    }

    #[test]
    fn numeric_axis_labels_every_tick() {
        let axis = NumericAxis::new(1000, AxisOrient::Bottom, (0.0, 100.0));
        let marks = axis.marks(plot());
        let ticks = axis.scale(plot()).ticks(axis.tick_count).len();
        let labels = marks.iter().filter(|m| m.kind() == MarkKind::Text).count();
        assert_eq!(labels, ticks);
    }

    #[test]
    fn category_axis_suppresses_ticks() {
        let marks = CategoryAxis::new(2000, AxisOrient::Bottom, Some("Q1".into())).marks(plot());
        let lines = marks.iter().filter(|m| m.kind() == MarkKind::Line).count();
        assert_eq!(lines, 1, "only the domain line should be stroked");
        let texts: Vec<_> = marks.iter().filter(|m| m.kind() == MarkKind::Text).collect();
        assert_eq!(texts.len(), 1);
    }

    #[test]
    fn left_category_label_is_rotated() {
        let marks = CategoryAxis::new(2000, AxisOrient::Left, Some("Q1".into())).marks(plot());
        let text = marks
            .iter()
            .find_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t),
                _ => None,
            })
            .expect("category label expected");
        assert_eq!(text.angle, -90.0);
        assert!(text.pos.x < plot().x0, "label sits left of the plot");
    }
}
