// Copyright 2026 the Bulletviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend mark generation.
//!
//! A vertical list of color swatches with text labels. The chart binds legend
//! items to the comparative-band set only; the actual bar and target line are
//! never listed.

use bulletviz_core::{Mark, MarkId, TextAnchor, TextBaseline};
use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use crate::z_order;

/// A single legend row.
#[derive(Clone, Debug)]
pub struct LegendItem {
    /// The label shown next to the swatch.
    pub label: String,
    /// The swatch fill paint.
    pub fill: Brush,
}

/// A swatches-and-labels legend anchored at a top-left origin.
#[derive(Clone, Debug)]
pub struct LegendSwatches {
    /// Stable-id base; each generated mark uses a deterministic offset.
    pub id_base: u64,
    /// Swatch square size.
    pub swatch_size: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Horizontal gap between swatch and label.
    pub label_dx: f64,
    /// Label font size.
    pub font_size: f64,
    /// Label color.
    pub text_fill: Brush,
    /// Items in display order.
    pub items: Vec<LegendItem>,
}

impl LegendSwatches {
    /// Creates a legend with default styling.
    pub fn new(id_base: u64, items: Vec<LegendItem>) -> Self {
        Self {
            id_base,
            swatch_size: 10.0,
            row_gap: 6.0,
            label_dx: 6.0,
            font_size: 10.0,
            text_fill: css::BLACK.into(),
            items,
        }
    }

    /// Generates legend marks (swatch rect + label text per item) at `origin`.
    pub fn marks(&self, origin: Point) -> Vec<Mark> {
        let row_height = self.swatch_size.max(self.font_size);
        let mut out = Vec::new();

        for (i, item) in self.items.iter().enumerate() {
            let y = origin.y + i as f64 * (row_height + self.row_gap);
            let swatch_y = y + (row_height - self.swatch_size) * 0.5;

            out.push(
                Mark::rect(
                    MarkId::from_raw(self.id_base + i as u64),
                    Rect::new(
                        origin.x,
                        swatch_y,
                        origin.x + self.swatch_size,
                        swatch_y + self.swatch_size,
                    ),
                )
                .with_fill(item.fill.clone())
                .with_z_index(z_order::LEGEND_SWATCHES),
            );

            out.push(
                Mark::text(
                    MarkId::from_raw(self.id_base + 1000 + i as u64),
                    Point::new(
                        origin.x + self.swatch_size + self.label_dx,
                        y + row_height * 0.5,
                    ),
                    item.label.clone(),
                )
                .with_font_size(self.font_size)
                .with_fill(self.text_fill.clone())
                .with_anchor(TextAnchor::Start)
                .with_baseline(TextBaseline::Middle)
                .with_z_index(z_order::LEGEND_LABELS),
            );
        }
        out
    }
}
