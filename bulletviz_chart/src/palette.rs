// Copyright 2026 the Bulletviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Comparative-band color palettes.
//!
//! A palette is an ordered set of RGB rows; per-bar colors are derived by
//! sampling the palette at evenly spaced positions and linearly interpolating
//! between adjacent rows. Sampling is a pure function of `(palette, count)`,
//! independent of any prior chart state.

use peniko::Color;

/// An ordered set of RGB color rows, each channel in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    rows: Vec<[f64; 3]>,
}

/// Default comparative ramp: light-to-dark grays, the conventional band
/// coloring for bullet charts.
const DEFAULT_ROWS: [[f64; 3]; 3] = [
    [0.85, 0.85, 0.85],
    [0.65, 0.65, 0.65],
    [0.45, 0.45, 0.45],
];

impl Palette {
    /// Creates a palette from RGB rows.
    ///
    /// Channels are clamped into `[0, 1]`; non-finite channels become `0`.
    /// An empty row set falls back to the default comparative ramp.
    pub fn new(rows: Vec<[f64; 3]>) -> Self {
        if rows.is_empty() {
            return Self::default();
        }
        let rows = rows
            .into_iter()
            .map(|row| row.map(|c| if c.is_finite() { c.clamp(0.0, 1.0) } else { 0.0 }))
            .collect();
        Self { rows }
    }

    /// Returns the palette rows.
    pub fn rows(&self) -> &[[f64; 3]] {
        &self.rows
    }

    /// Derives `count` colors by sampling the palette at evenly spaced
    /// positions.
    ///
    /// With `count >= 2` the samples span the full palette (first row through
    /// last row); a single sample takes the final row. Deterministic:
    /// identical inputs always yield identical colors.
    pub fn sample(&self, count: usize) -> Vec<Color> {
        let last = self.rows.len() - 1;
        (0..count)
            .map(|i| {
                let pos = if count == 1 {
                    last as f64
                } else {
                    i as f64 / (count - 1) as f64 * last as f64
                };
                let lo = pos.floor() as usize;
                let hi = pos.ceil() as usize;
                let t = pos - lo as f64;
                let row = lerp_rows(self.rows[lo], self.rows[hi], t);
                Color::new([row[0] as f32, row[1] as f32, row[2] as f32, 1.0])
            })
            .collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS.to_vec(),
        }
    }
}

fn lerp_rows(a: [f64; 3], b: [f64; 3], t: f64) -> [f64; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}
