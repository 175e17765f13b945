// Copyright 2026 the Bulletviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a pair of bullet charts to SVG files.

mod svg;

use bulletviz_chart::{BulletChart, ChartError, Orientation, Palette};
use kurbo::Rect;
use peniko::color::palette::css;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    write_chart("bullet_vertical.svg", revenue_chart(Orientation::Vertical)?)?;
    write_chart("bullet_horizontal.svg", revenue_chart(Orientation::Horizontal)?)?;
    Ok(())
}

fn revenue_chart(orientation: Orientation) -> Result<BulletChart, ChartError> {
    let mut chart = BulletChart::new(vec![150.0, 225.0, 300.0], 270.0)?;
    chart.set_category(Some("Revenue".into()))?;
    chart.set_title("FY26 revenue vs. plan ($k)")?;
    chart.set_orientation(orientation)?;
    chart.set_face_color(css::STEEL_BLUE)?;
    chart.set_colormap(Palette::new(vec![
        [0.91, 0.91, 0.91],
        [0.78, 0.78, 0.78],
        [0.62, 0.62, 0.62],
    ]))?;
    chart.set_target_data(Some(250.0))?;
    chart.set_target_line_visible(true)?;
    chart.set_legend_display_names(Some(vec![
        "Poor".into(),
        "Satisfactory".into(),
        "Good".into(),
    ]))?;
    chart.set_legend_visible(true)?;
    Ok(chart)
}

fn write_chart(path: &str, chart: BulletChart) -> Result<(), std::io::Error> {
    let marks = chart.scene().marks_in_draw_order();
    let svg = svg::scene_to_svg(&marks, view_box(&marks));
    std::fs::write(path, &svg)?;
    println!("wrote {path}");
    Ok(())
}

/// Unions mark bounds and pads so axis labels, the title, and the legend fit.
fn view_box(marks: &[&bulletviz_core::Mark]) -> Rect {
    let mut view: Option<Rect> = None;
    for m in marks.iter().filter(|m| m.visible) {
        let b = m.payload.bounds();
        view = Some(match view {
            None => b,
            Some(r) => r.union(b),
        });
    }
    let view = view.unwrap_or(Rect::new(0.0, 0.0, 480.0, 320.0));
    view.inflate(70.0, 40.0)
}
