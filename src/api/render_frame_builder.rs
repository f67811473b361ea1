use crate::core::{
    BOTTOM_LABEL_RESERVE, DataPoint, GraphLayout, ValueRange, Viewport, resolve_x, resolve_y,
    visible_window,
};
use crate::render::{CirclePrimitive, Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::{LineGraphConfig, compact_value};

pub const GRID_LINE_WIDTH: f64 = 0.3;
pub const MAX_HORIZONTAL_GRID_LINES: usize = 3;
pub const TOP_LABEL_OFFSET: f64 = 10.0;
pub const LABEL_BOX_HEIGHT: f64 = 33.0;
pub const MARKER_STROKE_WIDTH: f64 = 3.0;

/// Builds the complete, ordered command list for one draw pass.
///
/// The function is pure: identical inputs produce identical frames, and
/// degenerate inputs (empty series, one point, flat values, zero-sized
/// viewport) produce substitute geometry rather than an error.
#[must_use]
pub fn build_line_graph_frame(
    series: &[DataPoint],
    config: &LineGraphConfig,
    viewport: Viewport,
) -> RenderFrame {
    let mut frame = RenderFrame::new(viewport);
    let window = visible_window(series, config.max_visible_entries);
    let Some(range) = ValueRange::from_points(window) else {
        return frame;
    };

    let count = window.len();
    let layout = GraphLayout::new(viewport, count);
    let y_of = |point: &DataPoint| {
        resolve_y(point.value(), range, layout.bottom_base, layout.graph_height)
    };

    for (index, point) in window.iter().enumerate() {
        let x = resolve_x(index, layout.dx);
        let y = y_of(point);

        if config.show_vertical_grid {
            frame.push(LinePrimitive::new(
                x,
                0.0,
                x,
                layout.bottom_base,
                GRID_LINE_WIDTH,
                Color::GRID_GRAY,
            ));
        }

        if config.show_horizontal_grid && index < MAX_HORIZONTAL_GRID_LINES {
            let row_y = layout.bottom_base - layout.hy * index as f64;
            frame.push(LinePrimitive::new(
                0.0,
                row_y,
                layout.width,
                row_y,
                GRID_LINE_WIDTH,
                Color::GRID_GRAY,
            ));
        }

        if config.show_top_labels {
            frame.push(label(
                compact_value(point.value()),
                x,
                y - TOP_LABEL_OFFSET,
                config,
                layout.hy,
            ));
        }

        if config.show_bottom_labels {
            frame.push(label(
                point.label(),
                x,
                layout.bottom_base + BOTTOM_LABEL_RESERVE,
                config,
                layout.hy,
            ));
        }

        frame.push(CirclePrimitive::new(
            x,
            y,
            config.point_radius,
            config.tint_color,
            MARKER_STROKE_WIDTH,
        ));

        if let Some(next) = window.get(index + 1) {
            frame.push(LinePrimitive::new(
                x,
                y,
                resolve_x(index + 1, layout.dx),
                y_of(next),
                config.line_width,
                config.tint_color,
            ));
        }
    }

    frame
}

fn label(
    text: impl Into<String>,
    x: f64,
    y: f64,
    config: &LineGraphConfig,
    box_width: f64,
) -> TextPrimitive {
    TextPrimitive::new(
        text,
        x,
        y,
        config.label_font_size_px,
        config.label_color,
        TextHAlign::Center,
    )
    .with_box(box_width, LABEL_BOX_HEIGHT)
}
