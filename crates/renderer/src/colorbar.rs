//! Horizontal color bar legend.

use crate::canvas::{Canvas, Color, LineStyle};
use crate::colormap::{ColorScale, Colormap};
use crate::text::TextRenderer;

/// Placement of the bar itself; ticks and labels render below it.
#[derive(Debug, Clone, Copy)]
pub struct ColorbarLayout {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

const FRAME: Color = Color::rgb(60, 60, 60);
const TICK_LEN: i64 = 4;
const TICK_FRACTIONS: [f32; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];
const TICK_FONT_SIZE: f32 = 12.0;
const LABEL_FONT_SIZE: f32 = 14.0;

/// Draw the gradient strip, frame, tick values and the centered label.
///
/// The label is expected pre-formatted (underscores already replaced,
/// title-cased). Text silently degrades when no host font is available.
pub fn draw_colorbar(
    canvas: &mut Canvas,
    colormap: &Colormap,
    scale: &ColorScale,
    label: &str,
    text: &TextRenderer,
    layout: ColorbarLayout,
) {
    // Gradient strip, one column at a time
    for col in 0..layout.width {
        let t = col as f32 / (layout.width.saturating_sub(1)).max(1) as f32;
        let color = colormap.sample(t);
        for row in 0..layout.height {
            canvas.blend(layout.x + col as i64, layout.y + row as i64, color);
        }
    }

    // Frame
    let (x0, y0) = (layout.x as f64, layout.y as f64);
    let (x1, y1) = (
        (layout.x + layout.width as i64) as f64,
        (layout.y + layout.height as i64) as f64,
    );
    canvas.draw_polyline(
        &[(x0, y0), (x1, y0), (x1, y1), (x0, y1), (x0, y0)],
        FRAME,
        LineStyle::Solid,
    );

    // Ticks and tick values
    for t in TICK_FRACTIONS {
        let px = layout.x + (t * (layout.width - 1) as f32) as i64;
        canvas.draw_polyline(
            &[
                (px as f64, y1),
                (px as f64, y1 + TICK_LEN as f64),
            ],
            FRAME,
            LineStyle::Solid,
        );

        let value = scale.vmin + t as f64 * (scale.vmax - scale.vmin);
        text.draw_centered(
            canvas,
            &format_tick(value),
            px as i32,
            (y1 as i64 + TICK_LEN + 2) as i32,
            TICK_FONT_SIZE,
            FRAME,
        );
    }

    // Variable label, centered under the ticks
    let label_y = y1 as i64 + TICK_LEN + 2 + TICK_FONT_SIZE as i64 + 4;
    text.draw_centered(
        canvas,
        label,
        (layout.x + layout.width as i64 / 2) as i32,
        label_y as i32,
        LABEL_FONT_SIZE,
        Color::rgb(20, 20, 20),
    );
}

/// Format a tick value: one decimal place, matching typical observation
/// precision.
fn format_tick(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}
