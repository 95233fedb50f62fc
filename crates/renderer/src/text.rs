//! Text drawing for the color bar label and tick values.
//!
//! Uses rusttype + imageproc. The font is discovered on the host at startup
//! (DejaVu or Liberation, overridable via `BUOYPLOT_FONT`); when no font can
//! be found the figure is still produced, just without text, with a warning.

use std::fs;
use std::path::PathBuf;

use image::{ImageBuffer, Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use rusttype::{point, Font, Scale};
use tracing::{debug, warn};

use crate::canvas::{Canvas, Color};

/// Environment override for the label font.
const FONT_ENV: &str = "BUOYPLOT_FONT";

/// Common sans font locations, checked in order.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
];

/// Label renderer with an optional host font.
pub struct TextRenderer {
    font: Option<Font<'static>>,
}

impl TextRenderer {
    /// Discover and load a host font.
    ///
    /// Never fails: a missing font degrades to text-free output.
    pub fn load() -> TextRenderer {
        for path in font_candidates() {
            match fs::read(&path) {
                Ok(bytes) => {
                    if let Some(font) = Font::try_from_vec(bytes) {
                        debug!(path = %path.display(), "Loaded label font");
                        return TextRenderer { font: Some(font) };
                    }
                    warn!(path = %path.display(), "Font file exists but failed to parse");
                }
                Err(_) => continue,
            }
        }

        warn!("No usable font found; figure text will be omitted");
        TextRenderer { font: None }
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Pixel width of `text` at the given size; None without a font.
    pub fn measure(&self, text: &str, size: f32) -> Option<f32> {
        let font = self.font.as_ref()?;
        let scale = Scale::uniform(size);
        let width = font
            .layout(text, scale, point(0.0, 0.0))
            .filter_map(|g| g.pixel_bounding_box().map(|bb| bb.max.x as f32))
            .fold(0.0f32, f32::max);
        Some(width)
    }

    /// Draw `text` with its top-left corner at (x, y). No-op without a font.
    pub fn draw(&self, canvas: &mut Canvas, text: &str, x: i32, y: i32, size: f32, color: Color) {
        let Some(font) = self.font.as_ref() else {
            return;
        };

        let w = canvas.width();
        let mut img: RgbaImage = ImageBuffer::from_raw(w, canvas.height(), canvas.pixels().to_vec())
            .expect("canvas buffer size");

        draw_text_mut(
            &mut img,
            Rgba([color.r, color.g, color.b, color.a]),
            x,
            y,
            Scale::uniform(size),
            font,
            text,
        );

        canvas.set_pixels(img.into_raw());
    }

    /// Draw `text` horizontally centered on `cx`.
    pub fn draw_centered(
        &self,
        canvas: &mut Canvas,
        text: &str,
        cx: i32,
        y: i32,
        size: f32,
        color: Color,
    ) {
        let Some(width) = self.measure(text, size) else {
            return;
        };
        self.draw(canvas, text, cx - (width / 2.0) as i32, y, size, color);
    }
}

fn font_candidates() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(custom) = std::env::var(FONT_ENV) {
        paths.push(PathBuf::from(custom));
    }
    paths.extend(FONT_CANDIDATES.iter().map(PathBuf::from));
    paths
}
