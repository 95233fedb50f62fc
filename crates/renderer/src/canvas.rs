//! RGBA pixel canvas with the drawing primitives the map needs.

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Same color with a scaled alpha channel.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: (self.a as f32 * alpha.clamp(0.0, 1.0)) as u8,
            ..self
        }
    }
}

/// Linear color interpolation
pub fn interpolate_color(color1: Color, color2: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let t_inv = 1.0 - t;

    Color::new(
        ((color1.r as f32 * t_inv) + (color2.r as f32 * t)) as u8,
        ((color1.g as f32 * t_inv) + (color2.g as f32 * t)) as u8,
        ((color1.b as f32 * t_inv) + (color2.b as f32 * t)) as u8,
        ((color1.a as f32 * t_inv) + (color2.a as f32 * t)) as u8,
    )
}

/// Line style for polyline drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineStyle {
    Solid,
    /// Dash/gap lengths in pixels.
    Dashed { on: f32, off: f32 },
}

/// Row-major RGBA pixel buffer (4 bytes per pixel).
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a canvas filled with one color.
    pub fn filled(width: u32, height: u32, background: Color) -> Self {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            pixels.extend_from_slice(&[background.r, background.g, background.b, background.a]);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Replace the full pixel buffer. Panics when the length differs.
    pub fn set_pixels(&mut self, pixels: Vec<u8>) {
        assert_eq!(pixels.len(), (self.width * self.height * 4) as usize);
        self.pixels = pixels;
    }

    /// Read one pixel; None outside the canvas.
    pub fn get(&self, x: i64, y: i64) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        Some(Color::new(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ))
    }

    /// Source-over blend one pixel. Out-of-bounds writes are ignored.
    pub fn blend(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;

        if color.a == 255 {
            self.pixels[idx] = color.r;
            self.pixels[idx + 1] = color.g;
            self.pixels[idx + 2] = color.b;
            self.pixels[idx + 3] = 255;
            return;
        }
        if color.a == 0 {
            return;
        }

        let sa = color.a as f32 / 255.0;
        let da = self.pixels[idx + 3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return;
        }

        for (c, &s) in [color.r, color.g, color.b].iter().enumerate() {
            let d = self.pixels[idx + c] as f32;
            let blended = (s as f32 * sa + d * da * (1.0 - sa)) / out_a;
            self.pixels[idx + c] = blended.round().min(255.0) as u8;
        }
        self.pixels[idx + 3] = (out_a * 255.0).round().min(255.0) as u8;
    }

    /// Draw a 1px line segment, optionally dashed.
    ///
    /// `dash_offset` carries the accumulated pattern distance between
    /// consecutive segments of a polyline so dashes flow across joints.
    fn draw_segment(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        color: Color,
        style: LineStyle,
        dash_offset: f32,
    ) -> f32 {
        let dx = x1 - x0;
        let dy = y1 - y0;
        let length = (dx * dx + dy * dy).sqrt();
        if length < 1e-9 {
            return dash_offset;
        }

        let steps = length.ceil() as usize;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let dist = dash_offset + (t * length) as f32;

            let visible = match style {
                LineStyle::Solid => true,
                LineStyle::Dashed { on, off } => {
                    let period = on + off;
                    (dist % period) < on
                }
            };
            if visible {
                let px = (x0 + dx * t).round() as i64;
                let py = (y0 + dy * t).round() as i64;
                self.blend(px, py, color);
            }
        }

        dash_offset + length as f32
    }

    /// Draw a polyline through pixel-space points.
    pub fn draw_polyline(&mut self, points: &[(f64, f64)], color: Color, style: LineStyle) {
        let mut dash_offset = 0.0f32;
        for pair in points.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            dash_offset = self.draw_segment(x0, y0, x1, y1, color, style, dash_offset);
        }
    }

    /// Fill a simple polygon (even-odd scanline rule).
    ///
    /// The ring is closed implicitly (last point connects to the first).
    pub fn fill_polygon(&mut self, ring: &[(f64, f64)], color: Color) {
        if ring.len() < 3 {
            return;
        }

        let min_y = ring
            .iter()
            .map(|&(_, y)| y)
            .fold(f64::INFINITY, f64::min)
            .max(0.0)
            .floor() as i64;
        let max_y = ring
            .iter()
            .map(|&(_, y)| y)
            .fold(f64::NEG_INFINITY, f64::max)
            .min(self.height as f64 - 1.0)
            .ceil() as i64;

        for y in min_y..=max_y {
            let scan_y = y as f64 + 0.5;

            // Collect crossings of the scanline with polygon edges
            let mut crossings = Vec::new();
            for i in 0..ring.len() {
                let (x0, y0) = ring[i];
                let (x1, y1) = ring[(i + 1) % ring.len()];
                if (y0 <= scan_y && y1 > scan_y) || (y1 <= scan_y && y0 > scan_y) {
                    let t = (scan_y - y0) / (y1 - y0);
                    crossings.push(x0 + t * (x1 - x0));
                }
            }
            crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

            for span in crossings.chunks_exact(2) {
                let x_start = span[0].round().max(0.0) as i64;
                let x_end = span[1].round().min(self.width as f64 - 1.0) as i64;
                for x in x_start..=x_end {
                    self.blend(x, y, color);
                }
            }
        }
    }

    /// Fill a circle of `diameter` pixels centered at (cx, cy).
    ///
    /// A diameter below 1 draws a single pixel.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, diameter: f64, color: Color) {
        if diameter <= 1.0 {
            self.blend(cx.round() as i64, cy.round() as i64, color);
            return;
        }

        let radius = diameter / 2.0;
        let r2 = radius * radius;
        let min_x = (cx - radius).floor() as i64;
        let max_x = (cx + radius).ceil() as i64;
        let min_y = (cy - radius).floor() as i64;
        let max_y = (cy + radius).ceil() as i64;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.blend(x, y, color);
                }
            }
        }
    }

    /// Fill an axis-aligned rectangle.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: u32, h: u32, color: Color) {
        for yy in y..y + h as i64 {
            for xx in x..x + w as i64 {
                self.blend(xx, yy, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_canvas() {
        let c = Canvas::filled(4, 3, Color::rgb(10, 20, 30));
        assert_eq!(c.pixels().len(), 4 * 3 * 4);
        assert_eq!(c.get(0, 0), Some(Color::rgb(10, 20, 30)));
        assert_eq!(c.get(4, 0), None);
    }

    #[test]
    fn test_blend_opaque_replaces() {
        let mut c = Canvas::filled(2, 2, Color::rgb(0, 0, 0));
        c.blend(1, 1, Color::rgb(255, 0, 0));
        assert_eq!(c.get(1, 1), Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn test_blend_half_alpha() {
        let mut c = Canvas::filled(1, 1, Color::rgb(0, 0, 0));
        c.blend(0, 0, Color::new(255, 255, 255, 128));
        let px = c.get(0, 0).unwrap();
        assert!((120..=135).contains(&px.r), "expected ~50% gray, got {}", px.r);
        assert_eq!(px.a, 255);
    }

    #[test]
    fn test_polyline_draws_pixels() {
        let mut c = Canvas::filled(10, 10, Color::transparent());
        c.draw_polyline(
            &[(0.0, 5.0), (9.0, 5.0)],
            Color::rgb(255, 0, 0),
            LineStyle::Solid,
        );
        assert_eq!(c.get(0, 5), Some(Color::rgb(255, 0, 0)));
        assert_eq!(c.get(9, 5), Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn test_dashed_line_has_gaps() {
        let mut c = Canvas::filled(40, 3, Color::transparent());
        c.draw_polyline(
            &[(0.0, 1.0), (39.0, 1.0)],
            Color::rgb(0, 0, 0),
            LineStyle::Dashed { on: 4.0, off: 4.0 },
        );
        let drawn = (0..40).filter(|&x| c.get(x, 1).unwrap().a > 0).count();
        assert!(drawn > 10 && drawn < 30, "expected gaps, drew {} px", drawn);
    }

    #[test]
    fn test_fill_polygon_square() {
        let mut c = Canvas::filled(10, 10, Color::transparent());
        c.fill_polygon(
            &[(2.0, 2.0), (7.0, 2.0), (7.0, 7.0), (2.0, 7.0)],
            Color::rgb(0, 255, 0),
        );
        assert_eq!(c.get(4, 4), Some(Color::rgb(0, 255, 0)));
        assert_eq!(c.get(0, 0).unwrap().a, 0);
        assert_eq!(c.get(9, 9).unwrap().a, 0);
    }

    #[test]
    fn test_fill_circle_diameter() {
        let mut c = Canvas::filled(20, 20, Color::transparent());
        c.fill_circle(10.0, 10.0, 8.0, Color::rgb(0, 0, 255));
        assert!(c.get(10, 10).unwrap().a > 0);
        // Outside the radius
        assert_eq!(c.get(10, 3).unwrap().a, 0);
        assert_eq!(c.get(17, 10).unwrap().a, 0);
    }

    #[test]
    fn test_fill_circle_tiny_is_single_pixel() {
        let mut c = Canvas::filled(5, 5, Color::transparent());
        c.fill_circle(2.0, 2.0, 1.0, Color::rgb(9, 9, 9));
        let drawn: usize = (0..5)
            .flat_map(|y| (0..5).map(move |x| (x, y)))
            .filter(|&(x, y)| c.get(x, y).unwrap().a > 0)
            .count();
        assert_eq!(drawn, 1);
    }

    #[test]
    fn test_interpolate_color_midpoint() {
        let c = interpolate_color(Color::rgb(0, 0, 0), Color::rgb(200, 100, 50), 0.5);
        assert_eq!((c.r, c.g, c.b), (100, 50, 25));
    }
}
