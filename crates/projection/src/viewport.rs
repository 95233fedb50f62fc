//! Viewport mapping from projected meters to output pixels.

/// Axis-aligned bounds in projected meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Smallest bounds enclosing a set of projected points.
    ///
    /// Returns None for an empty set.
    pub fn enclosing(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Bounds> {
        let mut iter = points.into_iter();
        let (x0, y0) = iter.next()?;
        let mut b = Bounds {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for (x, y) in iter {
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        Some(b)
    }

    /// Expand each side by `frac` of the corresponding extent.
    ///
    /// Degenerate (single-point) extents get a fixed 100 km pad so the
    /// viewport never collapses.
    pub fn padded(&self, frac: f64) -> Bounds {
        let pad_x = ((self.max_x - self.min_x) * frac).max(100_000.0 * frac.min(1.0));
        let pad_y = ((self.max_y - self.min_y) * frac).max(100_000.0 * frac.min(1.0));
        Bounds {
            min_x: self.min_x - pad_x,
            min_y: self.min_y - pad_y,
            max_x: self.max_x + pad_x,
            max_y: self.max_y + pad_y,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Maps projected meters to pixel coordinates.
///
/// Preserves aspect ratio: the bounds are fit inside the pixel area with
/// uniform scale and centered. Pixel y grows downward.
#[derive(Debug, Clone)]
pub struct Viewport {
    bounds: Bounds,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    width: u32,
    height: u32,
}

impl Viewport {
    /// Fit `bounds` into a `width` x `height` pixel area.
    pub fn fit(bounds: Bounds, width: u32, height: u32) -> Viewport {
        let sx = width as f64 / bounds.width().max(1.0);
        let sy = height as f64 / bounds.height().max(1.0);
        let scale = sx.min(sy);

        // Center the mapped bounds inside the pixel area
        let offset_x = (width as f64 - bounds.width() * scale) / 2.0;
        let offset_y = (height as f64 - bounds.height() * scale) / 2.0;

        Viewport {
            bounds,
            scale,
            offset_x,
            offset_y,
            width,
            height,
        }
    }

    /// Projected meters to (fractional) pixel coordinates.
    pub fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        let px = (x - self.bounds.min_x) * self.scale + self.offset_x;
        let py = (self.bounds.max_y - y) * self.scale + self.offset_y;
        (px, py)
    }

    /// Whether a pixel coordinate falls inside the pixel area.
    pub fn on_screen(&self, px: f64, py: f64) -> bool {
        px >= 0.0 && py >= 0.0 && px < self.width as f64 && py < self.height as f64
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enclosing_empty() {
        assert!(Bounds::enclosing(std::iter::empty()).is_none());
    }

    #[test]
    fn test_enclosing_points() {
        let b = Bounds::enclosing([(0.0, 0.0), (10.0, -5.0), (-3.0, 7.0)]).unwrap();
        assert_eq!(b.min_x, -3.0);
        assert_eq!(b.max_x, 10.0);
        assert_eq!(b.min_y, -5.0);
        assert_eq!(b.max_y, 7.0);
    }

    #[test]
    fn test_padded_grows_symmetrically() {
        let b = Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 100.0,
            max_y: 200.0,
        };
        let p = b.padded(0.05);
        assert!(p.min_x < 0.0 && p.max_x > 100.0);
        assert!((p.width() - b.width() - 2.0 * (p.max_x - 100.0)).abs() < 1e-9);
    }

    #[test]
    fn test_viewport_corners() {
        let b = Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 100.0,
            max_y: 100.0,
        };
        let vp = Viewport::fit(b, 200, 200);

        // min_x/max_y is the top-left corner
        let (px, py) = vp.to_pixel(0.0, 100.0);
        assert!((px - 0.0).abs() < 1e-9);
        assert!((py - 0.0).abs() < 1e-9);

        // max_x/min_y is the bottom-right corner
        let (px, py) = vp.to_pixel(100.0, 0.0);
        assert!((px - 200.0).abs() < 1e-9);
        assert!((py - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_viewport_preserves_aspect() {
        // Wide bounds in a square pixel area: vertical centering expected
        let b = Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 200.0,
            max_y: 100.0,
        };
        let vp = Viewport::fit(b, 400, 400);

        let (_, py_top) = vp.to_pixel(0.0, 100.0);
        let (_, py_bottom) = vp.to_pixel(0.0, 0.0);
        assert!((py_top - 100.0).abs() < 1e-9, "top margin, got {}", py_top);
        assert!(
            (py_bottom - 300.0).abs() < 1e-9,
            "bottom margin, got {}",
            py_bottom
        );
    }
}
