//! Station marker pass.

use tracing::debug;

use projection::{LambertConformal, Viewport};

use crate::canvas::Canvas;
use crate::colormap::{ColorScale, Colormap};

/// One station to plot: position in geographic degrees plus the value that
/// drives the marker color. Callers guarantee the value is present; rows
/// with a missing value were filtered out upstream.
#[derive(Debug, Clone, Copy)]
pub struct StationPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub value: f64,
}

/// Draw one filled circle per station, colored by the value.
///
/// Returns the number of markers drawn, which equals the number of input
/// points: markers projecting outside the viewport are still drawn (clipped
/// at the canvas edge), matching one-marker-per-surviving-row.
pub fn draw_markers(
    canvas: &mut Canvas,
    proj: &LambertConformal,
    viewport: &Viewport,
    points: &[StationPoint],
    colormap: &Colormap,
    scale: &ColorScale,
    marker_size: u32,
) -> usize {
    let diameter = marker_size.max(1) as f64;

    for point in points {
        let (x, y) = proj.project(point.latitude, point.longitude);
        let (px, py) = viewport.to_pixel(x, y);
        let color = colormap.sample(scale.normalize(point.value));
        canvas.fill_circle(px, py, diameter, color);
    }

    debug!(markers = points.len(), "Drew station markers");
    points.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Color;
    use projection::viewport::Bounds;

    fn setup() -> (Canvas, LambertConformal, Viewport) {
        let canvas = Canvas::filled(100, 100, Color::rgb(255, 255, 255));
        let proj = LambertConformal::north_american();
        let bounds = Bounds {
            min_x: -2_000_000.0,
            min_y: -2_000_000.0,
            max_x: 2_000_000.0,
            max_y: 2_000_000.0,
        };
        let viewport = Viewport::fit(bounds, 100, 100);
        (canvas, proj, viewport)
    }

    #[test]
    fn test_marker_count_equals_input_rows() {
        let (mut canvas, proj, viewport) = setup();
        let points = vec![
            StationPoint { latitude: 39.0, longitude: -96.0, value: 10.0 },
            StationPoint { latitude: 35.0, longitude: -90.0, value: 20.0 },
            StationPoint { latitude: 42.0, longitude: -100.0, value: 15.0 },
        ];
        let cmap = Colormap::by_name("Oranges").unwrap();
        let scale = ColorScale::from_bounds(None, None, &[10.0, 15.0, 20.0]);

        let drawn = draw_markers(&mut canvas, &proj, &viewport, &points, &cmap, &scale, 5);
        assert_eq!(drawn, points.len());
    }

    #[test]
    fn test_empty_input_draws_nothing() {
        let (mut canvas, proj, viewport) = setup();
        let cmap = Colormap::by_name("Oranges").unwrap();
        let scale = ColorScale::from_bounds(Some(0.0), Some(1.0), &[]);

        let drawn = draw_markers(&mut canvas, &proj, &viewport, &[], &cmap, &scale, 5);
        assert_eq!(drawn, 0);

        for y in 0..100 {
            for x in 0..100 {
                assert_eq!(canvas.get(x, y), Some(Color::rgb(255, 255, 255)));
            }
        }
    }

    #[test]
    fn test_marker_paints_projection_origin() {
        let (mut canvas, proj, viewport) = setup();
        // The projection origin lands at the canvas center
        let points = [StationPoint { latitude: 39.0, longitude: -96.0, value: 5.0 }];
        let cmap = Colormap::by_name("Greys").unwrap();
        let scale = ColorScale::from_bounds(Some(0.0), Some(10.0), &[5.0]);

        draw_markers(&mut canvas, &proj, &viewport, &points, &cmap, &scale, 7);

        let center = canvas.get(50, 50).unwrap();
        assert_ne!(center, Color::rgb(255, 255, 255), "center should be painted");
    }
}
