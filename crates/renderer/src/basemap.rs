//! Fixed geographic reference layers.
//!
//! A coarse, Natural-Earth-derived simplification of the map background is
//! embedded as a JSON asset: land and lake rings plus border, state and
//! river polylines in geographic degrees. One fixed resolution; the layers
//! never vary per run. Coastlines are the outlines of the land rings.

use serde::Deserialize;
use tracing::debug;

use buoy_common::{BuoyError, BuoyResult};
use projection::{LambertConformal, Viewport};

use crate::canvas::{Canvas, Color, LineStyle};

/// Embedded basemap geometry.
const BASEMAP_JSON: &str = include_str!("../assets/basemap.json");

/// A sequence of [lon, lat] vertices.
pub type Ring = Vec<[f64; 2]>;

/// Basemap layer geometry in geographic degrees.
#[derive(Debug, Clone, Deserialize)]
pub struct Basemap {
    pub version: String,
    pub resolution: String,
    /// Closed land rings (filled, outlined as coastline).
    pub land: Vec<Ring>,
    /// Closed lake rings (filled with transparency).
    pub lakes: Vec<Ring>,
    /// National border polylines (drawn dashed).
    pub borders: Vec<Ring>,
    /// State/province border polylines (drawn dashed).
    pub states: Vec<Ring>,
    /// River polylines (drawn with transparency).
    pub rivers: Vec<Ring>,
}

/// Colors for the fixed layers, following the usual map-feature palette:
/// muted tan land over pale blue water.
pub mod style {
    use crate::canvas::Color;

    pub const OCEAN: Color = Color::rgb(151, 182, 222);
    pub const LAND: Color = Color::rgb(239, 239, 219);
    pub const COASTLINE: Color = Color::rgb(80, 80, 80);
    pub const BORDER: Color = Color::rgb(90, 90, 90);
    pub const STATE: Color = Color::rgb(120, 120, 120);
    pub const WATER_FEATURE: Color = Color::rgb(151, 182, 222);
}

impl Basemap {
    /// Load the embedded basemap asset.
    pub fn embedded() -> BuoyResult<Basemap> {
        let map: Basemap = serde_json::from_str(BASEMAP_JSON)
            .map_err(|e| BuoyError::Render(format!("invalid basemap asset: {}", e)))?;
        debug!(
            resolution = %map.resolution,
            land = map.land.len(),
            lakes = map.lakes.len(),
            "Loaded basemap"
        );
        Ok(map)
    }

    /// Draw all layers onto the canvas in background-to-foreground order:
    /// ocean, land, lakes, rivers, coastline, national borders, state
    /// borders.
    pub fn draw(&self, canvas: &mut Canvas, proj: &LambertConformal, viewport: &Viewport) {
        // Ocean is the background fill
        let (w, h) = viewport.dimensions();
        canvas.fill_rect(0, 0, w, h, style::OCEAN);

        for ring in &self.land {
            canvas.fill_polygon(&project_ring(ring, proj, viewport), style::LAND);
        }

        for ring in &self.lakes {
            canvas.fill_polygon(
                &project_ring(ring, proj, viewport),
                style::WATER_FEATURE.with_alpha(0.5),
            );
        }

        for line in &self.rivers {
            canvas.draw_polyline(
                &project_ring(line, proj, viewport),
                style::WATER_FEATURE.with_alpha(0.5),
                LineStyle::Solid,
            );
        }

        // Coastline strokes the land rings
        for ring in &self.land {
            let mut closed = project_ring(ring, proj, viewport);
            if let Some(&first) = closed.first() {
                closed.push(first);
            }
            canvas.draw_polyline(&closed, style::COASTLINE, LineStyle::Solid);
        }

        let dashed = LineStyle::Dashed { on: 5.0, off: 4.0 };
        for line in &self.borders {
            canvas.draw_polyline(&project_ring(line, proj, viewport), style::BORDER, dashed);
        }
        for line in &self.states {
            canvas.draw_polyline(&project_ring(line, proj, viewport), style::STATE, dashed);
        }
    }
}

/// Project a geographic ring into pixel space.
fn project_ring(ring: &[[f64; 2]], proj: &LambertConformal, viewport: &Viewport) -> Vec<(f64, f64)> {
    ring.iter()
        .map(|&[lon, lat]| {
            let (x, y) = proj.project(lat, lon);
            viewport.to_pixel(x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use projection::viewport::Bounds;

    #[test]
    fn test_embedded_asset_loads() {
        let map = Basemap::embedded().unwrap();
        assert_eq!(map.version, "1");
        assert!(!map.land.is_empty());
        assert!(!map.lakes.is_empty());
        assert!(!map.borders.is_empty());
        assert!(!map.states.is_empty());
        assert!(!map.rivers.is_empty());
    }

    #[test]
    fn test_rings_are_plausible_coordinates() {
        let map = Basemap::embedded().unwrap();
        for ring in map
            .land
            .iter()
            .chain(&map.lakes)
            .chain(&map.borders)
            .chain(&map.states)
            .chain(&map.rivers)
        {
            assert!(ring.len() >= 2);
            for &[lon, lat] in ring {
                assert!((-180.0..=180.0).contains(&lon), "bad lon {}", lon);
                assert!((-90.0..=90.0).contains(&lat), "bad lat {}", lat);
            }
        }
    }

    #[test]
    fn test_draw_fills_background() {
        let map = Basemap::embedded().unwrap();
        let proj = LambertConformal::north_american();

        let bounds = Bounds {
            min_x: -2_500_000.0,
            min_y: -2_000_000.0,
            max_x: 2_500_000.0,
            max_y: 2_000_000.0,
        };
        let viewport = Viewport::fit(bounds, 200, 160);
        let mut canvas = Canvas::filled(200, 160, Color::transparent());

        map.draw(&mut canvas, &proj, &viewport);

        // Every pixel is painted (ocean background at minimum)
        for y in 0..160 {
            for x in 0..200 {
                assert_eq!(canvas.get(x, y).unwrap().a, 255);
            }
        }
    }

    #[test]
    fn test_draw_paints_land_mid_continent() {
        let map = Basemap::embedded().unwrap();
        let proj = LambertConformal::north_american();

        // Frame Kansas: solid interior land, no coast
        let (cx, cy) = proj.project(38.5, -98.0);
        let bounds = Bounds {
            min_x: cx - 200_000.0,
            min_y: cy - 200_000.0,
            max_x: cx + 200_000.0,
            max_y: cy + 200_000.0,
        };
        let viewport = Viewport::fit(bounds, 50, 50);
        let mut canvas = Canvas::filled(50, 50, Color::transparent());

        map.draw(&mut canvas, &proj, &viewport);

        let center = canvas.get(25, 25).unwrap();
        assert_eq!(
            (center.r, center.g, center.b),
            (style::LAND.r, style::LAND.g, style::LAND.b)
        );
    }
}
