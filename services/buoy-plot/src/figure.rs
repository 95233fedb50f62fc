//! Figure composition: map area on top, color bar band below.

use buoy_common::{BuoyResult, Variable};
use ndbc::ObservationTable;
use projection::viewport::Bounds;
use projection::{LambertConformal, Viewport};
use renderer::colorbar::{draw_colorbar, ColorbarLayout};
use renderer::scatter::{draw_markers, StationPoint};
use renderer::text::TextRenderer;
use renderer::{Basemap, Canvas, Color, ColorScale, Colormap};
use tracing::info;

pub const FIGURE_WIDTH: u32 = 1000;
pub const FIGURE_HEIGHT: u32 = 800;

/// Height of the strip below the map holding the color bar and its labels.
const COLORBAR_BAND: u32 = 110;

/// Fraction of the station extent added on every side of the map.
const VIEWPORT_PAD: f64 = 0.05;

const BACKGROUND: Color = Color::rgb(255, 255, 255);

/// Render the complete figure for an already-filtered observation table.
///
/// Every row is expected to carry a value for `var`; rows that do not are
/// ignored rather than plotted.
pub fn render(
    table: &ObservationTable,
    var: Variable,
    cmap_name: &str,
    vmin: Option<f64>,
    vmax: Option<f64>,
    marker_size: u32,
) -> BuoyResult<Canvas> {
    let colormap = Colormap::by_name(cmap_name)?;
    let basemap = Basemap::embedded()?;
    let proj = LambertConformal::north_american();

    let points: Vec<StationPoint> = table
        .rows()
        .iter()
        .filter_map(|obs| {
            obs.value(var).map(|value| StationPoint {
                latitude: obs.latitude,
                longitude: obs.longitude,
                value,
            })
        })
        .collect();

    let map_height = FIGURE_HEIGHT - COLORBAR_BAND;
    let bounds = station_bounds(&proj, &points).padded(VIEWPORT_PAD);
    let viewport = Viewport::fit(bounds, FIGURE_WIDTH, map_height);

    let mut canvas = Canvas::filled(FIGURE_WIDTH, FIGURE_HEIGHT, BACKGROUND);
    basemap.draw(&mut canvas, &proj, &viewport);

    let scale = ColorScale::from_bounds(vmin, vmax, &table.values(var));
    let drawn = draw_markers(
        &mut canvas,
        &proj,
        &viewport,
        &points,
        &colormap,
        &scale,
        marker_size,
    );
    info!(markers = drawn, cmap = cmap_name, "Rendered station markers");

    let text = TextRenderer::load();
    let layout = ColorbarLayout {
        x: (FIGURE_WIDTH / 5) as i64,
        y: (map_height + 30) as i64,
        width: FIGURE_WIDTH - 2 * (FIGURE_WIDTH / 5),
        height: 16,
    };
    draw_colorbar(&mut canvas, &colormap, &scale, &var.label(), &text, layout);

    Ok(canvas)
}

/// Bounding box of the projected stations; a fixed continental frame when
/// there are none, so an empty filter result still produces a map.
fn station_bounds(proj: &LambertConformal, points: &[StationPoint]) -> Bounds {
    Bounds::enclosing(
        points
            .iter()
            .map(|p| proj.project(p.latitude, p.longitude)),
    )
    .unwrap_or_else(|| continental_frame(proj))
}

fn continental_frame(proj: &LambertConformal) -> Bounds {
    let corners = [
        proj.project(22.0, -125.0),
        proj.project(22.0, -65.0),
        proj.project(52.0, -125.0),
        proj.project(52.0, -65.0),
    ];
    // Non-empty input, so enclosing cannot return None
    Bounds::enclosing(corners).unwrap_or(Bounds {
        min_x: -3_000_000.0,
        min_y: -2_200_000.0,
        max_x: 3_000_000.0,
        max_y: 2_200_000.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use ndbc::table::{Observation, NUM_VARIABLES};

    fn table_with_values(values: &[(f64, f64, f64)]) -> ObservationTable {
        let rows = values
            .iter()
            .enumerate()
            .map(|(i, &(lat, lon, wtmp))| {
                let mut vals = [None; NUM_VARIABLES];
                vals[Variable::WaterTemperature.index()] = Some(wtmp);
                Observation {
                    station: format!("4100{}", i),
                    latitude: lat,
                    longitude: lon,
                    time: Utc.with_ymd_and_hms(2024, 3, 5, 14, 0, 0).unwrap(),
                    values: vals,
                }
            })
            .collect();
        ObservationTable::new(rows)
    }

    #[test]
    fn test_render_produces_full_size_canvas() {
        let table = table_with_values(&[
            (34.7, -72.7, 23.2),
            (26.0, -93.6, 24.3),
            (36.8, -122.4, 12.8),
        ]);
        let canvas =
            render(&table, Variable::WaterTemperature, "Oranges", None, None, 5).unwrap();
        assert_eq!(canvas.width(), FIGURE_WIDTH);
        assert_eq!(canvas.height(), FIGURE_HEIGHT);
    }

    #[test]
    fn test_unknown_colormap_fails_before_drawing() {
        let table = table_with_values(&[(34.7, -72.7, 23.2)]);
        let err = render(&table, Variable::WaterTemperature, "NotAMap", None, None, 5)
            .unwrap_err();
        assert!(matches!(err, buoy_common::BuoyError::UnknownColormap(_)));
    }

    #[test]
    fn test_empty_table_still_renders_map() {
        let table = ObservationTable::default();
        let canvas =
            render(&table, Variable::WaterTemperature, "Oranges", None, None, 5).unwrap();

        // Map area is ocean/land, not the white figure background
        let probe = canvas.get(500, 300).unwrap();
        assert_ne!(probe, BACKGROUND);
    }

    #[test]
    fn test_min_greater_than_max_is_accepted() {
        let table = table_with_values(&[(34.7, -72.7, 23.2), (26.0, -93.6, 24.3)]);
        // Inverted bounds pass straight through to the color scale
        let result = render(
            &table,
            Variable::WaterTemperature,
            "Oranges",
            Some(30.0),
            Some(10.0),
            5,
        );
        assert!(result.is_ok());
    }
}
