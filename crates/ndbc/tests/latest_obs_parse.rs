//! Parser tests against a captured latest-observations sample.

use buoy_common::Variable;
use ndbc::parser::parse_latest_observations;

const FIXTURE: &str = include_str!("fixtures/latest_obs.txt");

#[test]
fn test_fixture_row_count() {
    let table = parse_latest_observations(FIXTURE).unwrap();
    assert_eq!(table.len(), 20);
}

#[test]
fn test_filter_by_water_temperature() {
    let mut table = parse_latest_observations(FIXTURE).unwrap();
    let total = table.len();

    // One station (45001) reports no water temperature
    let kept = table.retain_present(Variable::WaterTemperature);
    assert_eq!(kept, total - 1);
    assert!(table.rows().iter().all(|o| o.station != "45001"));
}

#[test]
fn test_filter_by_wave_height() {
    let mut table = parse_latest_obs();
    // Coastal C-MAN stations (LONF1, SPGF1), 41013 and 45001 report no waves
    let kept = table.retain_present(Variable::WaveHeight);
    assert_eq!(kept, 16);
    for obs in table.rows() {
        assert!(obs.value(Variable::WaveHeight).is_some());
    }
}

#[test]
fn test_values_match_surviving_rows() {
    let mut table = parse_latest_obs();
    let kept = table.retain_present(Variable::Pressure);
    let values = table.values(Variable::Pressure);
    assert_eq!(values.len(), kept);
    assert!(values.iter().all(|v| (900.0..1100.0).contains(v)));
}

#[test]
fn test_station_positions_span_basins() {
    let table = parse_latest_obs();

    let has_pacific = table.rows().iter().any(|o| o.longitude < -115.0);
    let has_atlantic = table
        .rows()
        .iter()
        .any(|o| o.longitude > -81.0 && o.latitude > 30.0);
    let has_gulf = table
        .rows()
        .iter()
        .any(|o| o.latitude < 30.0 && (-98.0..=-85.0).contains(&o.longitude));

    assert!(has_pacific && has_atlantic && has_gulf);
}

#[test]
fn test_negative_air_values_parse() {
    let table = parse_latest_obs();
    let maine = table
        .rows()
        .iter()
        .find(|o| o.station == "44007")
        .unwrap();
    assert_eq!(maine.value(Variable::Dewpoint), Some(-3.0));
    assert_eq!(maine.value(Variable::PressureTendency), Some(-2.1));
}

fn parse_latest_obs() -> ndbc::table::ObservationTable {
    parse_latest_observations(FIXTURE).unwrap()
}
