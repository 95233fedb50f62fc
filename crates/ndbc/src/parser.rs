//! Parser for the NDBC latest-observations text product.
//!
//! The product is whitespace-separated with two `#` header lines:
//!
//! ```text
//! #STN     LAT      LON  YYYY MM DD hh mm WDIR WSPD   GST  WVHT  DPD  APD MWD   PRES  PTDY  ATMP  WTMP  DEWP  VIS   TIDE
//! #text    deg      deg   yr  mo dy hr mn degT  m/s   m/s     m  sec  sec degT   hPa   hPa  degC  degC  degC  nmi     ft
//! 41001   34.700  -72.700 2024 03 05 13 50 200  9.0  11.0   2.1  7.0  4.9 190 1018.1  -1.2  18.9  23.2  15.1   MM     MM
//! ```
//!
//! The literal `MM` marks a missing value. Rows whose station/position/time
//! fields are malformed are skipped with a warning rather than failing the
//! whole fetch; a station whose variables are all missing is kept.

use chrono::{TimeZone, Utc};
use tracing::{debug, warn};

use buoy_common::{BuoyError, BuoyResult};

use crate::table::{Observation, ObservationTable, NUM_VARIABLES};

/// Fixed leading columns before the variable columns begin.
const HEADER_FIELDS: usize = 8; // STN LAT LON YYYY MM DD hh mm

/// Sentinel NDBC uses for a missing value.
const MISSING: &str = "MM";

/// Parse the full latest-observations body into a table.
pub fn parse_latest_observations(body: &str) -> BuoyResult<ObservationTable> {
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_row(line) {
            Some(obs) => rows.push(obs),
            None => {
                skipped += 1;
                warn!(line = %line, "Skipping malformed observation row");
            }
        }
    }

    if rows.is_empty() {
        return Err(BuoyError::Parse(format!(
            "no observation rows parsed ({} malformed)",
            skipped
        )));
    }

    debug!(rows = rows.len(), skipped = skipped, "Parsed observation table");
    Ok(ObservationTable::new(rows))
}

/// Parse one data row; None when the fixed fields are malformed.
fn parse_row(line: &str) -> Option<Observation> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < HEADER_FIELDS + NUM_VARIABLES {
        return None;
    }

    let station = fields[0].to_string();
    let latitude: f64 = fields[1].parse().ok()?;
    let longitude: f64 = fields[2].parse().ok()?;

    let year: i32 = fields[3].parse().ok()?;
    let month: u32 = fields[4].parse().ok()?;
    let day: u32 = fields[5].parse().ok()?;
    let hour: u32 = fields[6].parse().ok()?;
    let minute: u32 = fields[7].parse().ok()?;

    let time = Utc
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()?;

    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return None;
    }

    let mut values = [None; NUM_VARIABLES];
    for (i, slot) in values.iter_mut().enumerate() {
        *slot = parse_value(fields[HEADER_FIELDS + i]);
    }

    Some(Observation {
        station,
        latitude,
        longitude,
        time,
        values,
    })
}

/// A single variable field: `MM` (or unparseable) means missing.
fn parse_value(field: &str) -> Option<f64> {
    if field == MISSING {
        return None;
    }
    field.parse().ok()
}
