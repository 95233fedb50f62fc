//! Time formatting for plot output files.

use chrono::{DateTime, Utc};

/// Format the output filename for a saved figure.
///
/// The timestamp is UTC, down to the minute: `buoys_YYYYMMDD_HHMMZ.<ext>`.
/// Collisions within the same minute silently overwrite, which is the
/// intended behavior for a run-again-and-replace reporting tool.
pub fn plot_filename(now: DateTime<Utc>, format: &str) -> String {
    format!("buoys_{}.{}", now.format("%Y%m%d_%H%MZ"), format)
}
