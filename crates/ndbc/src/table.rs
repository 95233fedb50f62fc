//! In-memory observation table.

use chrono::{DateTime, Utc};

use buoy_common::Variable;

/// Number of measured-variable columns per row (WDIR through TIDE).
pub const NUM_VARIABLES: usize = Variable::ALL.len();

/// A single station's latest reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub station: String,
    pub latitude: f64,
    pub longitude: f64,
    pub time: DateTime<Utc>,
    /// One slot per catalog variable, in `Variable::ALL` order.
    pub values: [Option<f64>; NUM_VARIABLES],
}

impl Observation {
    /// Value of one variable, None when the station did not report it.
    pub fn value(&self, var: Variable) -> Option<f64> {
        self.values[var.index()]
    }
}

/// The latest observation for every known station.
///
/// Created fresh per run, filtered once, discarded after plotting.
#[derive(Debug, Clone, Default)]
pub struct ObservationTable {
    rows: Vec<Observation>,
}

impl ObservationTable {
    pub fn new(rows: Vec<Observation>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    /// Drop every row whose value for `var` is missing.
    ///
    /// The result is a pure subset of the input rows; the row count can only
    /// shrink. Returns the number of surviving rows.
    pub fn retain_present(&mut self, var: Variable) -> usize {
        self.rows.retain(|obs| obs.value(var).is_some());
        self.rows.len()
    }

    /// The values of one variable across all rows, skipping missing entries.
    pub fn values(&self, var: Variable) -> Vec<f64> {
        self.rows.iter().filter_map(|obs| obs.value(var)).collect()
    }
}
