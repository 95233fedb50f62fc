//! NDBC realtime data access.
//!
//! Fetches the latest observation for every known station from the National
//! Data Buoy Center and parses the fixed-column text product into an
//! [`ObservationTable`].

pub mod client;
pub mod parser;
pub mod table;

pub use client::NdbcClient;
pub use table::{Observation, ObservationTable};
