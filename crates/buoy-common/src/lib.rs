//! Common types shared across the buoy-plot crates.

pub mod error;
pub mod time;
pub mod variable;

pub use error::{BuoyError, BuoyResult};
pub use time::plot_filename;
pub use variable::Variable;
