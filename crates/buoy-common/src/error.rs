//! Error types for the buoy-plot pipeline.

use thiserror::Error;

/// Result type alias using BuoyError.
pub type BuoyResult<T> = Result<T, BuoyError>;

/// Primary error type for the observation pipeline.
///
/// Every variant is fatal: the pipeline is single-shot and surfaces failures
/// by terminating the process with a non-zero status.
#[derive(Debug, Error)]
pub enum BuoyError {
    // === Data Errors ===
    #[error("Failed to fetch observations: {0}")]
    Fetch(String),

    #[error("Failed to parse observation data: {0}")]
    Parse(String),

    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    // === Rendering Errors ===
    #[error("Unknown color map: {0}")]
    UnknownColormap(String),

    #[error("Rendering failed: {0}")]
    Render(String),

    // === Output Errors ===
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
