//! HTTP client for the NDBC latest-observations product.

use reqwest::Client;
use tracing::{debug, info, instrument};

use buoy_common::{BuoyError, BuoyResult};

use crate::parser::parse_latest_observations;
use crate::table::ObservationTable;

/// Default endpoint for the latest observation of every known station.
pub const DEFAULT_URL: &str = "https://www.ndbc.noaa.gov/data/latest_obs/latest_obs.txt";

/// Client for the NDBC realtime feed.
///
/// One-shot: no retry, no caching. A failure of the single GET is fatal to
/// the run, which is the intended behavior for a reporting script.
pub struct NdbcClient {
    client: Client,
    url: String,
}

impl NdbcClient {
    /// Create a client for the default endpoint.
    pub fn new() -> BuoyResult<Self> {
        Self::with_url(DEFAULT_URL.to_string())
    }

    /// Create a client for an alternate endpoint (mirrors, tests).
    pub fn with_url(url: String) -> BuoyResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("buoy-plot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BuoyError::Fetch(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client, url })
    }

    /// Fetch and parse the latest observation for every known station.
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn latest_observations(&self) -> BuoyResult<ObservationTable> {
        debug!("Requesting latest observations");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| BuoyError::Fetch(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(BuoyError::Fetch(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| BuoyError::Fetch(format!("failed to read response body: {}", e)))?;

        let table = parse_latest_observations(&body)?;
        info!(stations = table.len(), "Fetched latest observations");
        Ok(table)
    }
}
