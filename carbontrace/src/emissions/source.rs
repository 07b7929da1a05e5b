//! Remote coefficient source.
//!
//! One blocking GET per run. There is no retry, timeout tuning, or caching;
//! a transport failure or non-success status aborts the assessment.

use thiserror::Error;

/// AllSpice demo carbon-emissions figures for the Archimajor board.
pub const DEFAULT_SOURCE_URL: &str = "https://hub.allspice.io/AllSpice-Demos/Demo-Data-Source/raw/branch/main/Carbon-Emissions-Figures-Archimajor/archimajor-carbon-emissions-figures.csv";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to fetch emissions source: {0}")]
    Http(#[from] reqwest::Error),
    #[error("emissions source returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// Client for a published coefficient-table URL.
pub struct EmissionsSource {
    url: String,
}

impl EmissionsSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the coefficient CSV text.
    pub fn fetch(&self) -> Result<String, SourceError> {
        tracing::info!(url = %self.url, "fetching coefficient table");
        let response = reqwest::blocking::get(&self.url)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }
        Ok(response.text()?)
    }
}

impl Default for EmissionsSource {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_URL)
    }
}
