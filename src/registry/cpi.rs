//! Consumer price index series loader
//!
//! Fetches the publisher's flat file over HTTP and keeps the annual
//! average observations for one series identifier. The fetch is blocking
//! from the pipeline's point of view, with a bounded timeout and no
//! retries; a failure aborts only the branch depending on this series.

use std::time::Duration;

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::models::series::AnnualSeries;

/// Annual-average period sentinel in the source flat file
pub const ANNUAL_AVERAGE_PERIOD: &str = "M13";

/// Remote CPI flat-file register
#[derive(Debug, Clone)]
pub struct CpiRegister {
    url: String,
    series_id: String,
    timeout: Duration,
}

impl CpiRegister {
    /// Create a register from pipeline configuration
    #[must_use]
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            url: config.cpi_url.clone(),
            series_id: config.cpi_series_id.clone(),
            timeout: Duration::from_secs(config.fetch_timeout_secs),
        }
    }

    /// Fetch and parse the CPI series
    ///
    /// Bridges into the async fetch whether or not a runtime is already
    /// running, presenting the same synchronous face as the file-based
    /// registers.
    pub fn fetch(&self) -> Result<AnnualSeries> {
        if tokio::runtime::Handle::try_current().is_ok() {
            futures::executor::block_on(self.fetch_async())
        } else {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(self.fetch_async())
        }
    }

    /// Fetch and parse the CPI series asynchronously
    pub async fn fetch_async(&self) -> Result<AnnualSeries> {
        log::info!("Fetching CPI series {} from {}", self.series_id, self.url);

        let client = reqwest::Client::builder().timeout(self.timeout).build()?;
        let response = client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(PipelineError::Fetch(format!(
                "{} returned status {}",
                self.url,
                response.status()
            )));
        }

        let body = response.text().await?;
        parse_flat_file(&body, &self.series_id)
    }
}

/// Parse the flat file, keeping annual averages for one series
///
/// The file is whitespace-delimited with a header line and columns
/// (series id, year, period, value, footnotes). Lines for other series
/// or sub-annual periods are skipped.
pub fn parse_flat_file(contents: &str, series_id: &str) -> Result<AnnualSeries> {
    let mut series = AnnualSeries::new("cpi");
    for line in contents.lines().skip(1) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            continue;
        }
        if fields[0] != series_id || fields[2] != ANNUAL_AVERAGE_PERIOD {
            continue;
        }

        let year: i32 = fields[1]
            .parse()
            .map_err(|e| PipelineError::Parse(format!("bad CPI year {:?}: {e}", fields[1])))?;
        let value: f64 = fields[3]
            .parse()
            .map_err(|e| PipelineError::Parse(format!("bad CPI value {:?}: {e}", fields[3])))?;
        series.insert(year, value);
    }
    Ok(series)
}
