//! Configuration for the report pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::generation::Generation;

/// A downpayment snapshot scenario: one cohort observed against one
/// calendar year's median home price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownpaymentScenario {
    /// Calendar year whose median home price anchors the scenario
    pub snapshot_year: i32,
    /// Cohort whose household income is probed
    pub generation: Generation,
}

/// Configuration for the report pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Directory containing the survey extract parquet files
    pub survey_dir: PathBuf,
    /// Path to the median home price CSV export
    pub home_price_path: PathBuf,
    /// Leading non-data rows to skip in the home price export
    pub home_price_skip_rows: usize,
    /// Path to the periodic 30-year mortgage rate CSV
    pub mortgage_rate_path: PathBuf,
    /// Path to the median household income CSV
    pub household_income_path: PathBuf,
    /// URL of the remote CPI flat file
    pub cpi_url: String,
    /// CPI series identifier whose annual averages are consumed
    pub cpi_series_id: String,
    /// Request timeout for the CPI fetch, in seconds
    pub fetch_timeout_secs: u64,
    /// Directory where output tables are written
    pub output_dir: PathBuf,
    /// Adult-year at which downpayment scenarios probe household income
    pub probe_adult_yr: i32,
    /// Share of the home price required as a downpayment
    pub downpayment_share: f64,
    /// Downpayment snapshot scenarios
    pub downpayment_scenarios: Vec<DownpaymentScenario>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            survey_dir: PathBuf::from("data/asec"),
            home_price_path: PathBuf::from("data/median_home_price.csv"),
            home_price_skip_rows: 4,
            mortgage_rate_path: PathBuf::from("data/mortgage_rate_30yr.csv"),
            household_income_path: PathBuf::from("data/median_household_income.csv"),
            cpi_url: "https://download.bls.gov/pub/time.series/cu/cu.data.1.AllItems".to_string(),
            cpi_series_id: "CUUR0000SA0".to_string(),
            fetch_timeout_secs: 30,
            output_dir: PathBuf::from("output"),
            probe_adult_yr: 26,
            downpayment_share: 0.20,
            downpayment_scenarios: vec![
                DownpaymentScenario {
                    snapshot_year: 1990,
                    generation: Generation::BabyBoomer,
                },
                DownpaymentScenario {
                    snapshot_year: 2006,
                    generation: Generation::GenX,
                },
                DownpaymentScenario {
                    snapshot_year: 2022,
                    generation: Generation::Millennial,
                },
            ],
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a JSON file; absent fields take defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
