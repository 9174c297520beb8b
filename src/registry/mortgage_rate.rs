//! 30-year mortgage rate series loader
//!
//! The source publishes periodic (weekly) percentage observations. The
//! loader annualizes by mean over each calendar year and stores the rate
//! as a fraction so the amortization formula can use it directly.

use std::path::Path;

use itertools::Itertools;

use crate::error::Result;
use crate::error::util::safe_open_file;
use crate::models::series::AnnualSeries;
use crate::registry::{parse_amount, parse_year};

/// Periodic mortgage rate register loader
#[derive(Debug, Clone, Default)]
pub struct MortgageRateRegister;

impl MortgageRateRegister {
    /// Create a new mortgage rate loader
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Load the annual mean 30-year rate series, as fractions
    pub fn load(&self, path: &Path) -> Result<AnnualSeries> {
        let file = safe_open_file(path, "reading the mortgage rate series")?;
        let mut reader = csv::Reader::from_reader(file);

        let mut observations: Vec<(i32, f64)> = Vec::new();
        for record in reader.records() {
            let record = record?;
            let date = record.get(0).unwrap_or_default();
            let rate = record.get(1).unwrap_or_default();
            // Weeks without a published rate appear as empty cells.
            if rate.trim().is_empty() {
                continue;
            }

            let year = parse_year(date.get(..4).unwrap_or(date))?;
            observations.push((year, parse_amount(rate)?));
        }

        let mut series = AnnualSeries::new("mortgage_rate_30yr");
        for (year, rates) in observations.into_iter().into_group_map() {
            let mean_pct = rates.iter().sum::<f64>() / rates.len() as f64;
            series.insert(year, mean_pct / 100.0);
        }
        Ok(series)
    }
}
