//! Median home price series loader
//!
//! The source is a spreadsheet export with a fixed number of leading
//! non-data rows before the (year, median price) observations begin;
//! the offset is configuration, not a property of the series.

use std::path::Path;

use crate::error::Result;
use crate::error::util::safe_open_file;
use crate::models::series::AnnualSeries;
use crate::registry::{parse_amount, parse_year};
use crate::utils::logging::log::log_operation_complete;

/// Median home price register loader
#[derive(Debug, Clone)]
pub struct HomePriceRegister {
    skip_rows: usize,
}

impl HomePriceRegister {
    /// Create a loader that skips `skip_rows` leading non-data rows
    #[must_use]
    pub fn new(skip_rows: usize) -> Self {
        Self { skip_rows }
    }

    /// Load the annual median home price series
    pub fn load(&self, path: &Path) -> Result<AnnualSeries> {
        let file = safe_open_file(path, "reading the median home price export")?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut series = AnnualSeries::new("median_home_price");
        for (position, record) in reader.records().enumerate() {
            let record = record?;
            if position < self.skip_rows {
                continue;
            }
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }

            let year = parse_year(record.get(0).unwrap_or_default())?;
            let price = parse_amount(record.get(1).unwrap_or_default())?;
            series.insert(year, price);
        }

        log_operation_complete("loaded median home price observations", path, series.len(), None);
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_csv(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("cohort_housing_{}_{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_skips_header_offset() {
        let path = temp_csv(
            "home_price.csv",
            "Source workbook,\nAnnual data,\n,\nYear,Median price\n1990,\"$95,500\"\n2006,\"$247,700\"\n",
        );

        let series = HomePriceRegister::new(4).load(&path).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.value_for_year(1990), Some(95_500.0));
        assert_eq!(series.value_for_year(2006), Some(247_700.0));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_malformed_row_after_offset_is_error() {
        let path = temp_csv("home_price_bad.csv", "Year,Median price\nnot-a-year,100\n");
        assert!(HomePriceRegister::new(1).load(&path).is_err());
        fs::remove_file(path).unwrap();
    }
}
