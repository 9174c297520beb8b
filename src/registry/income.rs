//! Median household income series loader

use std::path::Path;

use crate::error::Result;
use crate::error::util::safe_open_file;
use crate::models::series::AnnualSeries;
use crate::registry::{parse_amount, parse_year};

/// Annual median household income register loader
#[derive(Debug, Clone, Default)]
pub struct HouseholdIncomeRegister;

impl HouseholdIncomeRegister {
    /// Create a new household income loader
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Load the annual median household income series
    pub fn load(&self, path: &Path) -> Result<AnnualSeries> {
        let file = safe_open_file(path, "reading the median household income series")?;
        let mut reader = csv::Reader::from_reader(file);

        let mut series = AnnualSeries::new("median_hh_income");
        for record in reader.records() {
            let record = record?;
            let year = parse_year(record.get(0).unwrap_or_default())?;
            let value = parse_amount(record.get(1).unwrap_or_default())?;
            series.insert(year, value);
        }
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_income_series() {
        let path = std::env::temp_dir().join(format!(
            "cohort_housing_{}_median_income.csv",
            std::process::id()
        ));
        fs::write(&path, "year,median_income\n1990,\"$29,943\"\n2022,\"$74,580\"\n").unwrap();

        let series = HouseholdIncomeRegister::new().load(&path).unwrap();
        assert_eq!(series.value_for_year(1990), Some(29_943.0));
        assert_eq!(series.value_for_year(2022), Some(74_580.0));

        fs::remove_file(path).unwrap();
    }
}
