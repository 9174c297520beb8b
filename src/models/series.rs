//! Annual time series model
//!
//! External economic inputs (median home price, mortgage rate, CPI,
//! median household income) are all annual series: a named mapping from
//! calendar year to a numeric value. Backing the series with a `BTreeMap`
//! gives deterministic ascending-year iteration everywhere it is read.

use std::collections::BTreeMap;

/// A named annual series of numeric observations keyed by calendar year
#[derive(Debug, Clone, PartialEq)]
pub struct AnnualSeries {
    /// Series name, used as a column header in combined tables
    pub name: String,
    values: BTreeMap<i32, f64>,
}

impl AnnualSeries {
    /// Create a new empty series
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: BTreeMap::new(),
        }
    }

    /// Create a series from (year, value) pairs
    #[must_use]
    pub fn from_pairs(name: impl Into<String>, pairs: impl IntoIterator<Item = (i32, f64)>) -> Self {
        Self {
            name: name.into(),
            values: pairs.into_iter().collect(),
        }
    }

    /// Add or replace the observation for a year
    pub fn insert(&mut self, year: i32, value: f64) {
        self.values.insert(year, value);
    }

    /// Get the observation for a specific year
    #[must_use]
    pub fn value_for_year(&self, year: i32) -> Option<f64> {
        self.values.get(&year).copied()
    }

    /// All years with observations, ascending
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        self.values.keys().copied().collect()
    }

    /// All observations as (year, value) pairs, ascending by year
    #[must_use]
    pub fn as_pairs(&self) -> Vec<(i32, f64)> {
        self.values.iter().map(|(&year, &value)| (year, value)).collect()
    }

    /// Earliest year with an observation
    #[must_use]
    pub fn first_year(&self) -> Option<i32> {
        self.values.keys().next().copied()
    }

    /// Most recent year with an observation
    #[must_use]
    pub fn latest_year(&self) -> Option<i32> {
        self.values.keys().next_back().copied()
    }

    /// Number of observations
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no observations
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_insert_and_lookup() {
        let mut series = AnnualSeries::new("median_home_price");
        series.insert(1990, 95_500.0);
        series.insert(2006, 247_700.0);
        series.insert(2022, 457_475.0);

        assert_eq!(series.name, "median_home_price");
        assert_eq!(series.len(), 3);
        assert_eq!(series.value_for_year(2006), Some(247_700.0));
        assert_eq!(series.value_for_year(2000), None);
        assert_eq!(series.first_year(), Some(1990));
        assert_eq!(series.latest_year(), Some(2022));
    }

    #[test]
    fn test_pairs_are_ascending_by_year() {
        let series = AnnualSeries::from_pairs("cpi", [(2022, 292.7), (1990, 130.7), (2006, 201.6)]);
        assert_eq!(series.years(), vec![1990, 2006, 2022]);
        assert_eq!(
            series.as_pairs(),
            vec![(1990, 130.7), (2006, 201.6), (2022, 292.7)]
        );
    }

    #[test]
    fn test_empty_series() {
        let series = AnnualSeries::new("mortgage_rate_30yr");
        assert!(series.is_empty());
        assert_eq!(series.first_year(), None);
        assert_eq!(series.latest_year(), None);
    }
}
