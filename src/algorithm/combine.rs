//! Multi-series combination and normalization
//!
//! Joins independently-sourced annual series by year with strict
//! inner-join semantics, expresses nominal values in most-recent-year
//! dollars via CPI factors, and rebases each series to percent change
//! from its own first observation.

use itertools::Itertools;

use crate::models::series::AnnualSeries;

/// A combined year-keyed table of several joined series
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedSeries {
    /// Column names, one per joined series, in join order
    pub columns: Vec<String>,
    /// Rows ascending by year; cells align with `columns`
    pub rows: Vec<(i32, Vec<f64>)>,
}

/// Strict inner join of annual series by year
///
/// A year missing in any series drops that year from all of them.
#[must_use]
pub fn inner_join(series: &[&AnnualSeries]) -> CombinedSeries {
    let columns = series.iter().map(|s| s.name.clone()).collect_vec();

    let Some(first) = series.first() else {
        return CombinedSeries {
            columns,
            rows: Vec::new(),
        };
    };

    let rows = first
        .years()
        .into_iter()
        .filter_map(|year| {
            let cells: Option<Vec<f64>> =
                series.iter().map(|s| s.value_for_year(year)).collect();
            Some((year, cells?))
        })
        .collect();

    CombinedSeries { columns, rows }
}

/// Annual inflation factors expressing each year in latest-year dollars
///
/// `factor(year) = CPI(latest) / CPI(year)`: at least 1 for past years
/// and exactly 1 for the most recent observation.
#[must_use]
pub fn inflation_factors(cpi: &AnnualSeries) -> AnnualSeries {
    let mut factors = AnnualSeries::new("inflation_factor");
    let Some(latest_year) = cpi.latest_year() else {
        return factors;
    };
    let Some(latest_value) = cpi.value_for_year(latest_year) else {
        return factors;
    };

    for (year, value) in cpi.as_pairs() {
        factors.insert(year, latest_value / value);
    }
    factors
}

/// Multiply a nominal series into latest-year dollars
///
/// Years without an inflation factor drop out (inner-join semantics).
#[must_use]
pub fn adjust_for_inflation(series: &AnnualSeries, factors: &AnnualSeries) -> AnnualSeries {
    AnnualSeries::from_pairs(
        series.name.clone(),
        series
            .as_pairs()
            .into_iter()
            .filter_map(|(year, value)| Some((year, value * factors.value_for_year(year)?))),
    )
}

/// Rebase every column to percent change from its first observation
///
/// `((value / first) - 1) * 100`, rounded to 2 decimal places, applied
/// independently per column; the year key is untouched.
#[must_use]
pub fn rebase_to_first(combined: &CombinedSeries) -> CombinedSeries {
    let Some((_, baselines)) = combined.rows.first() else {
        return combined.clone();
    };
    let baselines = baselines.clone();

    let rows = combined
        .rows
        .iter()
        .map(|(year, cells)| {
            let rebased = cells
                .iter()
                .zip(&baselines)
                .map(|(value, baseline)| round2((value / baseline - 1.0) * 100.0))
                .collect();
            (*year, rebased)
        })
        .collect();

    CombinedSeries {
        columns: combined.columns.clone(),
        rows,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_join_drops_incomplete_years() {
        let price = AnnualSeries::from_pairs("price", [(1990, 95.0), (1991, 97.0), (1992, 99.0)]);
        let income = AnnualSeries::from_pairs("income", [(1990, 30.0), (1992, 32.0)]);

        let combined = inner_join(&[&price, &income]);
        assert_eq!(combined.columns, vec!["price", "income"]);
        assert_eq!(
            combined.rows,
            vec![(1990, vec![95.0, 30.0]), (1992, vec![99.0, 32.0])]
        );
    }

    #[test]
    fn test_inflation_factor_is_one_at_latest() {
        let cpi = AnnualSeries::from_pairs("cpi", [(1990, 130.7), (2022, 292.7)]);
        let factors = inflation_factors(&cpi);

        assert_eq!(factors.value_for_year(2022), Some(1.0));
        let past = factors.value_for_year(1990).unwrap();
        assert!((past - 292.7 / 130.7).abs() < 1e-12);
        assert!(past >= 1.0);
    }

    #[test]
    fn test_inflation_adjustment() {
        let nominal = AnnualSeries::from_pairs("income", [(1990, 30_000.0), (2022, 74_000.0)]);
        let cpi = AnnualSeries::from_pairs("cpi", [(1990, 150.0), (2022, 300.0)]);

        let real = adjust_for_inflation(&nominal, &inflation_factors(&cpi));
        assert_eq!(real.value_for_year(1990), Some(60_000.0));
        assert_eq!(real.value_for_year(2022), Some(74_000.0));
    }

    #[test]
    fn test_rebase_to_first_observation() {
        let combined = CombinedSeries {
            columns: vec!["price".to_string()],
            rows: vec![(1990, vec![100.0]), (1991, vec![110.0]), (1992, vec![121.0])],
        };

        let rebased = rebase_to_first(&combined);
        assert_eq!(
            rebased.rows,
            vec![(1990, vec![0.0]), (1991, vec![10.0]), (1992, vec![21.0])]
        );
    }

    #[test]
    fn test_rebase_rounds_to_two_decimals() {
        let combined = CombinedSeries {
            columns: vec!["price".to_string()],
            rows: vec![(1990, vec![3.0]), (1991, vec![4.0])],
        };

        let rebased = rebase_to_first(&combined);
        // 4/3 - 1 = 33.333...% -> 33.33
        assert_eq!(rebased.rows[1].1[0], 33.33);
    }

    #[test]
    fn test_rebase_empty_table() {
        let combined = CombinedSeries {
            columns: vec!["price".to_string()],
            rows: Vec::new(),
        };
        assert_eq!(rebase_to_first(&combined), combined);
    }
}
