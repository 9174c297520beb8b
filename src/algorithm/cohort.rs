//! Cohort statistics over survey microdata
//!
//! Both statistics the report needs are weighted means over householder
//! records grouped by (survey year, cohort): the homeownership rate (a
//! weighted boolean indicator) and the mean household income. Records
//! outside the three tracked cohorts, and non-householder records, never
//! participate.

use std::collections::BTreeMap;

use crate::models::generation::Generation;
use crate::models::micro::MicroRecord;

use super::aggregate::weighted_mean_by;

/// A per-(survey year, cohort) aggregated statistic
pub type CohortYearStats = BTreeMap<(i32, Generation), f64>;

fn cohort_householders(records: &[MicroRecord]) -> impl Iterator<Item = &MicroRecord> {
    records
        .iter()
        .filter(|record| record.is_householder() && record.generation().is_target())
}

/// Weighted homeownership rate per (survey year, cohort)
///
/// Each householder contributes its household weight toward the share of
/// owner-occupied dwellings; the rate is in [0, 1].
#[must_use]
pub fn homeownership_rate_by_cohort(records: &[MicroRecord]) -> CohortYearStats {
    weighted_mean_by(
        cohort_householders(records),
        |record| (record.year, record.generation()),
        |record| Some(if record.owns_home() { 1.0 } else { 0.0 }),
        |record| record.hh_weight,
    )
}

/// Weighted mean household income per (survey year, cohort)
///
/// Records with missing income were mapped to `None` at ingestion and are
/// excluded here rather than treated as zero.
#[must_use]
pub fn mean_income_by_cohort(records: &[MicroRecord]) -> CohortYearStats {
    weighted_mean_by(
        cohort_householders(records),
        |record| (record.year, record.generation()),
        |record| record.hh_income.map(|income| income as f64),
        |record| record.hh_weight,
    )
}
