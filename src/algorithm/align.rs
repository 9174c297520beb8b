//! Adult-year alignment
//!
//! Different cohorts reach the same life stage in different calendar
//! years. Reindexing each cohort's statistics by years since its age-0
//! baseline puts all cohorts on one comparable axis; observations before
//! adulthood are dropped.

use std::collections::BTreeMap;

use crate::models::generation::Generation;

use super::cohort::CohortYearStats;

/// Minimum adult-year retained on the aligned axis
pub const ADULT_START: i32 = 18;

/// Aligned per-(adult-year, cohort) statistics
pub type AlignedStats = BTreeMap<(i32, Generation), f64>;

/// Reindex per-(year, cohort) statistics by the cohort's adult-year
///
/// `adult_yr = year - reference_year(cohort)`; only entries with
/// `adult_yr >= 18` survive. Cohorts without a baseline never reach this
/// stage, but entries for them would be dropped here as well.
#[must_use]
pub fn align_to_adult_years(stats: &CohortYearStats) -> AlignedStats {
    stats
        .iter()
        .filter_map(|(&(year, generation), &value)| {
            let reference = generation.reference_year()?;
            let adult_yr = year - reference;
            (adult_yr >= ADULT_START).then_some(((adult_yr, generation), value))
        })
        .collect()
}
