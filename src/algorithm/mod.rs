//! Core computation stages of the report pipeline
//!
//! Each stage is a pure function taking explicit inputs and returning
//! explicit outputs; the driver composes them by data-passing. Stages,
//! leaf-first: grouped weighted aggregation, cohort statistics over the
//! survey extract, adult-year alignment, affordability index computation,
//! multi-series combination, and long-to-wide reshaping.

pub mod affordability;
pub mod aggregate;
pub mod align;
pub mod cohort;
pub mod combine;
pub mod reshape;

pub use affordability::{DownpaymentBurden, downpayment_burdens, home_cost_index_by_cohort};
pub use aggregate::weighted_mean_by;
pub use align::{ADULT_START, AlignedStats, align_to_adult_years};
pub use cohort::{CohortYearStats, homeownership_rate_by_cohort, mean_income_by_cohort};
pub use combine::{CombinedSeries, adjust_for_inflation, inflation_factors, inner_join, rebase_to_first};
pub use reshape::{long_rows_from_aligned, pivot};
