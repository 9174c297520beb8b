//! Generational homeownership and housing-affordability statistics from
//! household survey microdata and external annual economic series.
//!
//! The pipeline classifies survey respondents into generational cohorts,
//! computes weighted per-(year, cohort) statistics over householder
//! records, aligns cohorts on a common adult-year axis, combines them
//! with external price/rate/CPI/income series, and reshapes the results
//! into wide per-cohort output tables.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{DownpaymentScenario, PipelineConfig};
pub use error::{PipelineError, Result};
pub use models::generation::Generation;
pub use models::micro::MicroRecord;
pub use models::series::AnnualSeries;
pub use models::table::{LongRow, WideRow, WideTable};

// Computation stages
pub use algorithm::affordability::{DownpaymentBurden, downpayment_burdens, home_cost_index_by_cohort};
pub use algorithm::align::align_to_adult_years;
pub use algorithm::cohort::{homeownership_rate_by_cohort, mean_income_by_cohort};
pub use algorithm::combine::{adjust_for_inflation, inflation_factors, inner_join, rebase_to_first};
pub use algorithm::reshape::{long_rows_from_aligned, pivot};

// Registers
pub use registry::{
    AsecRegister, CpiRegister, HomePriceRegister, HouseholdIncomeRegister, MortgageRateRegister,
};
