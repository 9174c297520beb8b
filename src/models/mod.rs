//! Domain models for the report pipeline
//!
//! This module contains the core entities: the generational cohort
//! classification, the survey person-year observation, annual external
//! series, and the long/wide output table shapes.

pub mod generation;
pub mod micro;
pub mod series;
pub mod table;

pub use generation::Generation;
pub use micro::MicroRecord;
pub use series::AnnualSeries;
pub use table::{LongRow, WideRow, WideTable};
