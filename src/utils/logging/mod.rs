//! Logging utilities
//!
//! Standardized operation logging and progress reporting for the
//! pipeline's loading and writing stages.

pub mod log;
pub mod progress;
