//! Registry definitions and loaders for the external data sources
//!
//! This module contains the loaders for the collaborator data the report
//! consumes. Each source gets its own register with a `load` (or `fetch`)
//! entry point returning domain models, keeping source formats and codes
//! out of the computation stages.
//!
//! Available sources:
//! - ASEC: household survey microdata extract (parquet directory)
//! - Home price: annual median home price (spreadsheet CSV export)
//! - Mortgage rate: periodic 30-year fixed rate observations (CSV)
//! - CPI: consumer price index (remote flat file)
//! - Household income: annual median household income (CSV)

pub mod asec;
pub mod cpi;
pub mod home_price;
pub mod income;
pub mod mortgage_rate;
pub mod schemas;

pub use asec::AsecRegister;
pub use cpi::CpiRegister;
pub use home_price::HomePriceRegister;
pub use income::HouseholdIncomeRegister;
pub use mortgage_rate::MortgageRateRegister;

use crate::error::{PipelineError, Result};

/// Parse a year field from a delimited source
pub(crate) fn parse_year(raw: &str) -> Result<i32> {
    raw.trim()
        .parse()
        .map_err(|e| PipelineError::Parse(format!("bad year field {raw:?}: {e}")))
}

/// Parse a numeric field from a delimited source
///
/// Spreadsheet exports carry currency formatting; dollar signs and
/// thousands separators are stripped before parsing.
pub(crate) fn parse_amount(raw: &str) -> Result<f64> {
    let cleaned = raw.trim().trim_start_matches('$').replace(',', "");
    cleaned
        .parse()
        .map_err(|e| PipelineError::Parse(format!("bad numeric field {raw:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year(" 1994 ").unwrap(), 1994);
        assert!(parse_year("n/a").is_err());
    }

    #[test]
    fn test_parse_amount_strips_currency_formatting() {
        assert_eq!(parse_amount("$142,300").unwrap(), 142_300.0);
        assert_eq!(parse_amount("6.81").unwrap(), 6.81);
        assert!(parse_amount("-").is_err());
    }
}
