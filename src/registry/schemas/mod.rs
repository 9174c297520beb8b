//! Arrow schema definitions for the survey extract

use arrow::datatypes::{DataType, Field, Schema};
use std::sync::Arc;

/// Get the Arrow schema for the survey extract columns the report reads
///
/// The extract carries more columns (household identifiers, supplement
/// flags, deflators); projection keeps only the ones the report consumes.
pub fn asec_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("YEAR", DataType::Int32, false),
        Field::new("AGE", DataType::Int32, false),
        Field::new("RELATE", DataType::Int32, true),
        Field::new("OWNERSHP", DataType::Int32, true),
        Field::new("HHINCOME", DataType::Int64, true),
        Field::new("ASECWTH", DataType::Float64, true),
        Field::new("ASECWT", DataType::Float64, true),
    ]))
}
