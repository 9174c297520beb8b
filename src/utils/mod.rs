//! Utility functions for writing output tables

pub mod logging;

use std::path::Path;

use crate::algorithm::affordability::DownpaymentBurden;
use crate::algorithm::combine::CombinedSeries;
use crate::error::Result;
use crate::models::table::WideTable;

/// Write a wide table as CSV: the dense index column, then one column
/// per category. Empty cells stay empty.
pub fn write_wide_table(table: &WideTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec![table.index_name.clone()];
    header.extend(table.categories.iter().cloned());
    writer.write_record(&header)?;

    for row in &table.rows {
        let mut record = vec![row.index.to_string()];
        record.extend(row.cells.iter().map(format_cell));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write downpayment-burden rows as CSV
pub fn write_downpayment_table(burdens: &[DownpaymentBurden], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["snapshot_year", "generation", "downpayment_proportion"])?;

    for burden in burdens {
        writer.write_record([
            burden.snapshot_year.to_string(),
            burden.generation.label().to_string(),
            burden.proportion.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a combined year-keyed series table as CSV
pub fn write_combined_series(combined: &CombinedSeries, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["year".to_string()];
    header.extend(combined.columns.iter().cloned());
    writer.write_record(&header)?;

    for (year, cells) in &combined.rows {
        let mut record = vec![year.to_string()];
        record.extend(cells.iter().map(std::string::ToString::to_string));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

fn format_cell(cell: &Option<f64>) -> String {
    cell.map(|value| value.to_string()).unwrap_or_default()
}
