//! Long- and wide-format output table models
//!
//! The pipeline's aligned statistics travel in long format (alignment
//! key, category, value) until the final reshaping step pivots them into
//! one wide table per output, with a dense sequential row index replacing
//! the original alignment key.

/// One long-format observation
#[derive(Debug, Clone, PartialEq)]
pub struct LongRow {
    /// Alignment key the pivot orders rows by (e.g. adult-year)
    pub key: i32,
    /// Category the pivot turns into a column (e.g. cohort label)
    pub category: String,
    /// Statistic value
    pub value: f64,
}

impl LongRow {
    /// Create a new long-format row
    #[must_use]
    pub fn new(key: i32, category: impl Into<String>, value: f64) -> Self {
        Self {
            key,
            category: category.into(),
            value,
        }
    }
}

/// One row of a wide table
#[derive(Debug, Clone, PartialEq)]
pub struct WideRow {
    /// Dense 1-based sequential index assigned after ordering
    pub index: usize,
    /// Original alignment key; retained for unpivoting, not written out
    pub key: i32,
    /// Cells aligned with the table's category columns
    pub cells: Vec<Option<f64>>,
}

/// Wide pivoted table: one row per alignment key, one column per category
#[derive(Debug, Clone, PartialEq)]
pub struct WideTable {
    /// Name of the synthetic dense row-index column
    pub index_name: String,
    /// Column headers in output order
    pub categories: Vec<String>,
    /// Rows ordered by ascending alignment key
    pub rows: Vec<WideRow>,
}

impl WideTable {
    /// Recover the long-format observation set, ignoring the dense index
    ///
    /// Null cells introduced by non-rectangular input produce no row.
    #[must_use]
    pub fn unpivot(&self) -> Vec<LongRow> {
        let mut rows = Vec::new();
        for row in &self.rows {
            for (category, cell) in self.categories.iter().zip(&row.cells) {
                if let Some(value) = cell {
                    rows.push(LongRow::new(row.key, category.clone(), *value));
                }
            }
        }
        rows
    }
}
