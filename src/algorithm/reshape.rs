//! Long-to-wide reshaping
//!
//! Pivots long-format (alignment key, category, value) rows into one wide
//! table: a column per category, a row per distinct key ascending, and the
//! key replaced by a dense 1-based sequential index reflecting row order.

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::models::table::{LongRow, WideRow, WideTable};

use super::align::AlignedStats;

/// Convert aligned per-(adult-year, cohort) statistics into long rows
#[must_use]
pub fn long_rows_from_aligned(stats: &AlignedStats) -> Vec<LongRow> {
    stats
        .iter()
        .map(|(&(adult_yr, generation), &value)| {
            LongRow::new(adult_yr, generation.label(), value)
        })
        .collect()
}

/// Pivot long rows into a wide table
///
/// Categories are the sorted union of categories present in the input, so
/// a category with partial coverage still gets a column and its missing
/// cells stay empty. Duplicate (key, category) observations keep the last
/// value seen in key order.
#[must_use]
pub fn pivot(rows: &[LongRow], index_name: &str) -> WideTable {
    let categories: Vec<String> = rows
        .iter()
        .map(|row| row.category.as_str())
        .sorted()
        .dedup()
        .map(String::from)
        .collect();

    let mut cells: BTreeMap<i32, BTreeMap<&str, f64>> = BTreeMap::new();
    for row in rows {
        cells
            .entry(row.key)
            .or_default()
            .insert(row.category.as_str(), row.value);
    }

    let wide_rows = cells
        .into_iter()
        .enumerate()
        .map(|(position, (key, by_category))| WideRow {
            index: position + 1,
            key,
            cells: categories
                .iter()
                .map(|category| by_category.get(category.as_str()).copied())
                .collect(),
        })
        .collect();

    WideTable {
        index_name: index_name.to_string(),
        categories,
        rows: wide_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::generation::Generation;

    #[test]
    fn test_pivot_assigns_dense_index() {
        // Keys with gaps (18, 20, 25) still index 1, 2, 3.
        let rows = vec![
            LongRow::new(20, "Gen X", 0.30),
            LongRow::new(18, "Gen X", 0.20),
            LongRow::new(25, "Gen X", 0.40),
        ];

        let table = pivot(&rows, "total_gen_adult_yr");
        assert_eq!(table.index_name, "total_gen_adult_yr");
        assert_eq!(
            table.rows.iter().map(|r| r.index).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(
            table.rows.iter().map(|r| r.key).collect::<Vec<_>>(),
            vec![18, 20, 25]
        );
    }

    #[test]
    fn test_pivot_union_of_categories() {
        let rows = vec![
            LongRow::new(18, "Baby Boomer", 0.25),
            LongRow::new(18, "Gen X", 0.22),
            LongRow::new(19, "Baby Boomer", 0.28),
        ];

        let table = pivot(&rows, "total_gen_adult_yr");
        assert_eq!(table.categories, vec!["Baby Boomer", "Gen X"]);
        assert_eq!(table.rows[0].cells, vec![Some(0.25), Some(0.22)]);
        // Gen X has no adult-year 19 observation; the cell stays empty.
        assert_eq!(table.rows[1].cells, vec![Some(0.28), None]);
    }

    #[test]
    fn test_pivot_unpivot_round_trip() {
        let rows = vec![
            LongRow::new(18, "Baby Boomer", 0.25),
            LongRow::new(18, "Millennial", 0.18),
            LongRow::new(19, "Baby Boomer", 0.28),
            LongRow::new(21, "Millennial", 0.24),
        ];

        let table = pivot(&rows, "total_gen_adult_yr");
        let mut recovered = table.unpivot();
        recovered.sort_by(|a, b| (a.key, &a.category).cmp(&(b.key, &b.category)));

        let mut expected = rows.clone();
        expected.sort_by(|a, b| (a.key, &a.category).cmp(&(b.key, &b.category)));
        assert_eq!(recovered, expected);
    }

    #[test]
    fn test_long_rows_from_aligned_use_cohort_labels() {
        let mut stats = AlignedStats::new();
        stats.insert((18, Generation::Millennial), 0.18);
        stats.insert((30, Generation::BabyBoomer), 0.44);

        let rows = long_rows_from_aligned(&stats);
        assert!(rows.contains(&LongRow::new(18, "Millennial", 0.18)));
        assert!(rows.contains(&LongRow::new(30, "Baby Boomer", 0.44)));
    }
}
