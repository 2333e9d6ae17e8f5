//! Pure aggregation operations over a [`Table`].
//!
//! Every function takes the table by reference and touches no shared state,
//! so the same call over a filtered subset and over that subset loaded as a
//! fresh table yields identical results.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::survey::SENIORITY_MIDPOINTS;
use crate::table::{RowView, Table};
use crate::types::{
    CrossEntry, CrossTab, Distribution, FactorBreakdown, FactorTally, GroupedCounts,
    GroupedCountsEntry,
};

/// Round to two decimals, half away from zero. Applied only when a
/// percentage or index is emitted, never to intermediate counts.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Count non-null values per category in one column.
/// A column absent from the table yields an empty distribution.
pub fn distribution(table: &Table, column: &str) -> Distribution {
    let mut dist = Distribution::new();
    let Some(col) = table.column_index(column) else {
        return dist;
    };

    for row in 0..table.len() {
        if let Some(value) = table.cell(row, col) {
            *dist.entry(value.to_string()).or_insert(0) += 1;
        }
    }
    dist
}

/// Joint counts over two columns, sorted by (a, b).
/// Rows with a missing value in either column are excluded.
pub fn cross_tab(
    table: &Table,
    col_a: &str,
    col_b: &str,
    label_a: &'static str,
    label_b: &'static str,
) -> CrossTab {
    let mut counts: BTreeMap<(String, String), u64> = BTreeMap::new();

    if let (Some(a), Some(b)) = (table.column_index(col_a), table.column_index(col_b)) {
        for row in 0..table.len() {
            if let (Some(value_a), Some(value_b)) = (table.cell(row, a), table.cell(row, b)) {
                *counts
                    .entry((value_a.to_string(), value_b.to_string()))
                    .or_insert(0) += 1;
            }
        }
    }

    let entries = counts
        .into_iter()
        .map(|((a, b), count)| CrossEntry { a, b, count })
        .collect();

    CrossTab {
        label_a,
        label_b,
        entries,
    }
}

/// Tally every non-null mention across the listed columns (one multi-select
/// question spread over several single-answer fields).
///
/// The scan is column-major, so ties rank by first occurrence in that order.
/// `top_n == 0` returns the full tally. Absent columns contribute nothing.
pub fn factor_tally(table: &Table, columns: &[&str], top_n: usize) -> FactorTally {
    let mut counts: HashMap<String, u64> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for column in columns {
        let Some(col) = table.column_index(column) else {
            continue;
        };
        for row in 0..table.len() {
            if let Some(value) = table.cell(row, col) {
                let count = counts.entry(value.to_string()).or_insert(0);
                if *count == 0 {
                    order.push(value.to_string());
                }
                *count += 1;
            }
        }
    }

    let mut entries: Vec<(String, u64)> = order
        .into_iter()
        .map(|value| {
            let count = counts[&value];
            (value, count)
        })
        .collect();

    // Stable sort keeps first-seen order for equal counts
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    if top_n > 0 {
        entries.truncate(top_n);
    }

    FactorTally::new(entries)
}

/// Group rows by one column and, per group, count the rows whose value in
/// each metric column equals `value`. Groups are key-sorted; rows with a
/// null group are excluded. Each metric is `(output key, column name)`.
pub fn grouped_match_counts(
    table: &Table,
    group_column: &str,
    group_label: &'static str,
    metrics: &[(&'static str, &str)],
    value: &str,
) -> GroupedCounts {
    let mut groups: BTreeMap<String, Vec<u64>> = BTreeMap::new();

    if let Some(group_col) = table.column_index(group_column) {
        for row in 0..table.len() {
            let Some(group) = table.cell(row, group_col) else {
                continue;
            };
            let counts = groups
                .entry(group.to_string())
                .or_insert_with(|| vec![0; metrics.len()]);
            for (idx, (_, column)) in metrics.iter().enumerate() {
                if table.value(row, column) == Some(value) {
                    counts[idx] += 1;
                }
            }
        }
    }

    let entries = groups
        .into_iter()
        .map(|(group, counts)| GroupedCountsEntry {
            group,
            counts: metrics
                .iter()
                .map(|(key, _)| *key)
                .zip(counts)
                .collect(),
        })
        .collect();

    GroupedCounts {
        group_label,
        entries,
    }
}

/// For each of the `top_n` most-mentioned factors, count the `by_column`
/// categories of the rows mentioning it. A row naming the same factor in
/// several columns contributes once per column, matching the tally.
pub fn factor_breakdown(
    table: &Table,
    factor_columns: &[&str],
    by_column: &str,
    top_n: usize,
) -> FactorBreakdown {
    let tally = factor_tally(table, factor_columns, top_n);

    let mut entries = Vec::with_capacity(tally.len());
    for (factor, _) in tally.entries() {
        let mut counts = Distribution::new();
        if let Some(by) = table.column_index(by_column) {
            for column in factor_columns {
                let Some(col) = table.column_index(column) else {
                    continue;
                };
                for row in 0..table.len() {
                    if table.cell(row, col) == Some(factor.as_str()) {
                        if let Some(category) = table.cell(row, by) {
                            *counts.entry(category.to_string()).or_insert(0) += 1;
                        }
                    }
                }
            }
        }
        entries.push((factor.clone(), counts));
    }

    FactorBreakdown::new(entries)
}

/// Share of rows where `column == value`, as a percentage of all rows
/// in the subset. Defined as 0 for an empty table.
pub fn percentage(table: &Table, column: &str, value: &str) -> f64 {
    conditional_percentage(table, |row| row.is(column, value))
}

/// Share of rows matching an arbitrary compound condition.
/// Same zero-row policy as [`percentage`].
pub fn conditional_percentage<F>(table: &Table, pred: F) -> f64
where
    F: Fn(RowView<'_>) -> bool,
{
    if table.is_empty() {
        return 0.0;
    }
    let matches = table.rows().filter(|row| pred(*row)).count();
    round2(matches as f64 / table.len() as f64 * 100.0)
}

/// Arithmetic mean of percentage components, for composite indices
pub fn composite_index(parts: &[f64]) -> f64 {
    if parts.is_empty() {
        return 0.0;
    }
    round2(parts.iter().sum::<f64>() / parts.len() as f64)
}

/// Distinct non-null values of a column, lexicographically ascending
pub fn unique_sorted_values(table: &Table, column: &str) -> Vec<String> {
    let Some(col) = table.column_index(column) else {
        return Vec::new();
    };

    let values: BTreeSet<String> = (0..table.len())
        .filter_map(|row| table.cell(row, col))
        .map(str::to_string)
        .collect();

    values.into_iter().collect()
}

/// Average tenure in years, mapping each seniority band to its midpoint.
/// Bands without a midpoint are excluded; 0 when nothing maps.
pub fn seniority_average(table: &Table, column: &str) -> f64 {
    let Some(col) = table.column_index(column) else {
        return 0.0;
    };

    let mut sum = 0.0;
    let mut mapped = 0u64;
    for row in 0..table.len() {
        if let Some(midpoint) = table.cell(row, col).and_then(|b| SENIORITY_MIDPOINTS.get(b)) {
            sum += midpoint;
            mapped += 1;
        }
    }

    if mapped == 0 {
        0.0
    } else {
        round1(sum / mapped as f64)
    }
}
