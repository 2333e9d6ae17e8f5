use std::collections::HashMap;

/// A cleaned rectangular survey dataset.
///
/// Cells hold either a trimmed non-empty string or `None` (missing). The
/// readers build a `Table` once at startup; it is never mutated afterwards.
/// Filtering produces a new `Table` over cloned rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let index = columns
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), idx))
            .collect();
        Self {
            columns,
            index,
            rows,
        }
    }

    /// Number of rows (survey responses)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Cell value by position; `None` for missing values and out-of-range
    /// positions (rows may be ragged in flexible CSV input)
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)?
            .get(col)
            .and_then(|value| value.as_deref())
    }

    /// Cell value by column name
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        self.cell(row, self.column_index(column)?)
    }

    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> {
        (0..self.rows.len()).map(move |row| RowView { table: self, row })
    }

    /// New table holding clones of the rows the predicate keeps
    pub fn retain<F>(&self, pred: F) -> Table
    where
        F: Fn(RowView<'_>) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .filter(|(row, _)| pred(RowView { table: self, row: *row }))
            .map(|(_, values)| values.clone())
            .collect();

        Table {
            columns: self.columns.clone(),
            index: self.index.clone(),
            rows,
        }
    }
}

/// Borrowed view of a single row, addressed by column name
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    table: &'a Table,
    row: usize,
}

impl<'a> RowView<'a> {
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.table.value(self.row, column)
    }

    /// Exact-equality check; false when the value is missing or the column
    /// does not exist in this dataset
    pub fn is(&self, column: &str, value: &str) -> bool {
        self.get(column) == Some(value)
    }
}
