use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader, Sheets};

use crate::table::Table;
use crate::types::Result;

use super::{clean_cell, DataReader};

/// Excel survey export reader (supports .xlsx, .xls, .xlsm, .xlsb).
/// The survey export keeps all responses on the first sheet.
pub struct ExcelReader {
    path: PathBuf,
}

impl ExcelReader {
    pub fn new(path: &Path) -> Result<Self> {
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Convert an Excel cell to a cleaned value
    fn cell_to_value(cell: &Data) -> Option<String> {
        match cell {
            Data::Empty | Data::Error(_) => None,
            Data::String(s) => clean_cell(s),
            Data::Float(f) => Some(Self::format_number(*f)),
            Data::Int(i) => Some(i.to_string()),
            Data::Bool(b) => Some(b.to_string()),
            Data::DateTime(d) => Some(Self::excel_serial_to_date_string(d.as_f64())),
            Data::DateTimeIso(s) | Data::DurationIso(s) => clean_cell(s),
        }
    }

    /// Render headers the same way as string cells, minus the missing check
    fn cell_to_header(cell: &Data) -> String {
        match cell {
            Data::String(s) => s.trim().to_string(),
            Data::Empty => String::new(),
            other => Self::cell_to_value(other).unwrap_or_default(),
        }
    }

    /// Integral floats print without the trailing ".0" so numeric answer
    /// categories ("2", not "2.0") match across CSV and Excel inputs
    fn format_number(value: f64) -> String {
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            (value as i64).to_string()
        } else {
            value.to_string()
        }
    }

    /// Convert Excel serial date to ISO date string
    fn excel_serial_to_date_string(serial: f64) -> String {
        // Excel epoch is 1899-12-30 (with the 1900 leap year bug)
        let days = serial as i64;
        let base = chrono::NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
        if let Some(date) = base.checked_add_signed(chrono::Duration::days(days)) {
            date.format("%Y-%m-%d").to_string()
        } else {
            serial.to_string()
        }
    }
}

impl DataReader for ExcelReader {
    fn read(&mut self) -> Result<Table> {
        let mut workbook: Sheets<std::io::BufReader<std::fs::File>> =
            open_workbook_auto(&self.path)?;

        let sheet_name = workbook.sheet_names().first().cloned().ok_or_else(|| {
            crate::error::Error::UnsupportedFormat("workbook has no sheets".to_string())
        })?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(crate::error::Error::Excel)?;

        let mut rows_iter = range.rows();

        // First row is headers
        let headers: Vec<String> = rows_iter
            .next()
            .map(|row| row.iter().map(Self::cell_to_header).collect())
            .unwrap_or_default();

        let num_cols = headers.len();
        let mut rows: Vec<Vec<Option<String>>> = Vec::new();

        for row in rows_iter {
            let mut values: Vec<Option<String>> = Vec::with_capacity(num_cols);
            for col_idx in 0..num_cols {
                values.push(row.get(col_idx).and_then(Self::cell_to_value));
            }
            rows.push(values);
        }

        Ok(Table::new(headers, rows))
    }
}
