pub mod csv;
pub mod excel;

use std::path::Path;

use crate::table::Table;
use crate::types::Result;

/// Missing-value sentinels normalized to null during cleaning
pub const MISSING_TOKENS: &[&str] = &[
    "", "NA", "N/A", "na", "n/a", "NULL", "null", "NaN", "nan", "None", "none", "-", "--", "#N/A",
];

/// File formats the loader accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Tsv,
    Excel,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "csv" => Some(FileFormat::Csv),
            "tsv" | "tab" => Some(FileFormat::Tsv),
            "xlsx" | "xls" | "xlsm" | "xlsb" => Some(FileFormat::Excel),
            _ => None,
        }
    }
}

/// Common trait for survey dataset readers
pub trait DataReader {
    /// Read the file into a cleaned table
    fn read(&mut self) -> Result<Table>;
}

/// Trim a raw cell and normalize missing sentinels to `None`
pub fn clean_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if MISSING_TOKENS.contains(&trimmed) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Create a reader for the given file path
pub fn create_reader(path: &Path) -> Result<Box<dyn DataReader>> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    let format = FileFormat::from_extension(ext).ok_or_else(|| {
        crate::error::Error::UnsupportedFormat(format!("Unsupported file extension: .{}", ext))
    })?;

    match format {
        FileFormat::Csv => Ok(Box::new(csv::CsvReader::new(path)?)),
        FileFormat::Tsv => Ok(Box::new(csv::CsvReader::new_tsv(path)?)),
        FileFormat::Excel => Ok(Box::new(excel::ExcelReader::new(path)?)),
    }
}

/// Load the survey dataset at `path` into memory. One-time startup step;
/// any failure here is fatal and must abort initialization.
pub fn load_table(path: &Path) -> Result<Table> {
    create_reader(path)?.read()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_cell() {
        assert_eq!(clean_cell("  Centro  "), Some("Centro".to_string()));
        assert_eq!(clean_cell("nan"), None);
        assert_eq!(clean_cell("  "), None);
        assert_eq!(clean_cell("N/A"), None);
        assert_eq!(clean_cell("Sí"), Some("Sí".to_string()));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(FileFormat::from_extension("xlsx"), Some(FileFormat::Excel));
        assert_eq!(FileFormat::from_extension("CSV"), Some(FileFormat::Csv));
        assert_eq!(FileFormat::from_extension("tab"), Some(FileFormat::Tsv));
        assert_eq!(FileFormat::from_extension("pdf"), None);
    }

    #[test]
    fn test_create_reader_unsupported() {
        let result = create_reader(Path::new("survey.xyz"));
        assert!(result.is_err());
    }
}
