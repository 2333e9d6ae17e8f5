use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::types::Result;

/// Write a report value to a JSON file
pub fn write_json_file<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}

/// Render a report value as a pretty JSON string
pub fn to_json_string<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write a report value to stdout
pub fn write_json_stdout<T: Serialize>(value: &T) -> Result<()> {
    let json = to_json_string(value)?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FilterOptions;

    #[test]
    fn test_json_serialization() {
        let options = FilterOptions {
            distritos: vec!["Centro".to_string()],
            generos: vec!["F".to_string(), "M".to_string()],
            edades: vec![],
            jerarquias: vec![],
            estados_civiles: vec![],
        };

        let json = to_json_string(&options).unwrap();
        assert!(json.contains("\"distritos\""));
        assert!(json.contains("\"Centro\""));
    }

    #[test]
    fn test_write_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        let options = FilterOptions {
            distritos: vec![],
            generos: vec![],
            edades: vec![],
            jerarquias: vec![],
            estados_civiles: vec![],
        };
        write_json_file(&options, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"generos\""));
    }
}
