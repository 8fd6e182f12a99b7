use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::core::ScourError::{self, WriteError};
use crate::table::Table;

/// Read a delimiter-separated file into a typed table. Ragged rows and
/// invalid encodings fail as `LoadError`; blank fields load as missing.
pub fn load(path: &Path, delimiter: u8) -> Result<Table, ScourError> {
    let mut reader = ReaderBuilder::new().delimiter(delimiter).from_path(path)?;

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        records.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::from_records(columns, records))
}

/// Write the table with the same delimiter convention as the input. Parent
/// directories are created first; any failure is a `WriteError`.
pub fn save(table: &Table, path: &Path, delimiter: u8) -> Result<(), ScourError> {
    create_parent_dirs(path)?;

    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|e| WriteError(e.to_string()))?;

    writer
        .write_record(table.columns())
        .map_err(|e| WriteError(e.to_string()))?;
    for row in table.rows() {
        writer
            .write_record(row.iter().map(|cell| cell.render()))
            .map_err(|e| WriteError(e.to_string()))?;
    }
    writer.flush().map_err(|e| WriteError(e.to_string()))
}

pub(crate) fn create_parent_dirs(path: &Path) -> Result<(), ScourError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| WriteError(e.to_string()))?;
        }
    }
    Ok(())
}
