use std::fs;
use std::path::Path;

use crate::core::ScourError::{self, WriteError};
use crate::io::csv::create_parent_dirs;
use crate::pipeline::CleaningReport;

/// Persist the report as flat text, one labeled line per field.
pub fn write(report: &CleaningReport, path: &Path) -> Result<(), ScourError> {
    create_parent_dirs(path)?;
    fs::write(path, report.to_text()).map_err(|e| WriteError(e.to_string()))
}
