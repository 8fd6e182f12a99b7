use std::path::Path;

use chrono::Local;
use serde::Serialize;

/// Counters produced by one `clean` run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanSummary {
    pub rows_before: usize,
    pub rows_after: usize,
    pub missing_filled: usize,
    pub date_columns: Vec<String>,
    pub text_columns: Vec<String>,
    pub numeric_columns: Vec<String>,
}

impl CleanSummary {
    pub fn duplicates_removed(&self) -> usize {
        self.rows_before - self.rows_after
    }
}

/// Audit record of one cleaning run. Immutable once built; the timestamp is
/// captured at construction with seconds precision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleaningReport {
    pub timestamp: String,
    pub input_path: String,
    pub output_path: String,
    #[serde(flatten)]
    pub summary: CleanSummary,
}

impl CleaningReport {
    pub fn new(summary: CleanSummary, input: &Path, output: &Path) -> CleaningReport {
        CleaningReport {
            timestamp: Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            input_path: input.display().to_string(),
            output_path: output.display().to_string(),
            summary,
        }
    }

    /// Render the report as labeled lines in fixed order.
    pub fn to_text(&self) -> String {
        let lines = [
            format!("CSV Cleaning Report - {}", self.timestamp),
            format!("Input file: {}", self.input_path),
            format!("Output file: {}", self.output_path),
            format!("Rows before: {}", self.summary.rows_before),
            format!("Rows after deduplication: {}", self.summary.rows_after),
            format!("Duplicate rows removed: {}", self.summary.duplicates_removed()),
            format!("Missing values filled: {}", self.summary.missing_filled),
            format!(
                "Date columns standardized: {}",
                join_or_none(&self.summary.date_columns)
            ),
            format!(
                "Text columns filled with 'N/A': {}",
                join_or_none(&self.summary.text_columns)
            ),
            format!(
                "Numeric columns filled with 0: {}",
                join_or_none(&self.summary.numeric_columns)
            ),
        ];
        lines.join("\n")
    }
}

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        String::from("None")
    } else {
        names.join(", ")
    }
}
