mod dedup;
mod dates;
mod fill;
mod observer;
mod report;

pub use observer::{LogObserver, NoopObserver, ProgressObserver, Stage};
pub use report::{CleanSummary, CleaningReport};

use chrono::NaiveTime;

use crate::core::ScourError;
use crate::table::Table;

/// Run the cleaning stages over `table` in place: deduplicate, standardize
/// date columns, fill missing values. Returns the counters the report is
/// built from.
///
/// Apart from an invalid `date_format`, the stages are total: a value that
/// fails to parse as a date degrades to a missing cell and is picked up by
/// the fill stage, never surfaced as an error.
pub fn clean(
    table: &mut Table,
    date_format: &str,
    observer: &dyn ProgressObserver,
) -> Result<CleanSummary, ScourError> {
    validate_date_format(date_format)?;

    let rows_before = table.num_rows();

    observer.on_stage(Stage::Deduplicate);
    let removed = dedup::drop_duplicates(table);

    observer.on_stage(Stage::StandardizeDates);
    let date_columns = dates::standardize(table, date_format);

    observer.on_stage(Stage::FillMissing);
    let fill = fill::fill_missing(table);

    Ok(CleanSummary {
        rows_before,
        rows_after: rows_before - removed,
        missing_filled: fill.filled,
        date_columns,
        text_columns: fill.text_columns,
        numeric_columns: fill.numeric_columns,
    })
}

/// Reject bad patterns before any stage runs by rendering a probe date.
/// Rendering through a midnight datetime keeps time specifiers legal, same
/// as the per-value rendering in the date stage.
fn validate_date_format(pattern: &str) -> Result<(), ScourError> {
    use std::fmt::Write as _;

    let probe = chrono::NaiveDate::default().and_time(NaiveTime::MIN);
    let mut buf = String::new();
    if write!(buf, "{}", probe.format(pattern)).is_err() {
        return Err(ScourError::InvalidDateFormat(pattern.to_string()));
    }
    Ok(())
}
