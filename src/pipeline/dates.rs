use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::table::{Cell, ColumnType, Table};

/// Formats probed, in order, when reading a value as a calendar date.
/// Numeric fields are width-flexible in chrono, so "2023-1-5" parses under
/// the dashed ISO entry.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date());
        }
    }
    None
}

/// Re-render every text column where at least one value parses as a date.
/// In a recognized column, values that fail to parse become missing; the
/// fill stage accounts for them. Columns with no parsing values are left
/// untouched. Returns the names of the recognized columns, in column order.
pub fn standardize(table: &mut Table, date_format: &str) -> Vec<String> {
    let mut date_columns = Vec::new();

    for col in 0..table.num_columns() {
        if table.column_type(col) != ColumnType::Text {
            continue;
        }
        let recognized = table.rows().iter().any(|row| match &row[col] {
            Cell::Text(raw) => parse_date(raw).is_some(),
            _ => false,
        });
        if !recognized {
            continue;
        }

        for row in table.rows_mut() {
            row[col] = match &row[col] {
                Cell::Text(raw) => match parse_date(raw) {
                    Some(date) => Cell::Text(render(date, date_format)),
                    None => Cell::Missing,
                },
                // Only Missing reaches here in a text column; it stays missing.
                _ => Cell::Missing,
            };
        }
        date_columns.push(table.columns()[col].clone());
    }

    date_columns
}

// Render through a midnight datetime so time specifiers in the pattern stay
// legal. The pattern itself was validated before the stages ran.
fn render(date: NaiveDate, date_format: &str) -> String {
    date.and_time(NaiveTime::MIN).format(date_format).to_string()
}
