use std::hash::{Hash, Hasher};

use super::table::ColumnType;

/// A single table cell. `Missing` means "absent" and is distinct from an
/// empty string or zero.
#[derive(Debug, Clone)]
pub enum Cell {
    Text(String),
    Number(f64),
    Missing,
}

impl Cell {
    /// Parse a raw field according to the column's inferred type. Blank
    /// fields become `Missing`.
    pub fn from_raw(raw: &str, dtype: ColumnType) -> Cell {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Missing;
        }
        match dtype {
            ColumnType::Numeric => trimmed
                .parse::<f64>()
                .map(Cell::Number)
                .unwrap_or(Cell::Missing),
            ColumnType::Text => Cell::Text(raw.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Render the cell for output. `Missing` renders empty, which only
    /// happens for tables that never went through the fill stage.
    pub fn render(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(v) => format_number(*v),
            Cell::Missing => String::new(),
        }
    }
}

// Numbers compare by bit pattern so equality and hashing agree.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Cell::Text(a), Cell::Text(b)) => a == b,
            (Cell::Number(a), Cell::Number(b)) => a.to_bits() == b.to_bits(),
            (Cell::Missing, Cell::Missing) => true,
            _ => false,
        }
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Cell::Text(s) => {
                0u8.hash(state);
                s.hash(state);
            }
            Cell::Number(v) => {
                1u8.hash(state);
                v.to_bits().hash(state);
            }
            Cell::Missing => 2u8.hash(state),
        }
    }
}

/// Integral values render without a fractional part, so a filled `0` comes
/// out as "0" rather than "0.0".
pub(crate) fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
