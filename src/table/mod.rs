mod cell;
mod table;

pub use cell::Cell;
pub use table::{ColumnType, Table};
