use ahash::AHashSet;

use crate::table::{Cell, Table};

/// Drop rows that exactly duplicate an earlier row across all columns.
/// First occurrence wins and surviving rows keep their relative order.
/// Returns the number of rows removed.
pub fn drop_duplicates(table: &mut Table) -> usize {
    let before = table.num_rows();
    let mut seen: AHashSet<Vec<Cell>> = AHashSet::with_capacity(before);
    table.rows_mut().retain(|row| seen.insert(row.clone()));
    before - table.num_rows()
}
