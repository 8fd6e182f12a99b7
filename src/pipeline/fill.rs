use crate::table::{Cell, ColumnType, Table};

pub struct FillOutcome {
    pub filled: usize,
    pub text_columns: Vec<String>,
    pub numeric_columns: Vec<String>,
}

/// Replace every missing cell: "N/A" in text columns, 0 in numeric columns.
/// Date columns were re-rendered as text, so they get "N/A". The returned
/// column lists cover all columns of each type, filled or not.
pub fn fill_missing(table: &mut Table) -> FillOutcome {
    let mut filled = 0;
    let mut text_columns = Vec::new();
    let mut numeric_columns = Vec::new();

    for col in 0..table.num_columns() {
        let replacement = match table.column_type(col) {
            ColumnType::Text => {
                text_columns.push(table.columns()[col].clone());
                Cell::Text(String::from("N/A"))
            }
            ColumnType::Numeric => {
                numeric_columns.push(table.columns()[col].clone());
                Cell::Number(0.0)
            }
        };

        for row in table.rows_mut() {
            if row[col].is_missing() {
                row[col] = replacement.clone();
                filled += 1;
            }
        }
    }

    FillOutcome {
        filled,
        text_columns,
        numeric_columns,
    }
}
