use super::cell::Cell;

/// Semantic type of a column, inferred from the values observed at load
/// time. Date columns stay `Text`; they only get re-rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Numeric,
}

/// An in-memory rows/columns dataset under active transformation. Column
/// names and order are fixed at load time; cleaning never adds or removes
/// columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    types: Vec<ColumnType>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table from raw string records, inferring one type per
    /// column. A column is numeric iff it has at least one non-blank value
    /// and every non-blank value parses as a number.
    pub fn from_records(columns: Vec<String>, records: Vec<Vec<String>>) -> Table {
        let types = infer_types(columns.len(), &records);
        let rows = records
            .into_iter()
            .map(|record| {
                record
                    .iter()
                    .zip(&types)
                    .map(|(raw, &dtype)| Cell::from_raw(raw, dtype))
                    .collect()
            })
            .collect();
        Table {
            columns,
            types,
            rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn column_type(&self, col: usize) -> ColumnType {
        self.types[col]
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut Vec<Vec<Cell>> {
        &mut self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.rows[row][col]
    }
}

fn infer_types(num_columns: usize, records: &[Vec<String>]) -> Vec<ColumnType> {
    (0..num_columns)
        .map(|col| {
            let mut saw_value = false;
            for record in records {
                let raw = record[col].trim();
                if raw.is_empty() {
                    continue;
                }
                saw_value = true;
                if raw.parse::<f64>().is_err() {
                    return ColumnType::Text;
                }
            }
            // An all-blank column has nothing to infer from; treat it as text.
            if saw_value {
                ColumnType::Numeric
            } else {
                ColumnType::Text
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_type_inference() {
        let table = Table::from_records(
            vec!["id".into(), "name".into(), "score".into()],
            records(&[&["1", "Al", "0.5"], &["2", "Bo", ""]]),
        );
        assert_eq!(table.column_type(0), ColumnType::Numeric);
        assert_eq!(table.column_type(1), ColumnType::Text);
        assert_eq!(table.column_type(2), ColumnType::Numeric);
    }

    #[test]
    fn test_mixed_column_is_text() {
        let table = Table::from_records(
            vec!["v".into()],
            records(&[&["1"], &["two"], &["3"]]),
        );
        assert_eq!(table.column_type(0), ColumnType::Text);
        assert_eq!(*table.cell(0, 0), Cell::Text("1".to_string()));
    }

    #[test]
    fn test_all_blank_column_is_text() {
        let table = Table::from_records(vec!["v".into()], records(&[&[""], &[""]]));
        assert_eq!(table.column_type(0), ColumnType::Text);
        assert!(table.cell(0, 0).is_missing());
    }

    #[test]
    fn test_numeric_cells_are_parsed() {
        let table = Table::from_records(vec!["v".into()], records(&[&["3"], &[""], &["7"]]));
        assert_eq!(*table.cell(0, 0), Cell::Number(3.0));
        assert!(table.cell(1, 0).is_missing());
        assert_eq!(*table.cell(2, 0), Cell::Number(7.0));
    }

    #[test]
    fn test_zero_row_table() {
        let table = Table::from_records(vec!["a".into(), "b".into()], Vec::new());
        assert_eq!(table.num_rows(), 0);
        assert_eq!(table.num_columns(), 2);
        assert_eq!(table.column_type(0), ColumnType::Text);
    }
}
