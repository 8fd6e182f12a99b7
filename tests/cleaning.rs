use std::fs;

use rstest::rstest;

use scour::io::csv;
use scour::pipeline::{NoopObserver, clean};
use scour::table::Cell;
use scour::testutil::{generate_messy_csv, scratch_dir, write_csv};

#[test]
fn test_dedup_dates_and_fill_end_to_end() {
    let dir = scratch_dir();
    let input = dir.path().join("messy.csv");
    let output = dir.path().join("cleaned_messy.csv");

    write_csv(
        &input,
        "id,name,joined",
        &["1,Al,2023-1-5", "1,Al,2023-1-5", "2,Bo,"],
    );

    let mut table = csv::load(&input, b',').unwrap();
    let summary = clean(&mut table, "%Y-%m-%d", &NoopObserver).unwrap();
    csv::save(&table, &output, b',').unwrap();

    assert_eq!(summary.rows_before, 3);
    assert_eq!(summary.rows_after, 2);
    assert_eq!(summary.duplicates_removed(), 1);
    assert_eq!(summary.missing_filled, 1);
    assert_eq!(summary.date_columns, vec!["joined".to_string()]);

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "id,name,joined\n1,Al,2023-01-05\n2,Bo,N/A\n"
    );
}

#[test]
fn test_all_numeric_column_fills_with_zero() {
    let dir = scratch_dir();
    let input = dir.path().join("scores.csv");
    write_csv(&input, "score", &["3", "", "7"]);

    let mut table = csv::load(&input, b',').unwrap();
    let summary = clean(&mut table, "%Y-%m-%d", &NoopObserver).unwrap();

    assert_eq!(summary.missing_filled, 1);
    assert_eq!(summary.numeric_columns, vec!["score".to_string()]);
    assert_eq!(*table.cell(0, 0), Cell::Number(3.0));
    assert_eq!(*table.cell(1, 0), Cell::Number(0.0));
    assert_eq!(*table.cell(2, 0), Cell::Number(7.0));
}

#[test]
fn test_non_date_text_column_left_untouched() {
    let dir = scratch_dir();
    let input = dir.path().join("fruit.csv");
    write_csv(&input, "fruit", &["apple", "banana", "cherry"]);

    let mut table = csv::load(&input, b',').unwrap();
    let summary = clean(&mut table, "%Y-%m-%d", &NoopObserver).unwrap();

    assert!(summary.date_columns.is_empty());
    assert_eq!(*table.cell(0, 0), Cell::Text("apple".to_string()));
    assert_eq!(*table.cell(1, 0), Cell::Text("banana".to_string()));
    assert_eq!(*table.cell(2, 0), Cell::Text("cherry".to_string()));
}

/// Cleaning the already-cleaned output again must reproduce it byte for
/// byte: dedup finds nothing new, date columns re-render to the same
/// strings, and no new missing values appear.
#[test]
fn test_reclean_is_idempotent() {
    let dir = scratch_dir();
    let input = dir.path().join("messy.csv");
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    generate_messy_csv(&input, 200, 7);

    let mut table = csv::load(&input, b',').unwrap();
    clean(&mut table, "%Y-%m-%d", &NoopObserver).unwrap();
    csv::save(&table, &first, b',').unwrap();

    let mut recleaned = csv::load(&first, b',').unwrap();
    let summary = clean(&mut recleaned, "%Y-%m-%d", &NoopObserver).unwrap();
    csv::save(&recleaned, &second, b',').unwrap();

    assert_eq!(summary.duplicates_removed(), 0);
    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        fs::read_to_string(&second).unwrap()
    );
}

/// Invariants over generated messy inputs: the column set is preserved,
/// dedup never grows the table, and no missing cells survive the fill.
#[rstest]
#[case::empty(0)]
#[case::small(25)]
#[case::large(500)]
fn test_cleaning_invariants(#[case] num_rows: usize) {
    let dir = scratch_dir();
    let input = dir.path().join("messy.csv");
    generate_messy_csv(&input, num_rows, 42);

    let mut table = csv::load(&input, b',').unwrap();
    let columns_before = table.columns().to_vec();

    let summary = clean(&mut table, "%Y-%m-%d", &NoopObserver).unwrap();

    assert_eq!(table.columns(), columns_before.as_slice());
    assert!(summary.rows_after <= summary.rows_before);
    assert_eq!(table.num_rows(), summary.rows_after);
    for row in table.rows() {
        assert!(row.iter().all(|cell| !cell.is_missing()));
    }
}

/// Equality in dedup is type-aware: rows only collapse when every cell
/// matches exactly.
#[test]
fn test_near_duplicate_rows_survive() {
    let dir = scratch_dir();
    let input = dir.path().join("near.csv");
    write_csv(&input, "id,name", &["1,Al", "1,Alan", "2,Al"]);

    let mut table = csv::load(&input, b',').unwrap();
    let summary = clean(&mut table, "%Y-%m-%d", &NoopObserver).unwrap();

    assert_eq!(summary.rows_before, 3);
    assert_eq!(summary.rows_after, 3);
}
