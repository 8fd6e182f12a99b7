//! Test utilities.
//!
//! This module is only available when the `testutil` feature is enabled.

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Create a scratch directory for file-to-file tests.
pub fn scratch_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Write a CSV file from a header line and literal row lines.
pub fn write_csv(path: &Path, header: &str, rows: &[&str]) {
    let mut contents = String::from(header);
    for row in rows {
        contents.push('\n');
        contents.push_str(row);
    }
    contents.push('\n');
    fs::write(path, contents).unwrap();
}

/// Generate a deterministic messy CSV with columns `id,name,score,joined`:
/// duplicated rows, blank cells, and mixed date spellings.
pub fn generate_messy_csv(path: &Path, num_rows: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut contents = String::from("id,name,score,joined\n");
    let mut previous: Option<String> = None;

    for i in 0..num_rows {
        // Roughly one row in five repeats the previous one verbatim.
        if let Some(prev) = &previous {
            if rng.gen_range(0..5) == 0 {
                contents.push_str(prev);
                contents.push('\n');
                continue;
            }
        }

        let name = if rng.gen_range(0..10) == 0 {
            String::new()
        } else {
            format!("user_{i}")
        };
        let score = if rng.gen_range(0..10) == 0 {
            String::new()
        } else {
            format!("{}", rng.gen_range(0..100))
        };
        let day = rng.gen_range(1..=28);
        let joined = match rng.gen_range(0..4) {
            0 => format!("2024-03-{day:02}"),
            1 => format!("2024/03/{day:02}"),
            2 => format!("{day} Mar 2024"),
            _ => String::new(),
        };

        let row = format!("{i},{name},{score},{joined}");
        contents.push_str(&row);
        contents.push('\n');
        previous = Some(row);
    }

    fs::write(path, contents).unwrap();
}
