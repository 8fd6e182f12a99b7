use std::path::{Path, PathBuf};

use clap::Parser;
use log::kv::{ToValue, Value};

#[derive(Parser, Debug, PartialEq)]
#[command(version, about)]
pub struct CliArgs {
    /// Input CSV file to clean.
    pub input: PathBuf,

    /// Destination for the cleaned CSV. Defaults to `cleaned_<input name>`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Destination for the text report. Defaults to `<output stem>_report.txt`.
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Output pattern for recognized date columns.
    #[arg(short, long)]
    pub date_format: Option<String>,

    /// Field delimiter of the input file.
    #[arg(long)]
    pub delimiter: Option<char>,

    /// TOML config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Suppress progress logging.
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => {
                let name = self
                    .input
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                PathBuf::from(format!("cleaned_{name}"))
            }
        }
    }

    pub fn report_path(&self, output: &Path) -> PathBuf {
        match &self.report {
            Some(path) => path.clone(),
            None => {
                let stem = output
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                output.with_file_name(format!("{stem}_report.txt"))
            }
        }
    }
}

impl ToValue for CliArgs {
    fn to_value(&self) -> Value<'_> {
        Value::from_debug(self)
    }
}
