use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::{error, info};

use scour::conf::{Config, delimiter_byte};
use scour::core::{CliArgs, setup_logging};
use scour::io::{csv, report};
use scour::pipeline::{
    CleaningReport, LogObserver, NoopObserver, ProgressObserver, clean,
};

fn main() -> ExitCode {
    setup_logging();
    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Cleaning failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("input file not found: {}", args.input.display());
    }

    let config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => Config::default(),
    };

    let date_format = args
        .date_format
        .clone()
        .unwrap_or_else(|| config.clean.date_format.clone());
    let delimiter = match args.delimiter {
        Some(ch) => delimiter_byte(ch)?,
        None => config.clean.delimiter_byte()?,
    };
    let output = args.output_path();
    let report_path = args.report_path(&output);

    let mut table = csv::load(&args.input, delimiter)
        .with_context(|| format!("loading {}", args.input.display()))?;

    let observer: &dyn ProgressObserver = if args.quiet { &NoopObserver } else { &LogObserver };
    let summary = clean(&mut table, &date_format, observer)?;

    csv::save(&table, &output, delimiter)
        .with_context(|| format!("writing {}", output.display()))?;

    let cleaning_report = CleaningReport::new(summary, &args.input, &output);
    report::write(&cleaning_report, &report_path)
        .with_context(|| format!("writing report {}", report_path.display()))?;

    if !args.quiet {
        info!(
            "Cleaned {} rows -> {} ({} duplicates removed, {} missing values filled)",
            cleaning_report.summary.rows_before,
            cleaning_report.summary.rows_after,
            cleaning_report.summary.duplicates_removed(),
            cleaning_report.summary.missing_filled,
        );
        info!("Output: {}", output.display());
        info!("Report: {}", report_path.display());
    }
    Ok(())
}
