use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Parser};
use payroll_data::{BatchLoader, BatchReport, BatchRunner, write_csv};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Compute salary breakdowns or tax comparisons for every row of a CSV file.
///
/// Results are written as CSV to `--output`, or to stdout when omitted.
/// Rows that fail to parse or compute are logged and skipped; the process
/// exits non-zero if any row was skipped.
#[derive(Parser, Debug)]
#[command(name = "payroll-batch")]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["salaries", "tax"])))]
struct Args {
    /// CSV with employee_id, monthly_gross_salary and optional
    /// total_days_in_cycle, payable_days, basic_override columns
    #[arg(long)]
    salaries: Option<PathBuf>,

    /// CSV with taxpayer_id, age_bracket, total_annual_income,
    /// income_includes_salary and optional total_deductions columns
    #[arg(long)]
    tax: Option<PathBuf>,

    /// Where to write the result CSV
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn open(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("Failed to open: {}", path.display()))
}

fn emit<T: Serialize>(
    report: &BatchReport<T>,
    output: Option<&PathBuf>,
) -> Result<()> {
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create: {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    write_csv(writer, &report.rows).context("Failed to write results")?;

    if let Some(path) = output {
        info!("Wrote {} rows to {}", report.rows.len(), path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let failed = if let Some(path) = &args.salaries {
        info!("Loading salaries from: {}", path.display());
        let loaded = BatchLoader::parse_salaries(open(path)?)
            .with_context(|| format!("Failed to parse CSV: {}", path.display()))?;
        let report = BatchRunner::run_salaries(loaded);
        emit(&report, args.output.as_ref())?;
        report.failures.len()
    } else if let Some(path) = &args.tax {
        info!("Loading tax inputs from: {}", path.display());
        let loaded = BatchLoader::parse_taxes(open(path)?)
            .with_context(|| format!("Failed to parse CSV: {}", path.display()))?;
        let report = BatchRunner::run_taxes(loaded);
        emit(&report, args.output.as_ref())?;
        report.failures.len()
    } else {
        bail!("either --salaries or --tax is required");
    };

    if failed > 0 {
        bail!("{failed} row(s) could not be processed");
    }
    Ok(())
}
