use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{debug, info};

use payroll_cli::config::CONFIG_ENV_VAR;
use payroll_cli::report::{SalaryReport, TaxReport};
use payroll_cli::utils::{
    parse_age_bracket, parse_amount, parse_financial_year, parse_residency, parse_taxpayer,
};
use payroll_cli::{AppConfig, OutputFormat, logging};
use payroll_core::{
    AgeBracket, FinancialYear, ResidencyStatus, SalaryInput, TaxContext, TaxInput, TaxpayerType,
    compute_salary_breakdown, compute_tax,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Income tax and monthly salary calculator.
///
/// `tax` compares the Old and New regimes for an annual income; `salary`
/// splits a monthly gross into earnings and statutory deductions.
#[derive(Debug, Parser)]
#[command(name = "payroll", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, env = CONFIG_ENV_VAR, global = true)]
    config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `payroll_core=trace`.
    /// Overrides the config file and `RUST_LOG`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Do not print log records to stderr.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Report format.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute tax under both regimes and recommend one.
    Tax(TaxArgs),
    /// Break a monthly gross salary down for one pay cycle.
    Salary(SalaryArgs),
}

#[derive(Debug, Args)]
struct TaxArgs {
    /// Total annual income. Commas are allowed.
    #[arg(long, value_parser = parse_amount, allow_negative_numbers = true)]
    income: Decimal,

    /// Deductions claimed; only the Old regime uses them.
    #[arg(long, value_parser = parse_amount, allow_negative_numbers = true)]
    deductions: Option<Decimal>,

    /// Age bracket: U60, 60-80 or 80+.
    #[arg(long, value_parser = parse_age_bracket)]
    age: Option<AgeBracket>,

    /// The income includes salary, so the standard deduction applies.
    #[arg(long, overrides_with = "no_salaried")]
    salaried: bool,

    /// The income does not include salary.
    #[arg(long, overrides_with = "salaried")]
    no_salaried: bool,

    /// Financial year, e.g. 2024-25. Shown in the report only.
    #[arg(long, value_parser = parse_financial_year)]
    fy: Option<FinancialYear>,

    /// resident or non-resident. Shown in the report only.
    #[arg(long, value_parser = parse_residency)]
    residency: Option<ResidencyStatus>,

    /// individual or huf. Shown in the report only.
    #[arg(long, value_parser = parse_taxpayer)]
    taxpayer: Option<TaxpayerType>,
}

#[derive(Debug, Args)]
struct SalaryArgs {
    /// Contracted monthly gross salary. Commas are allowed.
    #[arg(long, value_parser = parse_amount, allow_negative_numbers = true)]
    gross: Decimal,

    /// Days in the pay cycle.
    #[arg(long, allow_negative_numbers = true)]
    days: Option<i32>,

    /// Days actually payable; defaults to the whole cycle.
    #[arg(long, allow_negative_numbers = true)]
    payable: Option<i32>,

    /// Monthly Basic to use instead of the banded percentage.
    #[arg(long, value_parser = parse_amount)]
    basic: Option<Decimal>,
}

impl TaxArgs {
    fn salaried(
        &self,
        default: bool,
    ) -> bool {
        if self.salaried {
            true
        } else if self.no_salaried {
            false
        } else {
            default
        }
    }

    fn to_input(
        &self,
        config: &AppConfig,
    ) -> TaxInput {
        let mut input = TaxInput::new(
            self.age.unwrap_or(config.tax.age_bracket),
            self.income,
        );
        input.income_includes_salary = self.salaried(config.tax.income_includes_salary);
        input.total_deductions = self.deductions.unwrap_or(Decimal::ZERO);
        input.context = TaxContext {
            financial_year: self.fy,
            residency: self.residency.unwrap_or_default(),
            taxpayer: self.taxpayer.unwrap_or_default(),
        };
        input
    }
}

impl SalaryArgs {
    fn to_input(
        &self,
        config: &AppConfig,
    ) -> SalaryInput {
        SalaryInput {
            monthly_gross_salary: self.gross,
            total_days_in_cycle: self.days.unwrap_or(config.salary.total_days_in_cycle),
            payable_days: self.payable,
            basic_override: self.basic,
        }
    }
}

// ─── commands ────────────────────────────────────────────────────────────────

fn run_tax(
    args: &TaxArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let input = args.to_input(config);
    debug!(?input, "tax input");

    let comparison = compute_tax(&input).context("Cannot compute tax")?;
    info!(
        recommended = %comparison.recommended(),
        savings = %comparison.savings(),
        "tax computed"
    );

    TaxReport {
        input: &input,
        comparison: &comparison,
    }
    .render(format)
    .context("Failed to render tax report")
}

fn run_salary(
    args: &SalaryArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let input = args.to_input(config);
    debug!(?input, "salary input");

    let breakdown = compute_salary_breakdown(&input).context("Cannot compute salary")?;
    info!(net_salary = %breakdown.net_salary, "salary computed");

    SalaryReport {
        monthly_gross_salary: input.monthly_gross_salary,
        breakdown: &breakdown,
    }
    .render(format)
    .context("Failed to render salary report")
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    logging::init_logging(&config.logging.level);
    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if cli.quiet {
        logging::set_stderr_enabled(false)?;
    }
    if let Some(path) = cli.log_file.as_ref().or(config.logging.file.as_ref()) {
        logging::enable_file_logging(path)?;
    }

    let format = cli.format.unwrap_or(config.output.format);
    let report = match &cli.command {
        Command::Tax(args) => run_tax(args, &config, format)?,
        Command::Salary(args) => run_salary(args, &config, format)?,
    };

    println!("{}", report.trim_end());
    Ok(())
}
