//! Rendering of engine results for the terminal.

use std::fmt;

use payroll_core::{SalaryBreakdown, TaxComparison, TaxInput, TaxRegime, TaxResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::format_amount;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Both regimes side by side, with the recommendation.
pub struct TaxReport<'a> {
    pub input: &'a TaxInput,
    pub comparison: &'a TaxComparison,
}

#[derive(Serialize)]
struct TaxReportJson<'a> {
    financial_year: Option<String>,
    residency: &'static str,
    taxpayer: &'static str,
    age_bracket: &'static str,
    total_annual_income: Decimal,
    income_includes_salary: bool,
    total_deductions: Decimal,
    old: &'a TaxResult,
    new: &'a TaxResult,
    recommended: TaxRegime,
    savings: Decimal,
}

impl TaxReport<'_> {
    pub fn render(
        &self,
        format: OutputFormat,
    ) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => {
                let context = &self.input.context;
                serde_json::to_string_pretty(&TaxReportJson {
                    financial_year: context.financial_year.map(|fy| fy.to_string()),
                    residency: context.residency.as_str(),
                    taxpayer: context.taxpayer.as_str(),
                    age_bracket: self.input.age_bracket.as_str(),
                    total_annual_income: self.input.total_annual_income,
                    income_includes_salary: self.input.income_includes_salary,
                    total_deductions: self.input.total_deductions,
                    old: &self.comparison.old,
                    new: &self.comparison.new,
                    recommended: self.comparison.recommended(),
                    savings: self.comparison.savings(),
                })
            }
        }
    }
}

impl fmt::Display for TaxReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let context = &self.input.context;
        let (old, new) = (&self.comparison.old, &self.comparison.new);

        write!(f, "Tax comparison")?;
        if let Some(fy) = context.financial_year {
            write!(f, " for FY {fy}")?;
        }
        writeln!(
            f,
            " ({} {}, age {})",
            context.residency.as_str(),
            context.taxpayer.as_str(),
            self.input.age_bracket
        )?;
        writeln!(
            f,
            "Annual income:      {}",
            format_amount(self.input.total_annual_income)
        )?;
        writeln!(f)?;

        writeln!(f, "{:<20}{:>16}{:>16}", "", "Old regime", "New regime")?;
        let rows = [
            ("Net taxable income", old.net_taxable_income, new.net_taxable_income),
            ("Tax before rebate", old.tax_before_rebate, new.tax_before_rebate),
            ("Rebate", old.rebate, new.rebate),
            ("Tax after rebate", old.tax_after_rebate, new.tax_after_rebate),
            ("Surcharge", old.surcharge, new.surcharge),
            ("Cess", old.cess, new.cess),
            ("Total tax", old.total_tax, new.total_tax),
        ];
        for (label, old_value, new_value) in rows {
            writeln!(
                f,
                "{:<20}{:>16}{:>16}",
                label,
                format_amount(old_value),
                format_amount(new_value)
            )?;
        }
        writeln!(f)?;

        let savings = self.comparison.savings();
        if savings.is_zero() {
            writeln!(
                f,
                "Recommended: {} regime (both regimes cost the same)",
                self.comparison.recommended()
            )
        } else {
            writeln!(
                f,
                "Recommended: {} regime (saves {})",
                self.comparison.recommended(),
                format_amount(savings)
            )
        }
    }
}

/// One cycle's earnings and deductions.
pub struct SalaryReport<'a> {
    pub monthly_gross_salary: Decimal,
    pub breakdown: &'a SalaryBreakdown,
}

#[derive(Serialize)]
struct SalaryReportJson<'a> {
    monthly_gross_salary: Decimal,
    #[serde(flatten)]
    breakdown: &'a SalaryBreakdown,
}

impl SalaryReport<'_> {
    pub fn render(
        &self,
        format: OutputFormat,
    ) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => serde_json::to_string_pretty(&SalaryReportJson {
                monthly_gross_salary: self.monthly_gross_salary,
                breakdown: self.breakdown,
            }),
        }
    }
}

impl fmt::Display for SalaryReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let b = self.breakdown;

        writeln!(
            f,
            "Monthly gross:      {:>12}",
            format_amount(self.monthly_gross_salary)
        )?;
        writeln!(
            f,
            "Payable days:       {:>12}",
            format!("{} / {}", b.payable_days, b.total_days_in_cycle)
        )?;
        writeln!(f, "Per-day gross:      {:>12}", format_amount(b.per_day_gross))?;
        writeln!(f)?;

        writeln!(f, "Earnings")?;
        writeln!(f, "  Basic             {:>12}", format_amount(b.basic))?;
        writeln!(f, "  HRA               {:>12}", format_amount(b.hra))?;
        writeln!(f, "  Medical           {:>12}", format_amount(b.medical_allowance))?;
        writeln!(f, "  Conveyance        {:>12}", format_amount(b.conveyance_allowance))?;
        writeln!(f, "  Special           {:>12}", format_amount(b.special_allowance))?;
        writeln!(f, "  Earned gross      {:>12}", format_amount(b.earned_gross))?;
        writeln!(f)?;

        writeln!(f, "Deductions")?;
        writeln!(f, "  Provident fund    {:>12}", format_amount(b.provident_fund))?;
        writeln!(
            f,
            "  ESI               {:>12}",
            format_amount(b.employee_state_insurance)
        )?;
        writeln!(f, "  Professional tax  {:>12}", format_amount(b.professional_tax))?;
        writeln!(f, "  Total             {:>12}", format_amount(b.total_deductions))?;
        writeln!(f)?;

        writeln!(f, "Net salary:         {:>12}", format_amount(b.net_salary))
    }
}
