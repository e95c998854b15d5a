//! Runs loaded records through the engines and shapes flat output rows.

use std::io::Write;

use payroll_core::{SalaryBreakdown, TaxRegime, TaxResult, compute_salary_breakdown, compute_tax};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::loader::{BatchLoadError, Loaded, RowFailure, SalaryRecord, TaxRecord};

/// One output row per employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryOutputRow {
    pub employee_id: String,
    pub total_days_in_cycle: i32,
    pub payable_days: i32,
    pub per_day_gross: Decimal,
    pub basic: Decimal,
    pub hra: Decimal,
    pub medical_allowance: Decimal,
    pub conveyance_allowance: Decimal,
    pub special_allowance: Decimal,
    pub earned_gross: Decimal,
    pub provident_fund: Decimal,
    pub employee_state_insurance: Decimal,
    pub professional_tax: Decimal,
    pub total_deductions: Decimal,
    pub net_salary: Decimal,
}

impl SalaryOutputRow {
    fn new(
        employee_id: String,
        b: SalaryBreakdown,
    ) -> Self {
        Self {
            employee_id,
            total_days_in_cycle: b.total_days_in_cycle,
            payable_days: b.payable_days,
            per_day_gross: b.per_day_gross,
            basic: b.basic,
            hra: b.hra,
            medical_allowance: b.medical_allowance,
            conveyance_allowance: b.conveyance_allowance,
            special_allowance: b.special_allowance,
            earned_gross: b.earned_gross,
            provident_fund: b.provident_fund,
            employee_state_insurance: b.employee_state_insurance,
            professional_tax: b.professional_tax,
            total_deductions: b.total_deductions,
            net_salary: b.net_salary,
        }
    }
}

/// One output row per taxpayer and regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxOutputRow {
    pub taxpayer_id: String,
    pub regime: TaxRegime,
    pub net_taxable_income: Decimal,
    pub tax_before_rebate: Decimal,
    pub rebate: Decimal,
    pub tax_after_rebate: Decimal,
    pub surcharge: Decimal,
    pub cess: Decimal,
    pub total_tax: Decimal,
    pub recommended: bool,
}

impl TaxOutputRow {
    fn new(
        taxpayer_id: String,
        r: TaxResult,
        recommended: TaxRegime,
    ) -> Self {
        Self {
            taxpayer_id,
            regime: r.regime,
            net_taxable_income: r.net_taxable_income,
            tax_before_rebate: r.tax_before_rebate,
            rebate: r.rebate,
            tax_after_rebate: r.tax_after_rebate,
            surcharge: r.surcharge,
            cess: r.cess,
            total_tax: r.total_tax,
            recommended: r.regime == recommended,
        }
    }
}

/// Computed rows plus every row that failed along the way.
#[derive(Debug)]
pub struct BatchReport<T> {
    pub rows: Vec<T>,
    pub failures: Vec<RowFailure>,
}

impl<T> BatchReport<T> {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

pub struct BatchRunner;

impl BatchRunner {
    /// Computes a breakdown for every loaded salary record.
    ///
    /// Load failures carry through; records the engine rejects are added to
    /// them. Failures are sorted by row number.
    pub fn run_salaries(loaded: Loaded<SalaryRecord>) -> BatchReport<SalaryOutputRow> {
        let mut failures = loaded.failures;
        let mut rows = Vec::with_capacity(loaded.records.len());

        for (row, record) in loaded.records {
            match compute_salary_breakdown(&record.to_input()) {
                Ok(breakdown) => rows.push(SalaryOutputRow::new(record.employee_id, breakdown)),
                Err(err) => failures.push(RowFailure {
                    row,
                    error: err.into(),
                }),
            }
        }

        Self::finish(rows, failures)
    }

    /// Computes both regimes for every loaded tax record, two rows each.
    pub fn run_taxes(loaded: Loaded<TaxRecord>) -> BatchReport<TaxOutputRow> {
        let mut failures = loaded.failures;
        let mut rows = Vec::with_capacity(loaded.records.len() * 2);

        for (row, record) in loaded.records {
            let comparison = record
                .to_input()
                .and_then(|input| compute_tax(&input).map_err(BatchLoadError::from));

            match comparison {
                Ok(comparison) => {
                    let recommended = comparison.recommended();
                    rows.push(TaxOutputRow::new(
                        record.taxpayer_id.clone(),
                        comparison.old,
                        recommended,
                    ));
                    rows.push(TaxOutputRow::new(
                        record.taxpayer_id,
                        comparison.new,
                        recommended,
                    ));
                }
                Err(error) => failures.push(RowFailure { row, error }),
            }
        }

        Self::finish(rows, failures)
    }

    fn finish<T>(
        rows: Vec<T>,
        mut failures: Vec<RowFailure>,
    ) -> BatchReport<T> {
        failures.sort_by_key(|f| f.row);
        for failure in &failures {
            warn!(row = failure.row, error = %failure.error, "row skipped");
        }
        debug!(computed = rows.len(), failed = failures.len(), "batch finished");

        BatchReport { rows, failures }
    }
}

/// Writes rows as CSV with a header line.
pub fn write_csv<W: Write, T: Serialize>(
    writer: W,
    rows: &[T],
) -> Result<(), BatchLoadError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
