//! Personal income tax under the Old and New regimes.
//!
//! # Pipeline
//!
//! | Step | Stage | Output |
//! |------|-------|--------|
//! | 1 | Standard deduction (salaried only, shared by both regimes) | adjusted income |
//! | 2 | [`RegimeTaxCalculator::net_taxable_income`] | net taxable income |
//! | 3 | [`RegimeTaxCalculator::tax_before_rebate`] | slab tax, with marginal relief for New |
//! | 4 | [`RebateCalculator`] | rebate, tax after rebate |
//! | 5 | [`SurchargeCessApplier`] | surcharge, cess, total tax |
//!
//! Steps 2 to 5 run once per regime on the same adjusted income.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::{AgeBracket, TaxInput, TaxRegime, compute_tax};
//!
//! let mut input = TaxInput::new(AgeBracket::Under60, dec!(1000000));
//! input.income_includes_salary = true;
//!
//! let comparison = compute_tax(&input).unwrap();
//!
//! assert_eq!(comparison.new.net_taxable_income, dec!(925000));
//! assert_eq!(comparison.new.tax_before_rebate, dec!(42500));
//! assert_eq!(comparison.new.total_tax, dec!(44200));
//! assert_eq!(comparison.recommended(), TaxRegime::New);
//! ```

pub mod rebate;
pub mod regime;
pub mod slabs;
pub mod surcharge;

use rust_decimal::Decimal;
use tracing::{debug, warn};

pub use rebate::RebateCalculator;
pub use regime::RegimeTaxCalculator;
pub use surcharge::{Levies, SurchargeCessApplier};

use crate::calculations::common::max;
use crate::error::InvalidInputError;
use crate::models::{AgeBracket, TaxComparison, TaxInput, TaxRegime, TaxResult};
use slabs::STANDARD_DEDUCTION;

/// Runs both regimes over one [`TaxInput`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TaxEngine {
    rebate: RebateCalculator,
    levies: SurchargeCessApplier,
}

impl TaxEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes tax under both regimes.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::NonPositiveAnnualIncome`] when
    /// `total_annual_income` is zero or negative. Negative deductions are
    /// treated as zero rather than rejected.
    pub fn compute(
        &self,
        input: &TaxInput,
    ) -> Result<TaxComparison, InvalidInputError> {
        if input.total_annual_income <= Decimal::ZERO {
            return Err(InvalidInputError::NonPositiveAnnualIncome(
                input.total_annual_income,
            ));
        }

        let deductions = self.sanitize_deductions(input.total_deductions);
        let adjusted_income = self.income_after_standard_deduction(
            input.total_annual_income,
            input.income_includes_salary,
        );

        let [old, new] = TaxRegime::ALL.map(|regime| {
            self.compute_regime(regime, adjusted_income, deductions, input.age_bracket)
        });

        debug!(
            income = %input.total_annual_income,
            age_bracket = %input.age_bracket,
            old_total = %old.total_tax,
            new_total = %new.total_tax,
            "computed tax comparison"
        );

        Ok(TaxComparison { old, new })
    }

    /// Negative deductions are clamped to zero.
    fn sanitize_deductions(
        &self,
        deductions: Decimal,
    ) -> Decimal {
        if deductions < Decimal::ZERO {
            warn!(%deductions, "negative deductions treated as zero");
        }
        max(deductions, Decimal::ZERO)
    }

    /// Takes the standard deduction off once, for salaried income only.
    fn income_after_standard_deduction(
        &self,
        income: Decimal,
        includes_salary: bool,
    ) -> Decimal {
        if includes_salary {
            income - STANDARD_DEDUCTION
        } else {
            income
        }
    }

    fn compute_regime(
        &self,
        regime: TaxRegime,
        adjusted_income: Decimal,
        deductions: Decimal,
        age_bracket: AgeBracket,
    ) -> TaxResult {
        let calculator = RegimeTaxCalculator::new(regime);

        let net_taxable_income = calculator.net_taxable_income(adjusted_income, deductions);
        let tax_before_rebate = calculator.tax_before_rebate(net_taxable_income, age_bracket);

        let rebate = self.rebate.rebate(net_taxable_income, tax_before_rebate);
        let tax_after_rebate = self.rebate.tax_after_rebate(tax_before_rebate, rebate);

        let Levies {
            surcharge,
            cess,
            total_tax,
        } = self.levies.apply(net_taxable_income, tax_after_rebate);

        TaxResult {
            regime,
            net_taxable_income,
            tax_before_rebate,
            rebate,
            tax_after_rebate,
            surcharge,
            cess,
            total_tax,
        }
    }
}

/// Computes tax under both regimes with the default engine.
///
/// # Errors
///
/// See [`TaxEngine::compute`].
pub fn compute_tax(input: &TaxInput) -> Result<TaxComparison, InvalidInputError> {
    TaxEngine::new().compute(input)
}
