//! Monthly salary breakdown into earnings and statutory deductions.
//!
//! # Pipeline
//!
//! | Step | Stage | Output |
//! |------|-------|--------|
//! | 1 | [`Prorator`] | earned gross, per-day gross |
//! | 2 | [`ComponentAllocator`] | Basic, HRA, MA, CA, SA |
//! | 3 | [`StatutoryDeductionCalculator`] | PF, ESI, PT |
//! | 4 | [`NetSalaryComposer`] | net salary |
//!
//! Bands are always picked from the contracted monthly gross, never from the
//! prorated figure, except Professional Tax which bands on earned gross.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::{SalaryInput, compute_salary_breakdown};
//!
//! let breakdown = compute_salary_breakdown(&SalaryInput::new(dec!(40000))).unwrap();
//!
//! assert_eq!(breakdown.basic, dec!(20000));
//! assert_eq!(breakdown.hra, dec!(10000));
//! assert_eq!(breakdown.special_allowance, dec!(7150));
//! assert_eq!(breakdown.total_deductions, dec!(2000));
//! assert_eq!(breakdown.net_salary, dec!(38000));
//! ```

pub mod allocator;
pub mod bands;
pub mod deductions;
pub mod net;
pub mod prorator;

use rust_decimal::Decimal;
use tracing::debug;

pub use allocator::{ComponentAllocator, EarningComponents};
pub use deductions::{StatutoryDeductionCalculator, StatutoryDeductions};
pub use net::NetSalaryComposer;
pub use prorator::Prorator;

use crate::error::InvalidInputError;
use crate::models::{SalaryBreakdown, SalaryInput};

/// Produces a [`SalaryBreakdown`] from a [`SalaryInput`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SalaryEngine {
    deductions: StatutoryDeductionCalculator,
    composer: NetSalaryComposer,
}

impl SalaryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the breakdown for one pay cycle.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::NonPositiveMonthlyGross`] when
    /// `monthly_gross_salary` is zero or negative. Out-of-range day counts are
    /// coerced by [`Prorator::new`] instead of rejected.
    pub fn compute(
        &self,
        input: &SalaryInput,
    ) -> Result<SalaryBreakdown, InvalidInputError> {
        let monthly_gross = input.monthly_gross_salary;
        if monthly_gross <= Decimal::ZERO {
            return Err(InvalidInputError::NonPositiveMonthlyGross(monthly_gross));
        }

        let prorator = Self::prorator_for(input);
        let per_day_gross = prorator.per_day(monthly_gross);
        let earned_gross = prorator.prorate(monthly_gross);

        let EarningComponents {
            basic,
            hra,
            medical_allowance,
            conveyance_allowance,
            special_allowance,
        } = ComponentAllocator::new(prorator).allocate(
            monthly_gross,
            input.basic_override,
            earned_gross,
        );

        let StatutoryDeductions {
            provident_fund,
            employee_state_insurance,
            professional_tax,
            total: total_deductions,
        } = self.deductions.calculate(basic, monthly_gross, earned_gross);

        let net_salary = self.composer.compose(earned_gross, total_deductions);

        debug!(
            %monthly_gross,
            payable_days = prorator.payable_days(),
            total_days_in_cycle = prorator.total_days_in_cycle(),
            %earned_gross,
            %net_salary,
            "computed salary breakdown"
        );

        Ok(SalaryBreakdown {
            total_days_in_cycle: prorator.total_days_in_cycle(),
            payable_days: prorator.payable_days(),
            per_day_gross,
            basic,
            hra,
            medical_allowance,
            conveyance_allowance,
            special_allowance,
            earned_gross,
            provident_fund,
            employee_state_insurance,
            professional_tax,
            total_deductions,
            net_salary,
        })
    }

    /// Missing payable days default to the whole cycle, after the cycle length
    /// itself has been coerced.
    fn prorator_for(input: &SalaryInput) -> Prorator {
        let payable_days = input
            .payable_days
            .unwrap_or(input.total_days_in_cycle.max(1));
        Prorator::new(input.total_days_in_cycle, payable_days)
    }
}

/// Computes a salary breakdown with the default engine.
///
/// # Errors
///
/// See [`SalaryEngine::compute`].
pub fn compute_salary_breakdown(input: &SalaryInput) -> Result<SalaryBreakdown, InvalidInputError> {
    SalaryEngine::new().compute(input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // validation tests
    // =========================================================================

    #[test]
    fn compute_rejects_zero_gross() {
        let result = compute_salary_breakdown(&SalaryInput::new(dec!(0)));

        assert_eq!(
            result,
            Err(InvalidInputError::NonPositiveMonthlyGross(dec!(0)))
        );
    }

    #[test]
    fn compute_rejects_negative_gross() {
        let result = compute_salary_breakdown(&SalaryInput::new(dec!(-100)));

        assert_eq!(
            result,
            Err(InvalidInputError::NonPositiveMonthlyGross(dec!(-100)))
        );
    }

    // =========================================================================
    // full cycle tests
    // =========================================================================

    #[test]
    fn compute_reference_example() {
        let breakdown = compute_salary_breakdown(&SalaryInput::new(dec!(40000))).unwrap();

        assert_eq!(
            breakdown,
            SalaryBreakdown {
                total_days_in_cycle: 30,
                payable_days: 30,
                per_day_gross: dec!(1333.33),
                basic: dec!(20000),
                hra: dec!(10000),
                medical_allowance: dec!(1250),
                conveyance_allowance: dec!(1600),
                special_allowance: dec!(7150),
                earned_gross: dec!(40000),
                provident_fund: dec!(1800),
                employee_state_insurance: dec!(0),
                professional_tax: dec!(200),
                total_deductions: dec!(2000),
                net_salary: dec!(38000),
            }
        );
    }

    #[test]
    fn compute_low_gross_in_esi_bracket() {
        let breakdown = compute_salary_breakdown(&SalaryInput::new(dec!(15000))).unwrap();

        assert_eq!(breakdown.basic, dec!(13500));
        assert_eq!(breakdown.hra, dec!(2025));
        assert_eq!(breakdown.special_allowance, dec!(-525));
        assert_eq!(breakdown.provident_fund, dec!(1620));
        assert_eq!(breakdown.employee_state_insurance, dec!(113));
        assert_eq!(breakdown.professional_tax, dec!(0));
        assert_eq!(breakdown.total_deductions, dec!(1733));
        assert_eq!(breakdown.net_salary, dec!(13267));
    }

    #[test]
    fn compute_at_esi_ceiling() {
        let breakdown = compute_salary_breakdown(&SalaryInput::new(dec!(21000))).unwrap();

        assert_eq!(breakdown.basic, dec!(15000));
        assert_eq!(breakdown.hra, dec!(6000));
        assert_eq!(breakdown.special_allowance, dec!(0));
        assert_eq!(breakdown.provident_fund, dec!(1800));
        assert_eq!(breakdown.employee_state_insurance, dec!(158));
        assert_eq!(breakdown.professional_tax, dec!(200));
    }

    #[test]
    fn compute_with_basic_override() {
        let input = SalaryInput::new(dec!(40000)).with_basic_override(dec!(25000));

        let breakdown = compute_salary_breakdown(&input).unwrap();

        assert_eq!(breakdown.basic, dec!(25000));
        assert_eq!(breakdown.special_allowance, dec!(-350));
        assert_eq!(breakdown.earned_gross, dec!(40000));
    }

    // =========================================================================
    // proration tests
    // =========================================================================

    #[test]
    fn compute_half_cycle() {
        let input = SalaryInput::new(dec!(40000)).with_days(30, 15);

        let breakdown = compute_salary_breakdown(&input).unwrap();

        assert_eq!(breakdown.earned_gross, dec!(20000));
        assert_eq!(breakdown.basic, dec!(10000));
        assert_eq!(breakdown.hra, dec!(2500));
        assert_eq!(breakdown.medical_allowance, dec!(625));
        assert_eq!(breakdown.conveyance_allowance, dec!(800));
        assert_eq!(breakdown.special_allowance, dec!(6075));
        assert_eq!(breakdown.provident_fund, dec!(1200));
        assert_eq!(breakdown.professional_tax, dec!(150));
        assert_eq!(breakdown.net_salary, dec!(18650));
    }

    #[test]
    fn compute_zero_payable_days() {
        let input = SalaryInput::new(dec!(40000)).with_days(30, 0);

        let breakdown = compute_salary_breakdown(&input).unwrap();

        assert_eq!(breakdown.earned_gross, dec!(0));
        assert_eq!(breakdown.special_allowance, dec!(0));
        assert_eq!(breakdown.total_deductions, dec!(0));
        assert_eq!(breakdown.net_salary, dec!(0));
    }

    #[test]
    fn compute_negative_payable_days_treated_as_zero() {
        let input = SalaryInput::new(dec!(40000)).with_days(30, -4);

        let breakdown = compute_salary_breakdown(&input).unwrap();

        assert_eq!(breakdown.payable_days, 0);
        assert_eq!(breakdown.earned_gross, dec!(0));
    }

    #[test]
    fn compute_zero_cycle_defaults_payable_to_one_day() {
        let input = SalaryInput {
            total_days_in_cycle: 0,
            ..SalaryInput::new(dec!(40000))
        };

        let breakdown = compute_salary_breakdown(&input).unwrap();

        assert_eq!(breakdown.total_days_in_cycle, 1);
        assert_eq!(breakdown.payable_days, 1);
        assert_eq!(breakdown.earned_gross, dec!(40000));
    }

    #[test]
    fn compute_single_payable_day() {
        let input = SalaryInput::new(dec!(40000)).with_days(30, 1);

        let breakdown = compute_salary_breakdown(&input).unwrap();

        assert_eq!(breakdown.earned_gross, dec!(1333));
        assert_eq!(breakdown.basic, dec!(667));
        // 667 * 0.50 / 30
        assert_eq!(breakdown.hra, dec!(11));
        assert_eq!(breakdown.medical_allowance, dec!(42));
        assert_eq!(breakdown.conveyance_allowance, dec!(53));
        assert_eq!(breakdown.special_allowance, dec!(560));
        assert_eq!(breakdown.provident_fund, dec!(80));
        assert_eq!(breakdown.net_salary, dec!(1253));
    }

    #[test]
    fn compute_rounds_half_earned_gross_up() {
        // 10015 * 21 / 30 = 7010.5
        let input = SalaryInput::new(dec!(10015)).with_days(30, 21);

        let breakdown = compute_salary_breakdown(&input).unwrap();

        assert_eq!(
            breakdown,
            SalaryBreakdown {
                total_days_in_cycle: 30,
                payable_days: 21,
                per_day_gross: dec!(333.83),
                basic: dec!(9450),
                hra: dec!(992),
                medical_allowance: dec!(0),
                conveyance_allowance: dec!(0),
                special_allowance: dec!(-3431),
                earned_gross: dec!(7011),
                provident_fund: dec!(1134),
                employee_state_insurance: dec!(53),
                professional_tax: dec!(0),
                total_deductions: dec!(1187),
                net_salary: dec!(5824),
            }
        );
    }

    #[test]
    fn compute_rounds_half_hra_up() {
        let input = SalaryInput::new(dec!(31000)).with_days(30, 3);

        let breakdown = compute_salary_breakdown(&input).unwrap();

        assert_eq!(breakdown.earned_gross, dec!(3100));
        assert_eq!(breakdown.basic, dec!(1550));
        // 1550 * 0.50 * 3 / 30 = 77.5
        assert_eq!(breakdown.hra, dec!(78));
        assert_eq!(breakdown.medical_allowance, dec!(125));
        assert_eq!(breakdown.conveyance_allowance, dec!(160));
        assert_eq!(breakdown.special_allowance, dec!(1187));
        assert_eq!(breakdown.provident_fund, dec!(186));
        assert_eq!(breakdown.net_salary, dec!(2914));
    }

    #[test]
    fn compute_deductions_can_exceed_earnings() {
        let input = SalaryInput::new(dec!(30000))
            .with_days(30, 1)
            .with_basic_override(dec!(450000));

        let breakdown = compute_salary_breakdown(&input).unwrap();

        assert_eq!(breakdown.earned_gross, dec!(1000));
        assert_eq!(breakdown.basic, dec!(15000));
        assert_eq!(breakdown.special_allowance, dec!(-14245));
        assert_eq!(breakdown.provident_fund, dec!(1800));
        assert_eq!(breakdown.net_salary, dec!(-800));
    }

    #[test]
    fn compute_is_deterministic() {
        let input = SalaryInput::new(dec!(27345.67))
            .with_days(31, 17)
            .with_basic_override(dec!(14000));

        assert_eq!(
            compute_salary_breakdown(&input),
            compute_salary_breakdown(&input)
        );
    }
}
