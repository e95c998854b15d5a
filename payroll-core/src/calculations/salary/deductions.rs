use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::bands::{
    ESI_GROSS_CEILING, ESI_RATE, PF_BASIC_CEILING, PF_FLAT_CONTRIBUTION, PF_RATE,
    PT_EXEMPT_LIMIT, PT_HIGH_BAND, PT_LOW_BAND, PT_LOW_BAND_LIMIT,
};
use crate::calculations::common::round_whole;

/// Employee-side statutory deductions for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryDeductions {
    pub provident_fund: Decimal,
    pub employee_state_insurance: Decimal,
    pub professional_tax: Decimal,
    pub total: Decimal,
}

/// Computes PF, ESI and Professional Tax. All three always apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatutoryDeductionCalculator;

impl StatutoryDeductionCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(
        &self,
        earned_basic: Decimal,
        monthly_gross: Decimal,
        earned_gross: Decimal,
    ) -> StatutoryDeductions {
        let provident_fund = self.provident_fund(earned_basic);
        let employee_state_insurance = self.employee_state_insurance(monthly_gross, earned_gross);
        let professional_tax = self.professional_tax(earned_gross);

        StatutoryDeductions {
            provident_fund,
            employee_state_insurance,
            professional_tax,
            total: provident_fund + employee_state_insurance + professional_tax,
        }
    }

    /// Flat contribution once earned Basic reaches the ceiling, 12% below it.
    pub fn provident_fund(
        &self,
        earned_basic: Decimal,
    ) -> Decimal {
        if earned_basic >= PF_BASIC_CEILING {
            PF_FLAT_CONTRIBUTION
        } else {
            round_whole(earned_basic * PF_RATE)
        }
    }

    /// Eligibility follows contracted gross; the amount follows earned gross.
    pub fn employee_state_insurance(
        &self,
        monthly_gross: Decimal,
        earned_gross: Decimal,
    ) -> Decimal {
        if monthly_gross > ESI_GROSS_CEILING {
            Decimal::ZERO
        } else {
            round_whole(earned_gross * ESI_RATE)
        }
    }

    pub fn professional_tax(
        &self,
        earned_gross: Decimal,
    ) -> Decimal {
        if earned_gross <= PT_EXEMPT_LIMIT {
            Decimal::ZERO
        } else if earned_gross <= PT_LOW_BAND_LIMIT {
            PT_LOW_BAND
        } else {
            PT_HIGH_BAND
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // provident_fund tests
    // =========================================================================

    #[test]
    fn provident_fund_flat_at_ceiling() {
        assert_eq!(StatutoryDeductionCalculator.provident_fund(dec!(15000)), dec!(1800));
        assert_eq!(StatutoryDeductionCalculator.provident_fund(dec!(50000)), dec!(1800));
    }

    #[test]
    fn provident_fund_percentage_below_ceiling() {
        assert_eq!(StatutoryDeductionCalculator.provident_fund(dec!(13500)), dec!(1620));
        assert_eq!(StatutoryDeductionCalculator.provident_fund(dec!(14999)), dec!(1800));
    }

    #[test]
    fn provident_fund_rounds_to_whole_units() {
        // 6771 * 0.12 = 812.52
        assert_eq!(StatutoryDeductionCalculator.provident_fund(dec!(6771)), dec!(813));
    }

    // =========================================================================
    // employee_state_insurance tests
    // =========================================================================

    #[test]
    fn esi_applies_at_ceiling() {
        let result = StatutoryDeductionCalculator.employee_state_insurance(dec!(21000), dec!(21000));

        // 157.5 -> 158
        assert_eq!(result, dec!(158));
    }

    #[test]
    fn esi_zero_above_ceiling() {
        let result = StatutoryDeductionCalculator.employee_state_insurance(dec!(21001), dec!(21001));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn esi_charged_on_earned_gross() {
        let result = StatutoryDeductionCalculator.employee_state_insurance(dec!(18000), dec!(9000));

        // 9000 * 0.0075 = 67.5 -> 68
        assert_eq!(result, dec!(68));
    }

    // =========================================================================
    // professional_tax tests
    // =========================================================================

    #[test]
    fn professional_tax_bands() {
        let calc = StatutoryDeductionCalculator;

        assert_eq!(calc.professional_tax(dec!(15000)), dec!(0));
        assert_eq!(calc.professional_tax(dec!(15001)), dec!(150));
        assert_eq!(calc.professional_tax(dec!(20000)), dec!(150));
        assert_eq!(calc.professional_tax(dec!(20001)), dec!(200));
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_sums_all_three() {
        let result = StatutoryDeductionCalculator.calculate(dec!(13500), dec!(15000), dec!(15000));

        assert_eq!(
            result,
            StatutoryDeductions {
                provident_fund: dec!(1620),
                employee_state_insurance: dec!(113),
                professional_tax: dec!(0),
                total: dec!(1733),
            }
        );
    }
}
