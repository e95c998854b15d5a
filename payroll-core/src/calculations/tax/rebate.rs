use rust_decimal::Decimal;

use super::slabs::{MAX_REBATE, REBATE_INCOME_LIMIT};

/// Rebate for taxpayers at or below the rebate income limit.
///
/// The same rule is used for both regimes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RebateCalculator;

impl RebateCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Rebate owed against `tax_before_rebate`. Never exceeds the tax itself.
    pub fn rebate(
        &self,
        net_taxable_income: Decimal,
        tax_before_rebate: Decimal,
    ) -> Decimal {
        if net_taxable_income <= REBATE_INCOME_LIMIT {
            MAX_REBATE.min(tax_before_rebate)
        } else {
            Decimal::ZERO
        }
    }

    pub fn tax_after_rebate(
        &self,
        tax_before_rebate: Decimal,
        rebate: Decimal,
    ) -> Decimal {
        tax_before_rebate - rebate
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn rebate_covers_full_tax_below_cap() {
        let result = RebateCalculator.rebate(dec!(500000), dec!(12500));

        assert_eq!(result, dec!(12500));
    }

    #[test]
    fn rebate_is_capped() {
        let result = RebateCalculator.rebate(dec!(700000), dec!(92500));

        assert_eq!(result, dec!(25000));
    }

    #[test]
    fn rebate_applies_at_limit() {
        let result = RebateCalculator.rebate(dec!(700000), dec!(20000));

        assert_eq!(result, dec!(20000));
    }

    #[test]
    fn rebate_is_zero_just_above_limit() {
        let result = RebateCalculator.rebate(dec!(700001), dec!(20000));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn rebate_is_zero_when_no_tax() {
        let result = RebateCalculator.rebate(dec!(200000), dec!(0));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn tax_after_rebate_subtracts() {
        let result = RebateCalculator.tax_after_rebate(dec!(92500), dec!(25000));

        assert_eq!(result, dec!(67500));
    }
}
