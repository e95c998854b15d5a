use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::slabs::{CESS_RATE, SURCHARGE_TIERS};
use crate::calculations::common::round_whole;

/// Surcharge, cess and the resulting payable tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Levies {
    pub surcharge: Decimal,
    pub cess: Decimal,
    pub total_tax: Decimal,
}

/// Adds the income-tiered surcharge and then the flat cess to tax after rebate.
///
/// Surcharge, cess and the total are each rounded to a whole unit as they
/// are produced. Rounding only the final total gives different answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurchargeCessApplier;

impl SurchargeCessApplier {
    pub fn new() -> Self {
        Self
    }

    /// Surcharge rate for the tier `net_taxable_income` falls into.
    pub fn surcharge_rate(
        &self,
        net_taxable_income: Decimal,
    ) -> Decimal {
        SURCHARGE_TIERS
            .iter()
            .find(|tier| net_taxable_income > tier.above)
            .map_or(Decimal::ZERO, |tier| tier.rate)
    }

    pub fn apply(
        &self,
        net_taxable_income: Decimal,
        tax_after_rebate: Decimal,
    ) -> Levies {
        let surcharge = round_whole(tax_after_rebate * self.surcharge_rate(net_taxable_income));
        let cess = round_whole((tax_after_rebate + surcharge) * CESS_RATE);
        let total_tax = round_whole(tax_after_rebate + surcharge + cess);

        Levies {
            surcharge,
            cess,
            total_tax,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // surcharge_rate tests
    // =========================================================================

    #[test]
    fn no_surcharge_up_to_fifty_lakh() {
        assert_eq!(SurchargeCessApplier.surcharge_rate(dec!(5000000)), dec!(0));
    }

    #[test]
    fn surcharge_tiers_are_exclusive_below_inclusive_above() {
        let applier = SurchargeCessApplier;

        assert_eq!(applier.surcharge_rate(dec!(5000001)), dec!(0.10));
        assert_eq!(applier.surcharge_rate(dec!(10000000)), dec!(0.10));
        assert_eq!(applier.surcharge_rate(dec!(10000001)), dec!(0.15));
        assert_eq!(applier.surcharge_rate(dec!(20000000)), dec!(0.15));
        assert_eq!(applier.surcharge_rate(dec!(20000001)), dec!(0.25));
        assert_eq!(applier.surcharge_rate(dec!(50000000)), dec!(0.25));
        assert_eq!(applier.surcharge_rate(dec!(50000001)), dec!(0.37));
    }

    // =========================================================================
    // apply tests
    // =========================================================================

    #[test]
    fn apply_adds_cess_only_below_surcharge_threshold() {
        let levies = SurchargeCessApplier.apply(dec!(925000), dec!(42500));

        assert_eq!(
            levies,
            Levies {
                surcharge: dec!(0),
                cess: dec!(1700),
                total_tax: dec!(44200),
            }
        );
    }

    #[test]
    fn apply_adds_surcharge_then_cess() {
        // New regime at 60 lakh: 140000 + 4500000 * 0.30 = 1490000
        let levies = SurchargeCessApplier.apply(dec!(6000000), dec!(1490000));

        assert_eq!(levies.surcharge, dec!(149000));
        assert_eq!(levies.cess, dec!(65560));
        assert_eq!(levies.total_tax, dec!(1704560));
    }

    #[test]
    fn apply_rounds_cess_independently() {
        // 1012 * 0.04 = 40.48 -> 40
        let levies = SurchargeCessApplier.apply(dec!(720000), dec!(1012));

        assert_eq!(levies.cess, dec!(40));
        assert_eq!(levies.total_tax, dec!(1052));
    }

    #[test]
    fn apply_zero_tax_stays_zero() {
        let levies = SurchargeCessApplier.apply(dec!(400000), dec!(0));

        assert_eq!(levies.total_tax, dec!(0));
    }
}
