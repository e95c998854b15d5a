//! Pre-rebate tax under a single regime.

use rust_decimal::Decimal;
use tracing::debug;

use super::slabs::{
    MARGINAL_RELIEF_CEILING, MARGINAL_RELIEF_THRESHOLD, NEW_REGIME, OLD_REGIME_60_TO_80,
    OLD_REGIME_ABOVE_80, OLD_REGIME_UNDER_60,
};
use crate::calculations::common::{max, round_whole};
use crate::models::{AgeBracket, TaxRegime, TaxSlab};

/// Prices net taxable income against one regime's slab table.
///
/// The Old regime picks its table by age bracket and lets the taxpayer's
/// deductions reduce taxable income. The New regime is age independent,
/// ignores deductions, and caps tax just above the rebate limit through
/// marginal relief.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegimeTaxCalculator {
    regime: TaxRegime,
}

impl RegimeTaxCalculator {
    pub fn new(regime: TaxRegime) -> Self {
        Self { regime }
    }

    /// The slab table this regime applies for the given age bracket.
    pub fn slabs(
        &self,
        age_bracket: AgeBracket,
    ) -> &'static [TaxSlab] {
        match (self.regime, age_bracket) {
            (TaxRegime::Old, AgeBracket::Under60) => OLD_REGIME_UNDER_60,
            (TaxRegime::Old, AgeBracket::From60To80) => OLD_REGIME_60_TO_80,
            (TaxRegime::Old, AgeBracket::Above80) => OLD_REGIME_ABOVE_80,
            (TaxRegime::New, _) => NEW_REGIME,
        }
    }

    /// Net taxable income for this regime, floored at zero.
    ///
    /// `income` has already had the standard deduction taken off (when it
    /// applies); `deductions` must already be non-negative.
    pub fn net_taxable_income(
        &self,
        income: Decimal,
        deductions: Decimal,
    ) -> Decimal {
        let taxable = match self.regime {
            TaxRegime::Old => income - deductions,
            TaxRegime::New => income,
        };
        max(taxable, Decimal::ZERO)
    }

    /// Tax before rebate, rounded to the nearest whole unit.
    pub fn tax_before_rebate(
        &self,
        net_taxable_income: Decimal,
        age_bracket: AgeBracket,
    ) -> Decimal {
        let slab_tax = slab_tax(net_taxable_income, self.slabs(age_bracket));

        let tax = match self.regime {
            TaxRegime::Old => slab_tax,
            TaxRegime::New => apply_marginal_relief(net_taxable_income, slab_tax),
        };

        round_whole(tax)
    }
}

/// Tax from the band containing `income`; zero when no band does, which only
/// happens for zero income.
fn slab_tax(
    income: Decimal,
    slabs: &[TaxSlab],
) -> Decimal {
    if income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    slabs
        .iter()
        .find(|s| s.contains(income))
        .map_or(Decimal::ZERO, |s| s.tax_on(income))
}

/// Keeps tax from exceeding the income earned above the relief threshold.
fn apply_marginal_relief(
    income: Decimal,
    slab_tax: Decimal,
) -> Decimal {
    if income <= MARGINAL_RELIEF_THRESHOLD || income > MARGINAL_RELIEF_CEILING {
        return slab_tax;
    }

    let excess = income - MARGINAL_RELIEF_THRESHOLD;
    if slab_tax > excess {
        debug!(%income, %slab_tax, relief_capped_at = %excess, "marginal relief applied");
        excess
    } else {
        slab_tax
    }
}
