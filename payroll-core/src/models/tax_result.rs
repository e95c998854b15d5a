use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The two alternative slab rule sets a taxpayer chooses between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxRegime {
    Old,
    New,
}

impl TaxRegime {
    pub const ALL: [TaxRegime; 2] = [TaxRegime::Old, TaxRegime::New];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Old => "Old",
            Self::New => "New",
        }
    }
}

impl std::fmt::Display for TaxRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tax liability under one regime. Every amount is a whole currency unit.
///
/// `total_tax == tax_after_rebate + surcharge + cess` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub regime: TaxRegime,
    pub net_taxable_income: Decimal,
    pub tax_before_rebate: Decimal,
    pub rebate: Decimal,
    pub tax_after_rebate: Decimal,
    pub surcharge: Decimal,
    pub cess: Decimal,
    pub total_tax: Decimal,
}

/// Both regimes computed on the same input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComparison {
    pub old: TaxResult,
    pub new: TaxResult,
}

impl TaxComparison {
    pub fn get(
        &self,
        regime: TaxRegime,
    ) -> &TaxResult {
        match regime {
            TaxRegime::Old => &self.old,
            TaxRegime::New => &self.new,
        }
    }

    /// The regime with the lower total tax. A tie goes to the New regime,
    /// which is the default when a taxpayer does not opt out.
    pub fn recommended(&self) -> TaxRegime {
        if self.old.total_tax < self.new.total_tax {
            TaxRegime::Old
        } else {
            TaxRegime::New
        }
    }

    /// How much the recommended regime saves over the other one.
    pub fn savings(&self) -> Decimal {
        (self.old.total_tax - self.new.total_tax).abs()
    }
}
