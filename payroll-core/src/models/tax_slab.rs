use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One progressive band of a slab table.
///
/// Income in `(min_income, max_income]` is taxed as
/// `base_tax + (income - min_income) * rate`, where `base_tax` is the
/// cumulative tax of every lower band. The top band has no `max_income`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
    pub base_tax: Decimal,
}

impl TaxSlab {
    /// Whether `income` falls inside this band.
    pub fn contains(&self, income: Decimal) -> bool {
        income > self.min_income && self.max_income.is_none_or(|max| income <= max)
    }

    /// Tax owed on `income`, assuming it falls inside this band. Not rounded.
    pub fn tax_on(&self, income: Decimal) -> Decimal {
        self.base_tax + (income - self.min_income) * self.rate
    }
}
