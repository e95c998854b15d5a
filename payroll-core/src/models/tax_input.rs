use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AgeBracket, TaxContext};

/// Everything the tax engine needs for one computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInput {
    pub age_bracket: AgeBracket,

    /// Gross annual income from all heads. Must be positive.
    pub total_annual_income: Decimal,

    /// When true the standard deduction is taken off before either regime runs.
    pub income_includes_salary: bool,

    /// Chapter VI-A style deductions. Only the Old regime subtracts them;
    /// negative values are treated as zero.
    pub total_deductions: Decimal,

    #[serde(default)]
    pub context: TaxContext,
}

impl TaxInput {
    pub fn new(
        age_bracket: AgeBracket,
        total_annual_income: Decimal,
    ) -> Self {
        Self {
            age_bracket,
            total_annual_income,
            income_includes_salary: false,
            total_deductions: Decimal::ZERO,
            context: TaxContext::default(),
        }
    }
}
