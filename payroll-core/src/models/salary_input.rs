use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cycle length used when the caller does not supply one.
pub const DEFAULT_DAYS_IN_CYCLE: i32 = 30;

/// Input for one month's salary breakdown.
///
/// Day counts are signed so that out-of-range values can be coerced the same
/// way the payroll screens always have: a cycle of zero or fewer days becomes
/// one day and negative payable days become zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Contracted gross for a full cycle. Must be positive.
    pub monthly_gross_salary: Decimal,

    #[serde(default = "default_days_in_cycle")]
    pub total_days_in_cycle: i32,

    /// Days actually payable. `None` means the whole cycle.
    #[serde(default)]
    pub payable_days: Option<i32>,

    /// Replaces the banded Basic when present and positive.
    #[serde(default)]
    pub basic_override: Option<Decimal>,
}

fn default_days_in_cycle() -> i32 {
    DEFAULT_DAYS_IN_CYCLE
}

impl SalaryInput {
    /// A full-cycle input with the default 30-day cycle and no Basic override.
    pub fn new(monthly_gross_salary: Decimal) -> Self {
        Self {
            monthly_gross_salary,
            total_days_in_cycle: DEFAULT_DAYS_IN_CYCLE,
            payable_days: None,
            basic_override: None,
        }
    }

    pub fn with_days(
        mut self,
        total_days_in_cycle: i32,
        payable_days: i32,
    ) -> Self {
        self.total_days_in_cycle = total_days_in_cycle;
        self.payable_days = Some(payable_days);
        self
    }

    pub fn with_basic_override(
        mut self,
        basic: Decimal,
    ) -> Self {
        self.basic_override = Some(basic);
        self
    }
}
