use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Earned components and statutory deductions for one pay cycle.
///
/// Invariants, all exact:
/// - `earned_gross == basic + hra + medical_allowance + conveyance_allowance + special_allowance`
/// - `total_deductions == provident_fund + employee_state_insurance + professional_tax`
/// - `net_salary == earned_gross - total_deductions`
///
/// `special_allowance` is the balancing term and can be negative when the
/// fixed components exceed what was earned. `net_salary` is not floored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Cycle length after coercion.
    pub total_days_in_cycle: i32,
    /// Payable days after coercion.
    pub payable_days: i32,
    /// Gross per cycle day, to two decimals.
    pub per_day_gross: Decimal,

    // Earnings
    pub basic: Decimal,
    pub hra: Decimal,
    pub medical_allowance: Decimal,
    pub conveyance_allowance: Decimal,
    pub special_allowance: Decimal,
    pub earned_gross: Decimal,

    // Deductions
    pub provident_fund: Decimal,
    pub employee_state_insurance: Decimal,
    pub professional_tax: Decimal,
    pub total_deductions: Decimal,

    pub net_salary: Decimal,
}
