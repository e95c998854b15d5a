use rust_decimal::Decimal;
use thiserror::Error;

/// Input rejected by one of the engines.
///
/// Only non-positive headline amounts are rejected; every other out-of-range
/// input is coerced to a safe value instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("total annual income must be positive, got {0}")]
    NonPositiveAnnualIncome(Decimal),

    #[error("monthly gross salary must be positive, got {0}")]
    NonPositiveMonthlyGross(Decimal),
}
