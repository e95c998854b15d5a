use rust_decimal::Decimal;

/// Nets earned gross against total deductions. The result is not floored, so
/// deductions larger than earnings give a negative net salary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetSalaryComposer;

impl NetSalaryComposer {
    pub fn new() -> Self {
        Self
    }

    pub fn compose(
        &self,
        earned_gross: Decimal,
        total_deductions: Decimal,
    ) -> Decimal {
        earned_gross - total_deductions
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn compose_subtracts_deductions() {
        assert_eq!(NetSalaryComposer.compose(dec!(40000), dec!(2000)), dec!(38000));
    }

    #[test]
    fn compose_allows_negative_net() {
        assert_eq!(NetSalaryComposer.compose(dec!(100), dec!(1800)), dec!(-1700));
    }
}
