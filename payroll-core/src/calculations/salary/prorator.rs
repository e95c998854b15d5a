use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::{round_half_up, round_whole};

/// Scales monthly figures by `payable_days / total_days_in_cycle`.
///
/// Day counts are coerced on construction: a cycle of zero or fewer days
/// becomes one day, negative payable days become zero. Payable days above the
/// cycle length are kept as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prorator {
    total_days_in_cycle: i32,
    payable_days: i32,
}

impl Prorator {
    pub fn new(
        total_days_in_cycle: i32,
        payable_days: i32,
    ) -> Self {
        if total_days_in_cycle <= 0 {
            warn!(total_days_in_cycle, "non-positive cycle length treated as 1 day");
        }
        if payable_days < 0 {
            warn!(payable_days, "negative payable days treated as 0");
        }

        let total_days_in_cycle = total_days_in_cycle.max(1);
        let payable_days = payable_days.max(0);

        if payable_days > total_days_in_cycle {
            warn!(
                payable_days,
                total_days_in_cycle, "payable days exceed cycle length"
            );
        }

        Self {
            total_days_in_cycle,
            payable_days,
        }
    }

    pub fn total_days_in_cycle(&self) -> i32 {
        self.total_days_in_cycle
    }

    pub fn payable_days(&self) -> i32 {
        self.payable_days
    }

    /// Monthly amount per cycle day, to two decimals.
    pub fn per_day(
        &self,
        monthly: Decimal,
    ) -> Decimal {
        round_half_up(monthly / Decimal::from(self.total_days_in_cycle))
    }

    /// Monthly amount scaled to payable days, rounded to a whole unit.
    pub fn prorate(
        &self,
        monthly: Decimal,
    ) -> Decimal {
        // Multiply first so that exact halves survive to the rounding step.
        round_whole(
            monthly * Decimal::from(self.payable_days) / Decimal::from(self.total_days_in_cycle),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn full_cycle_returns_monthly_amount() {
        let prorator = Prorator::new(30, 30);

        assert_eq!(prorator.prorate(dec!(40000)), dec!(40000));
    }

    #[test]
    fn half_cycle_halves_amount() {
        let prorator = Prorator::new(30, 15);

        assert_eq!(prorator.prorate(dec!(40000)), dec!(20000));
    }

    #[test]
    fn prorate_rounds_to_whole_units() {
        let prorator = Prorator::new(31, 10);

        // 25000 / 31 * 10 = 8064.516...
        assert_eq!(prorator.prorate(dec!(25000)), dec!(8065));
    }

    #[test]
    fn prorate_rounds_exact_halves_up() {
        // 10015 * 21 / 30 = 7010.5
        assert_eq!(Prorator::new(30, 21).prorate(dec!(10015)), dec!(7011));
        // 10002 * 21 / 28 = 7501.5
        assert_eq!(Prorator::new(28, 21).prorate(dec!(10002)), dec!(7502));
        // 3 * 1 / 2 = 1.5
        assert_eq!(Prorator::new(2, 1).prorate(dec!(3)), dec!(2));
    }

    #[test]
    fn per_day_rounds_to_two_places() {
        let prorator = Prorator::new(30, 30);

        assert_eq!(prorator.per_day(dec!(40000)), dec!(1333.33));
    }

    #[test]
    fn non_positive_cycle_becomes_one_day() {
        let zero = Prorator::new(0, 1);
        let negative = Prorator::new(-5, 1);

        assert_eq!(zero.total_days_in_cycle(), 1);
        assert_eq!(negative.total_days_in_cycle(), 1);
        assert_eq!(zero.prorate(dec!(1000)), dec!(1000));
    }

    #[test]
    fn negative_payable_days_become_zero() {
        let prorator = Prorator::new(30, -3);

        assert_eq!(prorator.payable_days(), 0);
        assert_eq!(prorator.prorate(dec!(40000)), dec!(0));
    }

    #[test]
    fn payable_days_above_cycle_are_kept() {
        let prorator = Prorator::new(30, 31);

        assert_eq!(prorator.payable_days(), 31);
        assert_eq!(prorator.prorate(dec!(3000)), dec!(3100));
    }
}
