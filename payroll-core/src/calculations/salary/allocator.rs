use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::bands::{
    BASIC_FIXED_LOW, BASIC_FIXED_MID, BASIC_LOW_BAND_LIMIT, BASIC_MID_BAND_LIMIT,
    BASIC_SHARE_OF_GROSS, CONVEYANCE_ALLOWANCE, FIXED_ALLOWANCE_GROSS_FLOOR, HRA_ESI_EDGE,
    HRA_HIGH_BAND_FLOOR, HRA_LOW_BAND_LIMIT, HRA_RATE_HIGH, HRA_RATE_LOW, HRA_RATE_LOW_ABOVE_EDGE,
    HRA_RATE_MID, HRA_RATE_MID_BELOW_EDGE, MEDICAL_ALLOWANCE,
};
use super::prorator::Prorator;
use crate::calculations::common::round_whole;

/// Earned salary components for one cycle.
///
/// `special_allowance` balances the other four against earned gross and may
/// be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningComponents {
    pub basic: Decimal,
    pub hra: Decimal,
    pub medical_allowance: Decimal,
    pub conveyance_allowance: Decimal,
    pub special_allowance: Decimal,
}

/// Splits earned gross into Basic, HRA, MA, CA and SA.
///
/// Every band is chosen from the contracted monthly gross; amounts are then
/// prorated to payable days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentAllocator {
    prorator: Prorator,
}

impl ComponentAllocator {
    pub fn new(prorator: Prorator) -> Self {
        Self { prorator }
    }

    pub fn allocate(
        &self,
        monthly_gross: Decimal,
        basic_override: Option<Decimal>,
        earned_gross: Decimal,
    ) -> EarningComponents {
        let basic = self.prorator.prorate(self.basic_base(monthly_gross, basic_override));
        let hra = self.hra(basic, monthly_gross);
        let (medical_allowance, conveyance_allowance) = self.fixed_allowances(monthly_gross);
        let special_allowance = round_whole(
            earned_gross - (basic + hra + medical_allowance + conveyance_allowance),
        );

        EarningComponents {
            basic,
            hra,
            medical_allowance,
            conveyance_allowance,
            special_allowance,
        }
    }

    /// Monthly Basic before proration.
    pub fn basic_base(
        &self,
        monthly_gross: Decimal,
        basic_override: Option<Decimal>,
    ) -> Decimal {
        if let Some(basic) = basic_override.filter(|b| *b > Decimal::ZERO) {
            return basic;
        }

        if monthly_gross < BASIC_LOW_BAND_LIMIT {
            BASIC_FIXED_LOW
        } else if monthly_gross <= BASIC_MID_BAND_LIMIT {
            BASIC_FIXED_MID
        } else {
            monthly_gross * BASIC_SHARE_OF_GROSS
        }
    }

    /// HRA as a share of Basic.
    pub fn hra_rate(
        &self,
        monthly_gross: Decimal,
    ) -> Decimal {
        if monthly_gross <= HRA_LOW_BAND_LIMIT {
            // The inner check always passes while the outer limit sits below
            // the edge, so the 10% rate is currently dead.
            if monthly_gross <= HRA_ESI_EDGE {
                HRA_RATE_LOW
            } else {
                HRA_RATE_LOW_ABOVE_EDGE
            }
        } else if monthly_gross > HRA_HIGH_BAND_FLOOR {
            HRA_RATE_HIGH
        } else if monthly_gross <= HRA_ESI_EDGE {
            HRA_RATE_MID_BELOW_EDGE
        } else {
            HRA_RATE_MID
        }
    }

    /// HRA is prorated from the already prorated Basic, so a partial cycle
    /// scales it by the payable ratio twice.
    fn hra(
        &self,
        earned_basic: Decimal,
        monthly_gross: Decimal,
    ) -> Decimal {
        self.prorator.prorate(earned_basic * self.hra_rate(monthly_gross))
    }

    /// Prorated (medical, conveyance) allowances; both zero at or below the floor.
    fn fixed_allowances(
        &self,
        monthly_gross: Decimal,
    ) -> (Decimal, Decimal) {
        if monthly_gross > FIXED_ALLOWANCE_GROSS_FLOOR {
            (
                self.prorator.prorate(MEDICAL_ALLOWANCE),
                self.prorator.prorate(CONVEYANCE_ALLOWANCE),
            )
        } else {
            (Decimal::ZERO, Decimal::ZERO)
        }
    }
}
