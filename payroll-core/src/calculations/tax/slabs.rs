//! Slab tables and thresholds for both tax regimes.
//!
//! Each table lists its bands in ascending order with `base_tax` holding the
//! cumulative tax of every band below it, so a single band lookup is enough
//! to price any income.

use rust_decimal::Decimal;

use crate::models::TaxSlab;

const fn amount(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 0)
}

const fn percent(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 2)
}

const fn slab(
    min_income: u32,
    max_income: Option<u32>,
    rate: u32,
    base_tax: u32,
) -> TaxSlab {
    TaxSlab {
        min_income: amount(min_income),
        max_income: match max_income {
            Some(max) => Some(amount(max)),
            None => None,
        },
        rate: percent(rate),
        base_tax: amount(base_tax),
    }
}

// =========================================================================
// Deductions taken before the slabs
// =========================================================================

/// Taken off gross income once, for both regimes, when income includes salary.
pub const STANDARD_DEDUCTION: Decimal = amount(75_000);

// =========================================================================
// Old regime
// =========================================================================

pub const OLD_REGIME_UNDER_60: &[TaxSlab] = &[
    slab(0, Some(250_000), 0, 0),
    slab(250_000, Some(500_000), 5, 0),
    slab(500_000, Some(1_000_000), 20, 12_500),
    slab(1_000_000, None, 30, 112_500),
];

pub const OLD_REGIME_60_TO_80: &[TaxSlab] = &[
    slab(0, Some(300_000), 0, 0),
    slab(300_000, Some(500_000), 5, 0),
    slab(500_000, Some(1_000_000), 20, 10_000),
    slab(1_000_000, None, 30, 110_000),
];

/// No 5% band: the exemption runs straight up to the 20% band.
pub const OLD_REGIME_ABOVE_80: &[TaxSlab] = &[
    slab(0, Some(500_000), 0, 0),
    slab(500_000, Some(1_000_000), 20, 0),
    slab(1_000_000, None, 30, 100_000),
];

// =========================================================================
// New regime
// =========================================================================

pub const NEW_REGIME: &[TaxSlab] = &[
    slab(0, Some(300_000), 0, 0),
    slab(300_000, Some(700_000), 5, 0),
    slab(700_000, Some(1_000_000), 10, 20_000),
    slab(1_000_000, Some(1_200_000), 15, 50_000),
    slab(1_200_000, Some(1_500_000), 20, 80_000),
    slab(1_500_000, None, 30, 140_000),
];

/// Marginal relief applies to income strictly above this amount...
pub const MARGINAL_RELIEF_THRESHOLD: Decimal = amount(700_000);

/// ...and up to and including this one.
pub const MARGINAL_RELIEF_CEILING: Decimal = amount(1_270_500);

// =========================================================================
// Rebate
// =========================================================================

/// Net taxable income at or below this amount qualifies for the rebate.
pub const REBATE_INCOME_LIMIT: Decimal = amount(700_000);

pub const MAX_REBATE: Decimal = amount(25_000);

// =========================================================================
// Surcharge and cess
// =========================================================================

/// A surcharge rate applying to net taxable income strictly above `above`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurchargeTier {
    pub above: Decimal,
    pub rate: Decimal,
}

/// Highest tier first; the first tier whose threshold is exceeded applies.
pub const SURCHARGE_TIERS: &[SurchargeTier] = &[
    SurchargeTier { above: amount(50_000_000), rate: percent(37) },
    SurchargeTier { above: amount(20_000_000), rate: percent(25) },
    SurchargeTier { above: amount(10_000_000), rate: percent(15) },
    SurchargeTier { above: amount(5_000_000), rate: percent(10) },
];

/// Health and education cess on tax plus surcharge.
pub const CESS_RATE: Decimal = percent(4);
