//! Threshold bands and fixed amounts for salary components and deductions.
//!
//! All gross thresholds compare against the contracted monthly gross unless
//! the constant says otherwise.

use rust_decimal::Decimal;

const fn amount(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 0)
}

const fn percent(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 2)
}

// =========================================================================
// Basic
// =========================================================================

/// Gross below this gets [`BASIC_FIXED_LOW`].
pub const BASIC_LOW_BAND_LIMIT: Decimal = amount(20_000);

/// Gross from [`BASIC_LOW_BAND_LIMIT`] up to and including this gets
/// [`BASIC_FIXED_MID`]; above it Basic is a share of gross.
pub const BASIC_MID_BAND_LIMIT: Decimal = amount(30_000);

pub const BASIC_FIXED_LOW: Decimal = amount(13_500);
pub const BASIC_FIXED_MID: Decimal = amount(15_000);
pub const BASIC_SHARE_OF_GROSS: Decimal = percent(50);

// =========================================================================
// House Rent Allowance
// =========================================================================

pub const HRA_LOW_BAND_LIMIT: Decimal = amount(20_000);
pub const HRA_ESI_EDGE: Decimal = amount(21_001);
pub const HRA_HIGH_BAND_FLOOR: Decimal = amount(30_001);

pub const HRA_RATE_LOW: Decimal = percent(15);
/// Only reachable if [`HRA_LOW_BAND_LIMIT`] is ever raised past [`HRA_ESI_EDGE`].
pub const HRA_RATE_LOW_ABOVE_EDGE: Decimal = percent(10);
pub const HRA_RATE_MID_BELOW_EDGE: Decimal = percent(40);
pub const HRA_RATE_MID: Decimal = percent(30);
pub const HRA_RATE_HIGH: Decimal = percent(50);

// =========================================================================
// Medical and Conveyance Allowance
// =========================================================================

/// Gross strictly above this earns both allowances.
pub const FIXED_ALLOWANCE_GROSS_FLOOR: Decimal = amount(25_001);
pub const MEDICAL_ALLOWANCE: Decimal = amount(1_250);
pub const CONVEYANCE_ALLOWANCE: Decimal = amount(1_600);

// =========================================================================
// Provident Fund
// =========================================================================

/// Earned Basic at or above this pays the flat contribution.
pub const PF_BASIC_CEILING: Decimal = amount(15_000);
pub const PF_FLAT_CONTRIBUTION: Decimal = amount(1_800);
pub const PF_RATE: Decimal = percent(12);

// =========================================================================
// Employee State Insurance
// =========================================================================

/// Gross strictly above this is outside ESI.
pub const ESI_GROSS_CEILING: Decimal = amount(21_000);
pub const ESI_RATE: Decimal = Decimal::from_parts(75, 0, 0, false, 4);

// =========================================================================
// Professional Tax (banded on earned gross)
// =========================================================================

pub const PT_EXEMPT_LIMIT: Decimal = amount(15_000);
pub const PT_LOW_BAND_LIMIT: Decimal = amount(20_000);
pub const PT_LOW_BAND: Decimal = amount(150);
pub const PT_HIGH_BAND: Decimal = amount(200);
