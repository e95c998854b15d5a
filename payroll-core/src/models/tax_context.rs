//! Display-only context that travels with a [`TaxInput`](super::TaxInput).
//!
//! Nothing in here changes the arithmetic of either regime; it is carried so
//! that reports can say which year and which kind of taxpayer a computation
//! was made for.

use serde::{Deserialize, Serialize};

/// A financial year such as `2024-25`, stored by its starting calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FinancialYear {
    pub start_year: i32,
}

impl FinancialYear {
    pub fn new(start_year: i32) -> Self {
        Self { start_year }
    }

    pub fn end_year(&self) -> i32 {
        self.start_year + 1
    }

    /// Parses `2024-25` or `2024-2025`. The second year must follow the first.
    pub fn parse(s: &str) -> Option<Self> {
        let (start, end) = s.trim().split_once('-')?;
        if start.len() != 4 {
            return None;
        }
        let start_year: i32 = start.parse().ok()?;
        let expected_end = start_year + 1;

        let matches = match end.len() {
            2 => end.parse::<i32>().ok()? == expected_end % 100,
            4 => end.parse::<i32>().ok()? == expected_end,
            _ => false,
        };

        matches.then_some(Self { start_year })
    }
}

impl std::fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.start_year, self.end_year() % 100)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResidencyStatus {
    #[default]
    Resident,
    NonResident,
}

impl ResidencyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resident => "Resident",
            Self::NonResident => "Non-Resident",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxpayerType {
    #[default]
    Individual,
    /// Hindu Undivided Family.
    Huf,
}

impl TaxpayerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Huf => "HUF",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxContext {
    pub financial_year: Option<FinancialYear>,
    pub residency: ResidencyStatus,
    pub taxpayer: TaxpayerType,
}
