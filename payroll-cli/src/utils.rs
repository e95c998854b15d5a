use payroll_core::{AgeBracket, FinancialYear, ResidencyStatus, TaxpayerType};
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a command-line value cannot be parsed.
#[derive(Debug, Error)]
pub enum ParseArgError {
    #[error("invalid amount '{input}': {source}")]
    Amount {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("amount must not be empty")]
    EmptyAmount,

    #[error("unrecognised age bracket '{0}' (expected U60, 60-80 or 80+)")]
    AgeBracket(String),

    #[error("invalid financial year '{0}' (expected e.g. 2024-25)")]
    FinancialYear(String),

    #[error("unrecognised residency '{0}' (expected resident or non-resident)")]
    Residency(String),

    #[error("unrecognised taxpayer type '{0}' (expected individual or huf)")]
    Taxpayer(String),
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses an amount typed by a user into a [`Decimal`].
///
/// Handles comma as thousands separator, in either Western (`1,234,567`) or
/// Indian (`12,34,567`) grouping.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseArgError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Err(ParseArgError::EmptyAmount);
    }
    normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, "invalid amount: {}", e);
        ParseArgError::Amount {
            input: s.to_string(),
            source: e,
        }
    })
}

pub fn parse_age_bracket(s: &str) -> Result<AgeBracket, ParseArgError> {
    AgeBracket::parse(s).ok_or_else(|| ParseArgError::AgeBracket(s.to_string()))
}

pub fn parse_financial_year(s: &str) -> Result<FinancialYear, ParseArgError> {
    FinancialYear::parse(s).ok_or_else(|| ParseArgError::FinancialYear(s.to_string()))
}

pub fn parse_residency(s: &str) -> Result<ResidencyStatus, ParseArgError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "resident" | "r" => Ok(ResidencyStatus::Resident),
        "non-resident" | "nonresident" | "nr" => Ok(ResidencyStatus::NonResident),
        _ => Err(ParseArgError::Residency(s.to_string())),
    }
}

pub fn parse_taxpayer(s: &str) -> Result<TaxpayerType, ParseArgError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "individual" => Ok(TaxpayerType::Individual),
        "huf" => Ok(TaxpayerType::Huf),
        _ => Err(ParseArgError::Taxpayer(s.to_string())),
    }
}

/// Formats an amount with Indian digit grouping: the last three digits, then
/// pairs (`12,34,567.50`). The fractional part is kept as is.
pub fn format_amount(value: Decimal) -> String {
    let text = value.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 2 + 4);
    if whole.len() > 3 {
        let (head, tail) = whole.split_at(whole.len() - 3);
        let lead = head.len() % 2;
        if lead == 1 {
            grouped.push_str(&head[..1]);
        }
        for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
            if i > 0 || lead == 1 {
                grouped.push(',');
            }
            grouped.extend(pair.iter().map(|&b| b as char));
        }
        grouped.push(',');
        grouped.push_str(tail);
    } else {
        grouped.push_str(whole);
    }

    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    if value.is_sign_negative() && !value.is_zero() {
        grouped.insert(0, '-');
    }
    grouped
}
