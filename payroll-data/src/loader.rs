//! CSV parsing for batch salary and tax inputs.
//!
//! ## Salary CSV
//!
//! | Column | Required | Type | Notes |
//! |------------------------|----------|---------|---------------------------------------|
//! | `employee_id` | yes | string | Copied to the output row |
//! | `monthly_gross_salary` | yes | decimal | Must be positive |
//! | `total_days_in_cycle` | no | integer | Empty for the default 30 |
//! | `payable_days` | no | integer | Empty for the whole cycle |
//! | `basic_override` | no | decimal | Empty to use the banded Basic |
//!
//! ## Tax CSV
//!
//! | Column | Required | Type | Notes |
//! |--------------------------|----------|---------|---------------------------------------|
//! | `taxpayer_id` | yes | string | Copied to the output rows |
//! | `age_bracket` | yes | string | `U60`, `60-80` or `80+` |
//! | `total_annual_income` | yes | decimal | Must be positive |
//! | `income_includes_salary` | yes | bool | `true` / `false` |
//! | `total_deductions` | no | decimal | Empty for none |
//!
//! Columns are matched by header name and surrounding whitespace is ignored.
//! A bad row does not stop the load: it is reported as a [`RowFailure`] with
//! its 1-based row number and the remaining rows are still read.

use std::io::Read;

use payroll_core::{AgeBracket, DEFAULT_DAYS_IN_CYCLE, InvalidInputError, SalaryInput, TaxInput};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur while loading or processing batch data.
#[derive(Debug, Error)]
pub enum BatchLoadError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("unrecognised age bracket '{0}' (expected U60, 60-80 or 80+)")]
    InvalidAgeBracket(String),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for BatchLoadError {
    fn from(err: csv::Error) -> Self {
        BatchLoadError::CsvParse(err.to_string())
    }
}

/// A row that could not be loaded or computed.
#[derive(Debug)]
pub struct RowFailure {
    /// 1-based data row number; the header is row 0.
    pub row: usize,
    pub error: BatchLoadError,
}

/// Rows that loaded, in file order, alongside the ones that did not.
#[derive(Debug)]
pub struct Loaded<T> {
    pub records: Vec<(usize, T)>,
    pub failures: Vec<RowFailure>,
}

/// A single row of the salary CSV.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SalaryRecord {
    pub employee_id: String,
    pub monthly_gross_salary: Decimal,
    #[serde(default)]
    pub total_days_in_cycle: Option<i32>,
    #[serde(default)]
    pub payable_days: Option<i32>,
    #[serde(default)]
    pub basic_override: Option<Decimal>,
}

impl SalaryRecord {
    pub fn to_input(&self) -> SalaryInput {
        SalaryInput {
            monthly_gross_salary: self.monthly_gross_salary,
            total_days_in_cycle: self.total_days_in_cycle.unwrap_or(DEFAULT_DAYS_IN_CYCLE),
            payable_days: self.payable_days,
            basic_override: self.basic_override,
        }
    }
}

/// A single row of the tax CSV.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TaxRecord {
    pub taxpayer_id: String,
    pub age_bracket: String,
    pub total_annual_income: Decimal,
    pub income_includes_salary: bool,
    #[serde(default)]
    pub total_deductions: Option<Decimal>,
}

impl TaxRecord {
    pub fn to_input(&self) -> Result<TaxInput, BatchLoadError> {
        let age_bracket = AgeBracket::parse(&self.age_bracket)
            .ok_or_else(|| BatchLoadError::InvalidAgeBracket(self.age_bracket.clone()))?;

        let mut input = TaxInput::new(age_bracket, self.total_annual_income);
        input.income_includes_salary = self.income_includes_salary;
        input.total_deductions = self.total_deductions.unwrap_or(Decimal::ZERO);
        Ok(input)
    }
}

/// Loader for batch input CSV files.
pub struct BatchLoader;

impl BatchLoader {
    /// Parse salary records. Fails outright only when the header row itself
    /// cannot be read.
    pub fn parse_salaries<R: Read>(reader: R) -> Result<Loaded<SalaryRecord>, BatchLoadError> {
        Self::parse(reader)
    }

    /// Parse tax records. Fails outright only when the header row itself
    /// cannot be read.
    pub fn parse_taxes<R: Read>(reader: R) -> Result<Loaded<TaxRecord>, BatchLoadError> {
        Self::parse(reader)
    }

    fn parse<R: Read, T: DeserializeOwned>(reader: R) -> Result<Loaded<T>, BatchLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        // Surface a missing or unreadable header once instead of on every row.
        csv_reader.headers()?;

        let mut loaded = Loaded {
            records: Vec::new(),
            failures: Vec::new(),
        };

        for (idx, result) in csv_reader.deserialize::<T>().enumerate() {
            let row = idx + 1;
            match result {
                Ok(record) => loaded.records.push((row, record)),
                Err(err) => loaded.failures.push(RowFailure {
                    row,
                    error: err.into(),
                }),
            }
        }

        Ok(loaded)
    }
}
