//! Batch CSV processing for the payroll engines.

pub mod loader;
pub mod runner;

pub use loader::{BatchLoadError, BatchLoader, Loaded, RowFailure, SalaryRecord, TaxRecord};
pub use runner::{BatchReport, BatchRunner, SalaryOutputRow, TaxOutputRow, write_csv};
