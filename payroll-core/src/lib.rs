//! Deterministic income-tax and salary computation.
//!
//! Two independent, stateless pipelines:
//!
//! - [`compute_tax`] runs both the Old and New regimes over the same income
//!   and returns a [`TaxComparison`].
//! - [`compute_salary_breakdown`] splits a monthly gross into prorated
//!   earning components and statutory deductions.
//!
//! Both are pure functions of their input and safe to call from any thread.

pub mod calculations;
pub mod error;
pub mod models;

pub use calculations::salary::{SalaryEngine, compute_salary_breakdown};
pub use calculations::tax::{TaxEngine, compute_tax};
pub use error::InvalidInputError;
pub use models::*;
