//! Calculation logic for the tax and salary engines.
//!
//! Each engine is a short pipeline of small calculators. The calculators are
//! public so callers can run a single stage, but the usual entry points are
//! [`compute_tax`](tax::compute_tax) and
//! [`compute_salary_breakdown`](salary::compute_salary_breakdown).

pub mod common;
pub mod salary;
pub mod tax;
