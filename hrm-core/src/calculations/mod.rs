//! Payroll derivations.
//!
//! Everything here is a pure function of the records passed in; nothing
//! reads or mutates a store.

pub mod net_salary;
pub mod summary;

pub use net_salary::{gross_earnings, net_salary, total_deductions};
pub use summary::PayrollSummary;
