//! Payroll sheet totals shown beneath the attendance-payroll table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::net_salary;
use crate::AttendancePayrollRecord;

/// Aggregates over a set of payroll records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Number of records summarised (one per employee on a monthly sheet).
    pub employee_count: usize,

    /// Sum of every record's net salary.
    pub total_payroll: Decimal,

    /// Sum of personal income tax withheld.
    pub total_tax: Decimal,

    /// Sum of social insurance contributions.
    pub total_insurance: Decimal,
}

impl PayrollSummary {
    /// Summarises `records`. An empty input yields all zeros.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a AttendancePayrollRecord>,
    {
        records
            .into_iter()
            .fold(Self::default(), |mut acc, record| {
                acc.employee_count += 1;
                acc.total_payroll = acc.total_payroll.saturating_add(net_salary(record));
                acc.total_tax = acc.total_tax.saturating_add(record.tax);
                acc.total_insurance = acc.total_insurance.saturating_add(record.insurance);
                acc
            })
    }
}
