//! CSV export of the attendance-payroll sheet.
//!
//! Each row carries the record's columns, the resolved employee name and
//! department (blank when the code is not in the directory) and the derived
//! `net_salary`. Amounts are written unformatted so spreadsheets can sum them.

use std::io::Write;

use hrm_core::{AttendancePayrollRecord, EmployeeDirectory};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::ExportError;

#[derive(Debug, Serialize)]
struct PayrollExportRow<'a> {
    id: &'a str,
    employee_id: &'a str,
    name: &'a str,
    department: &'a str,
    month: String,
    working_days: u32,
    late_days: u32,
    base_salary: Decimal,
    bonus: Decimal,
    allowances: Decimal,
    tax: Decimal,
    insurance: Decimal,
    fine: Decimal,
    net_salary: Decimal,
}

impl<'a> PayrollExportRow<'a> {
    fn new(
        record: &'a AttendancePayrollRecord,
        directory: &'a EmployeeDirectory,
    ) -> Self {
        let employee = directory.get(&record.employee_id);
        Self {
            id: &record.id,
            employee_id: &record.employee_id,
            name: employee.map(|e| e.name.as_str()).unwrap_or_default(),
            department: employee.map(|e| e.department.as_str()).unwrap_or_default(),
            month: record.month.to_string(),
            working_days: record.working_days,
            late_days: record.late_days,
            base_salary: record.base_salary,
            bonus: record.bonus,
            allowances: record.allowances,
            tax: record.tax,
            insurance: record.insurance,
            fine: record.fine,
            net_salary: record.net_salary(),
        }
    }
}

/// Writes payroll sheets as CSV.
pub struct PayrollExporter;

impl PayrollExporter {
    /// Write a header plus one row per record, in the order given.
    /// Returns the number of data rows written.
    pub fn write<'a, W, I>(
        writer: W,
        records: I,
        directory: &EmployeeDirectory,
    ) -> Result<usize, ExportError>
    where
        W: Write,
        I: IntoIterator<Item = &'a AttendancePayrollRecord>,
    {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let mut written = 0;

        for record in records {
            csv_writer.serialize(PayrollExportRow::new(record, directory))?;
            written += 1;
        }

        if written == 0 {
            // serialize() emits the header with the first row; keep empty exports well-formed.
            csv_writer.write_record(HEADER)?;
        }

        csv_writer.flush()?;
        Ok(written)
    }
}

const HEADER: [&str; 14] = [
    "id",
    "employee_id",
    "name",
    "department",
    "month",
    "working_days",
    "late_days",
    "base_salary",
    "bonus",
    "allowances",
    "tax",
    "insurance",
    "fine",
    "net_salary",
];
