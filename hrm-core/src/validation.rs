//! Boundary validation for form submissions.
//!
//! Raw field values arrive as strings exactly as typed into a dialog.
//! [`PayrollForm::validate`] and [`AttendanceForm::validate`] coerce them once
//! into typed drafts or report every offending field.
//!
//! | Field               | Rule                                              |
//! |---------------------|---------------------------------------------------|
//! | `employee_id`       | required                                          |
//! | `month`             | required, `YYYY-MM`                               |
//! | `working_days`      | whole number, 0–31                                |
//! | other day counts    | whole number, ≥ 0                                 |
//! | amounts             | decimal, 0 to [`MAX_AMOUNT`] (empty counts as 0)  |
//! | `overtime`          | hours (`1.5`) or a clock duration (`1:30`), ≥ 0   |
//!
//! Numbers may use `,` thousands separators (`15,000,000`) or the vi-VN
//! `.` grouping the console prints (`15.000.000`).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::currency::format_vnd;
use crate::models::{
    AttendanceEntry, AttendancePayrollRecord, NewAttendancePayrollRecord, PayrollMonth,
};

/// Upper bound on working days in a month.
pub const MAX_WORKING_DAYS: u32 = 31;

/// Upper bound on any single amount, in đồng. Keeps every sum over a sheet
/// well inside the `Decimal` range.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

static GROUPED_DOTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[1-9]\d{0,2}(\.\d{3})+$").expect("grouping pattern is valid")
});

static PLAIN_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(\d+(\.\d*)?|\.\d+)$").expect("number pattern is valid")
});

static CLOCK_DURATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,4}):([0-5]\d)$").expect("duration pattern is valid"));

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
pub enum ParseDecimalError {
    #[error("invalid decimal '{0}'")]
    Malformed(String),

    #[error("invalid decimal '{input}': {source}")]
    OutOfRange {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },
}

/// Trims whitespace, drops `,` separators and collapses vi-VN `.` grouping.
fn normalize_decimal_input(s: &str) -> String {
    let trimmed = s.trim().replace(',', "");
    if GROUPED_DOTS.is_match(&trimmed) {
        trimmed.replace('.', "")
    } else {
        trimmed
    }
}

/// Parses a string into a [`Decimal`].
///
/// Accepts plain digits with an optional leading `-` and decimal point,
/// after separator removal. Exponents, `+` and `_` are rejected.
/// Empty or whitespace-only input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    if !PLAIN_NUMBER.is_match(&normalized) {
        tracing::debug!(input = %s, "malformed decimal");
        return Err(ParseDecimalError::Malformed(s.to_string()));
    }
    normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, "invalid decimal: {}", e);
        ParseDecimalError::OutOfRange {
            input: s.to_string(),
            source: e,
        }
    })
}

/// One inline message attached to a form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field that failed validation, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize)]
#[error("{}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|e| e.field).collect()
    }

    /// Message for `field`, if it failed.
    pub fn message_for(
        &self,
        field: &str,
    ) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(
        &mut self,
        field: &'static str,
        message: impl Into<String>,
    ) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }
}

/// Raw values of the attendance-payroll dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollForm {
    pub employee_id: String,
    pub month: String,
    pub working_days: String,
    pub late_days: String,
    pub base_salary: String,
    pub bonus: String,
    pub allowances: String,
    pub tax: String,
    pub insurance: String,
    pub fine: String,
}

impl PayrollForm {
    /// Prefills the form from a stored record, as the edit dialog does.
    /// Amounts are written without trailing zeros so `1.500` is never read
    /// back as a grouped `1500`.
    pub fn from_record(record: &AttendancePayrollRecord) -> Self {
        Self {
            employee_id: record.employee_id.clone(),
            month: record.month.to_string(),
            working_days: record.working_days.to_string(),
            late_days: record.late_days.to_string(),
            base_salary: record.base_salary.normalize().to_string(),
            bonus: record.bonus.normalize().to_string(),
            allowances: record.allowances.normalize().to_string(),
            tax: record.tax.normalize().to_string(),
            insurance: record.insurance.normalize().to_string(),
            fine: record.fine.normalize().to_string(),
        }
    }

    /// Parse the form into a draft, collecting every field error.
    pub fn validate(&self) -> Result<NewAttendancePayrollRecord, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let employee_id = parse_employee_id(&mut errors, &self.employee_id);
        let month = parse_month(&mut errors, &self.month);

        let working_days = parse_days(
            &mut errors,
            "working_days",
            "Working days",
            &self.working_days,
            Some(MAX_WORKING_DAYS),
        );
        let late_days = parse_days(&mut errors, "late_days", "Late days", &self.late_days, None);

        let base_salary = parse_amount(&mut errors, "base_salary", "Base salary", &self.base_salary);
        let bonus = parse_amount(&mut errors, "bonus", "Bonus", &self.bonus);
        let allowances = parse_amount(&mut errors, "allowances", "Allowances", &self.allowances);
        let tax = parse_amount(&mut errors, "tax", "Tax", &self.tax);
        let insurance = parse_amount(&mut errors, "insurance", "Insurance", &self.insurance);
        let fine = parse_amount(&mut errors, "fine", "Fine", &self.fine);

        match (
            month,
            working_days,
            late_days,
            base_salary,
            bonus,
            allowances,
            tax,
            insurance,
            fine,
        ) {
            (
                Some(month),
                Some(working_days),
                Some(late_days),
                Some(base_salary),
                Some(bonus),
                Some(allowances),
                Some(tax),
                Some(insurance),
                Some(fine),
            ) if errors.is_empty() => Ok(NewAttendancePayrollRecord {
                employee_id,
                month,
                working_days,
                late_days,
                base_salary,
                bonus,
                allowances,
                tax,
                insurance,
                fine,
            }),
            _ => {
                tracing::debug!(fields = ?errors.fields(), "payroll form rejected");
                Err(errors)
            }
        }
    }
}

/// Raw values of the simpler attendance dialog (no pay components).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceForm {
    pub employee_id: String,
    pub month: String,
    pub working_days: String,
    pub paid_leave_days: String,
    pub unpaid_leave_days: String,
    pub late_days: String,
    pub overtime: String,
}

impl AttendanceForm {
    pub fn from_entry(entry: &AttendanceEntry) -> Self {
        Self {
            employee_id: entry.employee_id.clone(),
            month: entry.month.to_string(),
            working_days: entry.working_days.to_string(),
            paid_leave_days: entry.paid_leave_days.to_string(),
            unpaid_leave_days: entry.unpaid_leave_days.to_string(),
            late_days: entry.late_days.to_string(),
            overtime: entry.overtime_clock(),
        }
    }

    /// Parse the form into an entry, collecting every field error.
    pub fn validate(&self) -> Result<AttendanceEntry, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let employee_id = parse_employee_id(&mut errors, &self.employee_id);
        let month = parse_month(&mut errors, &self.month);
        let working_days = parse_days(
            &mut errors,
            "working_days",
            "Working days",
            &self.working_days,
            Some(MAX_WORKING_DAYS),
        );
        let paid_leave_days = parse_days(
            &mut errors,
            "paid_leave_days",
            "Paid leave days",
            &self.paid_leave_days,
            None,
        );
        let unpaid_leave_days = parse_days(
            &mut errors,
            "unpaid_leave_days",
            "Unpaid leave days",
            &self.unpaid_leave_days,
            None,
        );
        let late_days = parse_days(&mut errors, "late_days", "Late days", &self.late_days, None);
        let overtime_minutes = parse_overtime(&mut errors, &self.overtime);

        match (
            month,
            working_days,
            paid_leave_days,
            unpaid_leave_days,
            late_days,
            overtime_minutes,
        ) {
            (
                Some(month),
                Some(working_days),
                Some(paid_leave_days),
                Some(unpaid_leave_days),
                Some(late_days),
                Some(overtime_minutes),
            ) if errors.is_empty() => Ok(AttendanceEntry {
                employee_id,
                month,
                working_days,
                paid_leave_days,
                unpaid_leave_days,
                late_days,
                overtime_minutes,
            }),
            _ => {
                tracing::debug!(fields = ?errors.fields(), "attendance form rejected");
                Err(errors)
            }
        }
    }
}

// ─── field parsers ───────────────────────────────────────────────────────────

fn parse_employee_id(
    errors: &mut ValidationErrors,
    raw: &str,
) -> String {
    let employee_id = raw.trim();
    if employee_id.is_empty() {
        errors.push("employee_id", "Employee ID is required");
    }
    employee_id.to_string()
}

fn parse_month(
    errors: &mut ValidationErrors,
    raw: &str,
) -> Option<PayrollMonth> {
    if raw.trim().is_empty() {
        errors.push("month", "Month is required");
        return None;
    }
    match raw.parse::<PayrollMonth>() {
        Ok(month) => Some(month),
        Err(e) => {
            errors.push("month", e.to_string());
            None
        }
    }
}

fn parse_amount(
    errors: &mut ValidationErrors,
    field: &'static str,
    label: &str,
    raw: &str,
) -> Option<Decimal> {
    match parse_decimal(raw) {
        Ok(value) if value.is_sign_negative() && !value.is_zero() => {
            errors.push(field, format!("{label} must be greater than or equal to 0"));
            None
        }
        Ok(value) if value > Decimal::from(MAX_AMOUNT) => {
            errors.push(
                field,
                format!(
                    "{label} must not exceed {}",
                    format_vnd(Decimal::from(MAX_AMOUNT))
                ),
            );
            None
        }
        Ok(value) if value.is_zero() => Some(Decimal::ZERO),
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(field, format!("{label} must be a number"));
            None
        }
    }
}

fn parse_days(
    errors: &mut ValidationErrors,
    field: &'static str,
    label: &str,
    raw: &str,
    max: Option<u32>,
) -> Option<u32> {
    let value = match parse_decimal(raw) {
        Ok(value) => value,
        Err(_) => {
            errors.push(field, format!("{label} must be a number"));
            return None;
        }
    };

    if value.is_sign_negative() && !value.is_zero() {
        errors.push(field, format!("{label} must be greater than or equal to 0"));
        return None;
    }
    if !value.fract().is_zero() {
        errors.push(field, format!("{label} must be a whole number"));
        return None;
    }

    let days = value.to_u32();
    match (days, max) {
        (Some(days), Some(max)) if days > max => {
            errors.push(field, format!("{label} must be between 0 and {max}"));
            None
        }
        (Some(days), _) => Some(days),
        (None, _) => {
            errors.push(field, format!("{label} is too large"));
            None
        }
    }
}

/// Overtime as whole minutes. Accepts decimal hours (`1.5`) or `H:MM`.
fn parse_overtime(
    errors: &mut ValidationErrors,
    raw: &str,
) -> Option<u32> {
    const FIELD: &str = "overtime";
    let trimmed = raw.trim();

    if trimmed.contains(':') {
        let Some(caps) = CLOCK_DURATION.captures(trimmed) else {
            errors.push(FIELD, "Overtime must be hours (e.g. 1.5) or a time like 1:30");
            return None;
        };
        // Both groups are bounded digit runs, so they always fit.
        let hours: u32 = caps[1].parse().unwrap_or_default();
        let minutes: u32 = caps[2].parse().unwrap_or_default();
        return Some(hours * 60 + minutes);
    }

    let hours = match parse_decimal(trimmed) {
        Ok(hours) => hours,
        Err(_) => {
            errors.push(FIELD, "Overtime must be hours (e.g. 1.5) or a time like 1:30");
            return None;
        }
    };
    if hours.is_sign_negative() && !hours.is_zero() {
        errors.push(FIELD, "Overtime must be greater than or equal to 0");
        return None;
    }

    let minutes = hours.checked_mul(Decimal::from(60));
    match minutes {
        Some(minutes) if !minutes.fract().is_zero() => {
            errors.push(FIELD, "Overtime must be a whole number of minutes");
            None
        }
        Some(minutes) => match minutes.to_u32() {
            Some(minutes) => Some(minutes),
            None => {
                errors.push(FIELD, "Overtime is too large");
                None
            }
        },
        None => {
            errors.push(FIELD, "Overtime is too large");
            None
        }
    }
}
