//! Predicate filtering for the payroll sheet and the employee list.
//!
//! Each filter combines independent criteria with logical AND. A select-style
//! criterion holding the sentinel `"all"` (or nothing) accepts every value.
//! Output preserves input order.

use crate::models::{AttendancePayrollRecord, Employee, EmployeeDirectory};

/// Sentinel value the console's select boxes use for "no restriction".
pub const ALL: &str = "all";

/// An exact-match criterion that can be switched off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Criterion {
    #[default]
    Any,
    Exact(String),
}

impl Criterion {
    /// `""` and `"all"` become [`Criterion::Any`]; anything else must match
    /// exactly.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == ALL {
            Self::Any
        } else {
            Self::Exact(raw.to_string())
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn matches(
        &self,
        value: &str,
    ) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(expected) => expected == value,
        }
    }

    /// Like [`matches`](Self::matches), but an absent value only passes an
    /// `Any` criterion.
    pub fn matches_opt(
        &self,
        value: Option<&str>,
    ) -> bool {
        match value {
            Some(value) => self.matches(value),
            None => self.is_any(),
        }
    }
}

impl From<Option<&str>> for Criterion {
    fn from(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or_default()
    }
}

/// Case-insensitive substring search. An empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches_any<'a, I>(
        &self,
        haystacks: I,
    ) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.is_empty()
            || haystacks
                .into_iter()
                .any(|h| h.to_lowercase().contains(&self.needle))
    }
}

// ─── payroll sheet ───────────────────────────────────────────────────────────

/// Criteria for the attendance-payroll sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayrollFilter {
    /// Matched against the employee code and, when the employee resolves,
    /// their name and department.
    pub query: TextQuery,
    /// Exact `YYYY-MM` match on the record's month.
    pub month: Criterion,
    /// Exact match on the resolved employee's department.
    pub department: Criterion,
}

impl PayrollFilter {
    pub fn new(
        query: &str,
        month: &str,
        department: &str,
    ) -> Self {
        Self {
            query: TextQuery::new(query),
            month: Criterion::parse(month),
            department: Criterion::parse(department),
        }
    }

    pub fn matches(
        &self,
        record: &AttendancePayrollRecord,
        directory: &EmployeeDirectory,
    ) -> bool {
        let employee = directory.get(&record.employee_id);

        let text_ok = match employee {
            Some(e) => self.query.matches_any([
                record.employee_id.as_str(),
                e.name.as_str(),
                e.department.as_str(),
            ]),
            None => self.query.matches_any([record.employee_id.as_str()]),
        };

        text_ok
            && self.month.matches(&record.month.to_string())
            && self
                .department
                .matches_opt(employee.map(|e| e.department.as_str()))
    }

    /// Returns the records satisfying every criterion, in input order.
    pub fn apply<'a>(
        &self,
        records: &'a [AttendancePayrollRecord],
        directory: &EmployeeDirectory,
    ) -> Vec<&'a AttendancePayrollRecord> {
        records
            .iter()
            .filter(|record| self.matches(record, directory))
            .collect()
    }
}

/// Filters `records` by free text, month and department.
///
/// Shorthand for `PayrollFilter::new(query, month, department).apply(..)`.
pub fn filter_records<'a>(
    records: &'a [AttendancePayrollRecord],
    directory: &EmployeeDirectory,
    query: &str,
    month: &str,
    department: &str,
) -> Vec<&'a AttendancePayrollRecord> {
    PayrollFilter::new(query, month, department).apply(records, directory)
}

// ─── employee list ───────────────────────────────────────────────────────────

/// Criteria for the employee list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    /// Matched against name and employee code.
    pub query: TextQuery,
    pub department: Criterion,
    /// Compared with the status code (`active`, `on-leave`, `terminated`).
    pub status: Criterion,
}

impl EmployeeFilter {
    pub fn new(
        query: &str,
        department: &str,
        status: &str,
    ) -> Self {
        Self {
            query: TextQuery::new(query),
            department: Criterion::parse(department),
            status: Criterion::parse(status),
        }
    }

    pub fn matches(
        &self,
        employee: &Employee,
    ) -> bool {
        self.query
            .matches_any([employee.name.as_str(), employee.employee_id.as_str()])
            && self.department.matches(&employee.department)
            && self.status.matches(employee.status.as_str())
    }

    pub fn apply<'a>(
        &self,
        employees: &'a [Employee],
    ) -> Vec<&'a Employee> {
        employees.iter().filter(|e| self.matches(e)).collect()
    }
}
