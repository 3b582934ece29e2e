use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmployeeStatus {
    #[default]
    Active,
    OnLeave,
    Terminated,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::OnLeave => "on-leave",
            Self::Terminated => "terminated",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "on-leave" => Some(Self::OnLeave),
            "terminated" => Some(Self::Terminated),
            _ => None,
        }
    }

    /// Label shown in the console's status badge.
    pub fn to_long_str(&self) -> &'static str {
        match self {
            Self::Active => "Đang làm việc",
            Self::OnLeave => "Nghỉ phép",
            Self::Terminated => "Đã nghỉ việc",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directory entry. Payroll records reference it through `employee_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Employee code, e.g. `NV001`.
    pub employee_id: String,
    pub name: String,
    pub gender: String,
    pub department: String,
    pub position: String,
    pub status: EmployeeStatus,
    pub email: String,
    pub phone: String,
}

/// Read-only lookup over the employee roster, keyed by employee code.
///
/// Iteration order is the order the employees were supplied in.
#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    employees: Vec<Employee>,
    index: HashMap<String, usize>,
}

impl EmployeeDirectory {
    /// Builds a directory. When two entries share a code the first one wins
    /// lookups; both are still listed.
    pub fn new(employees: Vec<Employee>) -> Self {
        let mut index = HashMap::with_capacity(employees.len());
        for (pos, employee) in employees.iter().enumerate() {
            if index.contains_key(&employee.employee_id) {
                tracing::warn!(
                    employee_id = %employee.employee_id,
                    "duplicate employee code in directory"
                );
                continue;
            }
            index.insert(employee.employee_id.clone(), pos);
        }
        Self { employees, index }
    }

    pub fn get(
        &self,
        employee_id: &str,
    ) -> Option<&Employee> {
        self.index.get(employee_id).map(|&pos| &self.employees[pos])
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Distinct department names in first-seen order.
    pub fn departments(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for employee in &self.employees {
            if !seen.contains(&employee.department.as_str()) {
                seen.push(employee.department.as_str());
            }
        }
        seen
    }
}

impl FromIterator<Employee> for EmployeeDirectory {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
