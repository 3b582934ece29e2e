//! CSV loader for the employee directory.
//!
//! | Column        | Notes                                        |
//! |---------------|----------------------------------------------|
//! | `employee_id` | employee code, e.g. `NV001`                  |
//! | `name`        |                                              |
//! | `gender`      |                                              |
//! | `department`  |                                              |
//! | `position`    |                                              |
//! | `status`      | one of `active`, `on-leave`, `terminated`    |
//! | `email`       |                                              |
//! | `phone`       |                                              |
//!
//! Headers are matched by name, so column order does not matter.

use std::io::Read;
use std::path::Path;

use hrm_core::{Employee, EmployeeDirectory, EmployeeStatus};
use serde::Deserialize;

use crate::LoaderError;

#[derive(Debug, Deserialize)]
struct EmployeeCsvRow {
    employee_id: String,
    name: String,
    #[serde(default)]
    gender: String,
    department: String,
    #[serde(default)]
    position: String,
    status: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
}

impl EmployeeCsvRow {
    fn into_employee(
        self,
        row: usize,
    ) -> Result<Employee, LoaderError> {
        let status =
            EmployeeStatus::parse(&self.status).ok_or_else(|| LoaderError::InvalidStatus {
                status: self.status.clone(),
                row,
            })?;

        Ok(Employee {
            employee_id: self.employee_id,
            name: self.name,
            gender: self.gender,
            department: self.department,
            position: self.position,
            status,
            email: self.email,
            phone: self.phone,
        })
    }
}

/// Loader for the employee roster.
pub struct EmployeeLoader;

impl EmployeeLoader {
    /// Parse employees from a CSV reader, in file order.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<Employee>, LoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        csv_reader
            .deserialize::<EmployeeCsvRow>()
            .enumerate()
            .map(|(idx, result)| result?.into_employee(idx + 1))
            .collect()
    }

    /// Read `path` and build a directory from it.
    pub fn load_directory(path: &Path) -> Result<EmployeeDirectory, LoaderError> {
        let file = std::fs::File::open(path).map_err(|source| LoaderError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let employees = Self::parse(file)?;
        tracing::debug!(count = employees.len(), path = %path.display(), "loaded employees");
        Ok(EmployeeDirectory::new(employees))
    }
}
