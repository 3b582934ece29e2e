//! CSV loader for attendance-payroll records.
//!
//! | Column         | Required | Notes                          |
//! |----------------|----------|--------------------------------|
//! | `employee_id`  | yes      |                                |
//! | `month`        | yes      | `YYYY-MM`                      |
//! | `working_days` | no       | 0–31, empty means 0            |
//! | `late_days`    | no       | ≥ 0, empty means 0             |
//! | `base_salary`  | no       | VND, ≥ 0                       |
//! | `bonus`        | no       |                                |
//! | `allowances`   | no       |                                |
//! | `tax`          | no       |                                |
//! | `insurance`    | no       |                                |
//! | `fine`         | no       |                                |
//!
//! Every row goes through [`PayrollForm::validate`], the same boundary the
//! create/edit dialog uses.
//!
//! ```csv
//! employee_id,month,working_days,late_days,base_salary,bonus,allowances,tax,insurance,fine
//! NV001,2024-06,22,1,15000000,1000000,3500000,1800000,1050000,50000
//! ```

use std::io::Read;
use std::path::Path;

use hrm_core::{NewAttendancePayrollRecord, PayrollForm, PayrollRepository};
use serde::Deserialize;

use crate::LoaderError;

#[derive(Debug, Deserialize)]
struct PayrollCsvRow {
    employee_id: String,
    month: String,
    #[serde(default)]
    working_days: String,
    #[serde(default)]
    late_days: String,
    #[serde(default)]
    base_salary: String,
    #[serde(default)]
    bonus: String,
    #[serde(default)]
    allowances: String,
    #[serde(default)]
    tax: String,
    #[serde(default)]
    insurance: String,
    #[serde(default)]
    fine: String,
}

impl From<PayrollCsvRow> for PayrollForm {
    fn from(row: PayrollCsvRow) -> Self {
        PayrollForm {
            employee_id: row.employee_id,
            month: row.month,
            working_days: row.working_days,
            late_days: row.late_days,
            base_salary: row.base_salary,
            bonus: row.bonus,
            allowances: row.allowances,
            tax: row.tax,
            insurance: row.insurance,
            fine: row.fine,
        }
    }
}

/// Loader for attendance-payroll fixtures.
pub struct PayrollRecordLoader;

impl PayrollRecordLoader {
    /// Parse and validate every row. Stops at the first invalid row.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<NewAttendancePayrollRecord>, LoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        csv_reader
            .deserialize::<PayrollCsvRow>()
            .enumerate()
            .map(|(idx, result)| {
                let row = idx + 1;
                PayrollForm::from(result?).validate().map_err(|errors| {
                    tracing::warn!(row, %errors, "rejected payroll row");
                    LoaderError::InvalidRow { row, errors }
                })
            })
            .collect()
    }

    /// Parse the file at `path`.
    pub fn parse_file(path: &Path) -> Result<Vec<NewAttendancePayrollRecord>, LoaderError> {
        let file = std::fs::File::open(path).map_err(|source| LoaderError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(file)
    }

    /// Create one record per draft, in order. Returns how many were added.
    pub fn load<R: PayrollRepository>(
        repo: &mut R,
        drafts: Vec<NewAttendancePayrollRecord>,
    ) -> usize {
        let count = drafts.len();
        for draft in drafts {
            repo.create(draft);
        }
        tracing::debug!(count, "loaded payroll records");
        count
    }
}
