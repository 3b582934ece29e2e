use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayrollMonth;

/// One employee's attendance-and-payroll entry for a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendancePayrollRecord {
    pub id: String,
    pub employee_id: String,
    pub month: PayrollMonth,

    // Attendance
    pub working_days: u32,
    pub late_days: u32,

    // Earnings
    pub base_salary: Decimal,
    pub bonus: Decimal,
    pub allowances: Decimal,

    // Deductions
    pub tax: Decimal,
    pub insurance: Decimal,
    pub fine: Decimal,
}

impl AttendancePayrollRecord {
    /// Builds a stored record from a draft and the id the store assigned.
    pub fn from_draft(
        id: impl Into<String>,
        draft: NewAttendancePayrollRecord,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: draft.employee_id,
            month: draft.month,
            working_days: draft.working_days,
            late_days: draft.late_days,
            base_salary: draft.base_salary,
            bonus: draft.bonus,
            allowances: draft.allowances,
            tax: draft.tax,
            insurance: draft.insurance,
            fine: draft.fine,
        }
    }

    /// Take-home amount for this record. See
    /// [`net_salary`](crate::calculations::net_salary).
    pub fn net_salary(&self) -> Decimal {
        crate::calculations::net_salary(self)
    }

    /// Replaces every field the patch carries, leaving the rest untouched.
    /// The id is never changed.
    pub fn apply(
        &mut self,
        patch: AttendancePayrollPatch,
    ) {
        if let Some(employee_id) = patch.employee_id {
            self.employee_id = employee_id;
        }
        if let Some(month) = patch.month {
            self.month = month;
        }
        if let Some(working_days) = patch.working_days {
            self.working_days = working_days;
        }
        if let Some(late_days) = patch.late_days {
            self.late_days = late_days;
        }
        if let Some(base_salary) = patch.base_salary {
            self.base_salary = base_salary;
        }
        if let Some(bonus) = patch.bonus {
            self.bonus = bonus;
        }
        if let Some(allowances) = patch.allowances {
            self.allowances = allowances;
        }
        if let Some(tax) = patch.tax {
            self.tax = tax;
        }
        if let Some(insurance) = patch.insurance {
            self.insurance = insurance;
        }
        if let Some(fine) = patch.fine {
            self.fine = fine;
        }
    }
}

/// For creating new records (no id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAttendancePayrollRecord {
    pub employee_id: String,
    pub month: PayrollMonth,
    pub working_days: u32,
    pub late_days: u32,
    pub base_salary: Decimal,
    pub bonus: Decimal,
    pub allowances: Decimal,
    pub tax: Decimal,
    pub insurance: Decimal,
    pub fine: Decimal,
}

/// Field replacements for an existing record. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendancePayrollPatch {
    pub employee_id: Option<String>,
    pub month: Option<PayrollMonth>,
    pub working_days: Option<u32>,
    pub late_days: Option<u32>,
    pub base_salary: Option<Decimal>,
    pub bonus: Option<Decimal>,
    pub allowances: Option<Decimal>,
    pub tax: Option<Decimal>,
    pub insurance: Option<Decimal>,
    pub fine: Option<Decimal>,
}

impl AttendancePayrollPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// An edit dialog submits the whole form, which replaces every field.
impl From<NewAttendancePayrollRecord> for AttendancePayrollPatch {
    fn from(draft: NewAttendancePayrollRecord) -> Self {
        Self {
            employee_id: Some(draft.employee_id),
            month: Some(draft.month),
            working_days: Some(draft.working_days),
            late_days: Some(draft.late_days),
            base_salary: Some(draft.base_salary),
            bonus: Some(draft.bonus),
            allowances: Some(draft.allowances),
            tax: Some(draft.tax),
            insurance: Some(draft.insurance),
            fine: Some(draft.fine),
        }
    }
}
