use serde::{Deserialize, Serialize};

use super::PayrollMonth;

/// A month of attendance without pay components, as entered on the
/// attendance-only dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub employee_id: String,
    pub month: PayrollMonth,
    pub working_days: u32,
    pub paid_leave_days: u32,
    pub unpaid_leave_days: u32,
    pub late_days: u32,
    pub overtime_minutes: u32,
}

impl AttendanceEntry {
    pub fn leave_days(&self) -> u32 {
        self.paid_leave_days.saturating_add(self.unpaid_leave_days)
    }

    /// Overtime as `H:MM`, e.g. `1:30`.
    pub fn overtime_clock(&self) -> String {
        format!("{}:{:02}", self.overtime_minutes / 60, self.overtime_minutes % 60)
    }
}
