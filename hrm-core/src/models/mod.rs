mod attendance;
mod attendance_payroll;
mod employee;
mod payroll_month;

pub use attendance::AttendanceEntry;
pub use attendance_payroll::{
    AttendancePayrollPatch, AttendancePayrollRecord, NewAttendancePayrollRecord,
};
pub use employee::{Employee, EmployeeDirectory, EmployeeStatus};
pub use payroll_month::{PayrollMonth, PayrollMonthError};
