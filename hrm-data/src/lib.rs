pub mod employees;
pub mod error;
pub mod export;
pub mod payroll;

pub use employees::EmployeeLoader;
pub use error::{ExportError, LoaderError};
pub use export::PayrollExporter;
pub use payroll::PayrollRecordLoader;
