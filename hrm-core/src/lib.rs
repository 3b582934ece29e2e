pub mod calculations;
pub mod currency;
pub mod filter;
pub mod models;
pub mod store;
pub mod validation;

pub use calculations::{PayrollSummary, net_salary};
pub use filter::{EmployeeFilter, PayrollFilter, filter_records};
pub use models::*;
pub use store::{InMemoryPayrollStore, PayrollRepository, RepositoryError};
pub use validation::{AttendanceForm, FieldError, PayrollForm, ValidationErrors};
