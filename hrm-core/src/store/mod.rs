pub mod memory;
pub mod repository;

pub use memory::InMemoryPayrollStore;
pub use repository::{PayrollRepository, RepositoryError};
