use thiserror::Error;

use crate::models::{AttendancePayrollPatch, AttendancePayrollRecord, NewAttendancePayrollRecord};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Duplicate record id: {0}")]
    DuplicateId(String),
}

/// Command and query surface over the attendance-payroll collection.
///
/// Implementations are owned by a single caller; commands take `&mut self`.
pub trait PayrollRepository {
    /// Assigns a fresh id, appends the record and returns it.
    fn create(
        &mut self,
        draft: NewAttendancePayrollRecord,
    ) -> AttendancePayrollRecord;

    fn get(
        &self,
        id: &str,
    ) -> Result<&AttendancePayrollRecord, RepositoryError>;

    /// Merges `patch` into the record with `id` and returns the result.
    ///
    /// # Errors
    /// * [`RepositoryError::NotFound`] when no record has `id`; the
    ///   collection is left untouched.
    fn update(
        &mut self,
        id: &str,
        patch: AttendancePayrollPatch,
    ) -> Result<&AttendancePayrollRecord, RepositoryError>;

    /// Removes the record with `id`. Returns `false` when there was nothing
    /// to remove, so repeated deletes are harmless.
    fn delete(
        &mut self,
        id: &str,
    ) -> bool;

    /// Every record in insertion order.
    fn list(&self) -> &[AttendancePayrollRecord];
}
