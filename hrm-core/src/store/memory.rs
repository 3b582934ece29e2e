use tracing::{debug, warn};

use super::repository::{PayrollRepository, RepositoryError};
use crate::models::{AttendancePayrollPatch, AttendancePayrollRecord, NewAttendancePayrollRecord};

/// Process-local payroll collection.
///
/// Ids are decimal strings handed out sequentially, continuing after the
/// largest numeric id the store has seen. Non-numeric ids supplied through
/// [`with_records`](Self::with_records) are kept as-is and never reissued.
#[derive(Debug, Clone)]
pub struct InMemoryPayrollStore {
    records: Vec<AttendancePayrollRecord>,
    next_id: u64,
}

impl InMemoryPayrollStore {
    /// Create an empty store. The first record gets id `"1"`.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Seed a store with existing records, keeping their ids and order.
    ///
    /// # Errors
    /// * [`RepositoryError::DuplicateId`] when two records share an id.
    pub fn with_records(records: Vec<AttendancePayrollRecord>) -> Result<Self, RepositoryError> {
        let mut store = Self::new();
        for record in records {
            if store.position(&record.id).is_some() {
                return Err(RepositoryError::DuplicateId(record.id));
            }
            store.bump_next_id(&record.id);
            store.records.push(record);
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(
        &self,
        id: &str,
    ) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    fn bump_next_id(
        &mut self,
        id: &str,
    ) {
        if let Ok(n) = id.parse::<u64>() {
            self.next_id = self.next_id.max(n.saturating_add(1));
        }
    }

    fn allocate_id(&mut self) -> String {
        // The counter only tracks ids it parsed; never hand out one already in use.
        loop {
            let candidate = self.next_id.to_string();
            self.next_id += 1;
            if self.position(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

impl Default for InMemoryPayrollStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PayrollRepository for InMemoryPayrollStore {
    fn create(
        &mut self,
        draft: NewAttendancePayrollRecord,
    ) -> AttendancePayrollRecord {
        let id = self.allocate_id();
        let record = AttendancePayrollRecord::from_draft(id, draft);
        debug!(id = %record.id, employee_id = %record.employee_id, month = %record.month, "created payroll record");
        self.records.push(record.clone());
        record
    }

    fn get(
        &self,
        id: &str,
    ) -> Result<&AttendancePayrollRecord, RepositoryError> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    fn update(
        &mut self,
        id: &str,
        patch: AttendancePayrollPatch,
    ) -> Result<&AttendancePayrollRecord, RepositoryError> {
        let Some(pos) = self.position(id) else {
            warn!(id, "update rejected: no such payroll record");
            return Err(RepositoryError::NotFound(id.to_string()));
        };

        self.records[pos].apply(patch);
        debug!(id, "updated payroll record");
        Ok(&self.records[pos])
    }

    fn delete(
        &mut self,
        id: &str,
    ) -> bool {
        match self.position(id) {
            Some(pos) => {
                self.records.remove(pos);
                debug!(id, "deleted payroll record");
                true
            }
            None => {
                debug!(id, "delete ignored: no such payroll record");
                false
            }
        }
    }

    fn list(&self) -> &[AttendancePayrollRecord] {
        &self.records
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// tests
// ─────────────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn draft(employee_id: &str) -> NewAttendancePayrollRecord {
        NewAttendancePayrollRecord {
            employee_id: employee_id.to_string(),
            month: "2024-06".parse().unwrap(),
            working_days: 21,
            late_days: 0,
            base_salary: dec!(12000000),
            bonus: dec!(2000000),
            allowances: dec!(3000000),
            tax: dec!(1350000),
            insurance: dec!(840000),
            fine: dec!(0),
        }
    }

    fn seeded() -> InMemoryPayrollStore {
        let mut store = InMemoryPayrollStore::new();
        store.create(draft("NV001"));
        store.create(draft("NV002"));
        store.create(draft("NV003"));
        store
    }

    // ── create ───────────────────────────────────────────────────────────
    #[test]
    fn create_assigns_sequential_ids_and_appends() {
        let store = seeded();

        let ids: Vec<_> = store.list().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(store.list()[2].employee_id, "NV003");
    }

    #[test]
    fn create_returns_stored_record() {
        let mut store = InMemoryPayrollStore::new();

        let created = store.create(draft("NV007"));

        assert_eq!(store.get(&created.id), Ok(&created));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = seeded();
        store.delete("3");

        let created = store.create(draft("NV004"));

        assert_eq!(created.id, "4");
    }

    // ── with_records ─────────────────────────────────────────────────────
    #[test]
    fn seeded_store_continues_after_largest_numeric_id() {
        let records = vec![
            AttendancePayrollRecord::from_draft("7", draft("NV001")),
            AttendancePayrollRecord::from_draft("HD-x", draft("NV002")),
            AttendancePayrollRecord::from_draft("3", draft("NV003")),
        ];
        let mut store = InMemoryPayrollStore::with_records(records).unwrap();

        assert_eq!(store.create(draft("NV004")).id, "8");
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn seeding_rejects_duplicate_ids() {
        let records = vec![
            AttendancePayrollRecord::from_draft("1", draft("NV001")),
            AttendancePayrollRecord::from_draft("1", draft("NV002")),
        ];

        assert_eq!(
            InMemoryPayrollStore::with_records(records).unwrap_err(),
            RepositoryError::DuplicateId("1".to_string())
        );
    }

    #[test]
    fn allocation_skips_textual_collisions() {
        let records = vec![AttendancePayrollRecord::from_draft("1", draft("NV001"))];
        let mut store = InMemoryPayrollStore::with_records(records).unwrap();
        store.records.push(AttendancePayrollRecord::from_draft("2", draft("NV009")));

        assert_eq!(store.create(draft("NV002")).id, "3");
    }

    // ── update ───────────────────────────────────────────────────────────
    #[test]
    fn update_merges_patch_fields() {
        let mut store = seeded();

        let updated = store
            .update(
                "2",
                AttendancePayrollPatch {
                    fine: Some(dec!(100000)),
                    working_days: Some(19),
                    ..Default::default()
                },
            )
            .unwrap()
            .clone();

        assert_eq!(updated.fine, dec!(100000));
        assert_eq!(updated.working_days, 19);
        assert_eq!(updated.bonus, dec!(2000000));
        assert_eq!(store.get("2"), Ok(&updated));
    }

    #[test]
    fn update_unknown_id_reports_not_found_and_changes_nothing() {
        let mut store = seeded();
        let before = store.list().to_vec();

        let result = store.update(
            "99",
            AttendancePayrollPatch {
                bonus: Some(dec!(1)),
                ..Default::default()
            },
        );

        assert_eq!(result, Err(RepositoryError::NotFound("99".to_string())));
        assert_eq!(store.list(), before.as_slice());
    }

    // ── delete ───────────────────────────────────────────────────────────
    #[test]
    fn delete_removes_only_matching_record() {
        let mut store = seeded();

        assert!(store.delete("2"));

        let ids: Vec<_> = store.list().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn delete_twice_is_idempotent() {
        let mut store = seeded();

        assert!(store.delete("1"));
        let after_first = store.list().to_vec();
        assert!(!store.delete("1"));

        assert_eq!(store.list(), after_first.as_slice());
    }

    #[test]
    fn get_missing_record_is_not_found() {
        let store = InMemoryPayrollStore::new();

        assert!(store.is_empty());
        assert_eq!(store.get("1"), Err(RepositoryError::NotFound("1".to_string())));
    }
}
