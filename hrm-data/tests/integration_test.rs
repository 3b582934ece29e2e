//! Integration tests that load the shipped fixtures into an in-memory store.

use hrm_core::{
    InMemoryPayrollStore, PayrollFilter, PayrollForm, PayrollRepository, PayrollSummary,
    RepositoryError,
};
use hrm_data::{EmployeeLoader, PayrollExporter, PayrollRecordLoader};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

const EMPLOYEES_CSV: &str = include_str!("../test-data/employees.csv");
const PAYROLL_CSV: &str = include_str!("../test-data/attendance_payroll.csv");

fn setup() -> (hrm_core::EmployeeDirectory, InMemoryPayrollStore) {
    let employees = EmployeeLoader::parse(EMPLOYEES_CSV.as_bytes()).expect("Failed to parse employees");
    let drafts = PayrollRecordLoader::parse(PAYROLL_CSV.as_bytes()).expect("Failed to parse payroll");

    let mut store = InMemoryPayrollStore::new();
    PayrollRecordLoader::load(&mut store, drafts);

    (hrm_core::EmployeeDirectory::new(employees), store)
}

#[test]
fn test_load_all_fixture_records() {
    let (directory, store) = setup();

    assert_eq!(directory.len(), 7);
    assert_eq!(store.len(), 9);
    assert_eq!(store.list()[0].id, "1");
    assert_eq!(store.list()[8].id, "9");
}

#[test]
fn test_june_summary_matches_sheet_totals() {
    let (directory, store) = setup();

    let june = PayrollFilter::new("", "2024-06", "all").apply(store.list(), &directory);
    let summary = PayrollSummary::from_records(june);

    assert_eq!(summary.employee_count, 7);
    assert_eq!(summary.total_payroll, dec!(139180000));
    assert_eq!(summary.total_tax, dec!(16430000));
    assert_eq!(summary.total_insurance, dec!(8890000));
}

#[test]
fn test_filter_by_department_and_month() {
    let (directory, store) = setup();

    let selected =
        PayrollFilter::new("", "2024-06", "Phòng kinh doanh").apply(store.list(), &directory);

    let codes: Vec<_> = selected.iter().map(|r| r.employee_id.as_str()).collect();
    assert_eq!(codes, vec!["NV002", "NV007"]);
}

#[test]
fn test_search_by_name_spans_months() {
    let (directory, store) = setup();

    let selected = PayrollFilter::new("bình", "all", "all").apply(store.list(), &directory);

    let months: Vec<_> = selected.iter().map(|r| r.month.to_string()).collect();
    assert_eq!(months, vec!["2024-06", "2024-05"]);
}

#[test]
fn test_edit_via_form_then_recompute() {
    let (directory, mut store) = setup();

    let mut form = PayrollForm::from_record(store.get("4").unwrap());
    form.fine = "0".to_string();
    form.bonus = "3,500,000".to_string();
    let draft = form.validate().expect("edited form should validate");

    let updated = store.update("4", draft.into()).unwrap();
    assert_eq!(updated.net_salary(), dec!(27250000));

    let june = PayrollFilter::new("", "2024-06", "").apply(store.list(), &directory);
    assert_eq!(
        PayrollSummary::from_records(june).total_payroll,
        dec!(139780000)
    );
}

#[test]
fn test_update_and_delete_unknown_ids() {
    let (_, mut store) = setup();
    let before = store.list().to_vec();

    let result = store.update("42", Default::default());
    assert_eq!(result.unwrap_err(), RepositoryError::NotFound("42".to_string()));
    assert!(!store.delete("42"));

    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn test_export_filtered_sheet() {
    let (directory, store) = setup();
    let may = PayrollFilter::new("", "2024-05", "all").apply(store.list(), &directory);
    let mut buf = Vec::new();

    let written = PayrollExporter::write(&mut buf, may, &directory).expect("export failed");

    assert_eq!(written, 2);
    let out = String::from_utf8(buf).unwrap();
    let last = out.lines().last().unwrap();
    assert!(last.starts_with("9,NV002,Trần Thị Bình,Phòng kinh doanh,2024-05"), "got {last}");
    assert!(last.ends_with(",12760000"), "got {last}");
}
