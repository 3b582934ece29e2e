//! Console state and text rendering for the attendance-payroll screens.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use hrm_core::{
    AttendancePayrollRecord, Employee, EmployeeDirectory, EmployeeFilter, InMemoryPayrollStore,
    PayrollFilter, PayrollMonth, PayrollRepository, PayrollSummary, currency::format_vnd,
    filter::Criterion,
};
use hrm_data::{EmployeeLoader, PayrollExporter, PayrollRecordLoader};
use tracing::info;

use crate::config::Settings;

/// Placeholder for cells whose employee is not in the directory.
const MISSING: &str = "—";

/// The loaded employee roster and payroll sheet.
#[derive(Debug, Default)]
pub struct Console {
    directory: EmployeeDirectory,
    store: InMemoryPayrollStore,
}

impl Console {
    pub fn new(
        directory: EmployeeDirectory,
        store: InMemoryPayrollStore,
    ) -> Self {
        Self { directory, store }
    }

    /// Load the employee and payroll CSV files named in `settings`.
    pub fn load(settings: &Settings) -> Result<Self> {
        let directory = EmployeeLoader::load_directory(&settings.employees_file).with_context(
            || format!("Failed to load employees: {}", settings.employees_file.display()),
        )?;

        let drafts = PayrollRecordLoader::parse_file(&settings.payroll_file).with_context(|| {
            format!("Failed to load payroll: {}", settings.payroll_file.display())
        })?;

        let mut store = InMemoryPayrollStore::new();
        let count = PayrollRecordLoader::load(&mut store, drafts);
        info!(
            employees = directory.len(),
            records = count,
            "payroll sheet loaded"
        );

        Ok(Self::new(directory, store))
    }

    pub fn directory(&self) -> &EmployeeDirectory {
        &self.directory
    }

    pub fn store(&self) -> &InMemoryPayrollStore {
        &self.store
    }

    pub fn select(
        &self,
        filter: &PayrollFilter,
    ) -> Vec<&AttendancePayrollRecord> {
        filter.apply(self.store.list(), &self.directory)
    }

    pub fn select_employees(
        &self,
        filter: &EmployeeFilter,
    ) -> Vec<&Employee> {
        filter.apply(self.directory.employees())
    }

    /// Write the filtered sheet to `path` as CSV. Returns the row count.
    pub fn export(
        &self,
        filter: &PayrollFilter,
        path: &Path,
    ) -> Result<usize> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create: {}", path.display()))?;

        let written = PayrollExporter::write(file, self.select(filter), &self.directory)
            .with_context(|| format!("Failed to export payroll to: {}", path.display()))?;

        info!(rows = written, path = %path.display(), "payroll exported");
        Ok(written)
    }
}

// ─── rendering ───────────────────────────────────────────────────────────────

struct Column {
    title: &'static str,
    numeric: bool,
}

const fn text(title: &'static str) -> Column {
    Column {
        title,
        numeric: false,
    }
}

const fn number(title: &'static str) -> Column {
    Column {
        title,
        numeric: true,
    }
}

/// Lays out `rows` under `columns`, padding by character count.
fn render_table(
    columns: &[Column],
    rows: &[Vec<String>],
) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.title.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(columns.iter().zip(&widths))
            .map(|(cell, (column, &width))| {
                if column.numeric {
                    format!("{cell:>width$}")
                } else {
                    format!("{cell:<width$}")
                }
            })
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut out = line(columns.iter().map(|c| c.title).collect());
    out.push('\n');
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}

const PAYROLL_COLUMNS: [Column; 14] = [
    text("ID"),
    text("Mã NV"),
    text("Họ tên"),
    text("Phòng ban"),
    text("Tháng"),
    number("Ngày công"),
    number("Đi muộn"),
    number("Lương cơ bản"),
    number("Tiền thưởng"),
    number("Trợ cấp"),
    number("Thuế TNCN"),
    number("BHXH"),
    number("Tiền phạt"),
    number("Tổng lương"),
];

/// The attendance-payroll table. Employees missing from the directory are
/// shown with a placeholder name rather than dropped.
pub fn render_payroll_table(
    records: &[&AttendancePayrollRecord],
    directory: &EmployeeDirectory,
) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            let employee = directory.get(&record.employee_id);
            vec![
                record.id.clone(),
                record.employee_id.clone(),
                employee.map_or(MISSING, |e| e.name.as_str()).to_string(),
                employee.map_or(MISSING, |e| e.department.as_str()).to_string(),
                record.month.to_string(),
                record.working_days.to_string(),
                record.late_days.to_string(),
                format_vnd(record.base_salary),
                format_vnd(record.bonus),
                format_vnd(record.allowances),
                format_vnd(record.tax),
                format_vnd(record.insurance),
                format_vnd(record.fine),
                format_vnd(record.net_salary()),
            ]
        })
        .collect();

    render_table(&PAYROLL_COLUMNS, &rows)
}

/// Heading for a month criterion, e.g. "Tháng 6/2024".
pub fn period_title(month: &Criterion) -> String {
    match month {
        Criterion::Any => "Tất cả các tháng".to_string(),
        Criterion::Exact(raw) => raw
            .parse::<PayrollMonth>()
            .map(|m| m.label())
            .unwrap_or_else(|_| raw.clone()),
    }
}

/// The footer cards beneath the payroll table.
pub fn render_summary(
    title: &str,
    summary: &PayrollSummary,
) -> String {
    format!(
        "{title}\n\
         Tổng nhân viên: {}\n\
         Tổng quỹ lương: {}\n\
         Tổng thuế TNCN: {}\n\
         Tổng BHXH:      {}\n",
        summary.employee_count,
        format_vnd(summary.total_payroll),
        format_vnd(summary.total_tax),
        format_vnd(summary.total_insurance),
    )
}

const EMPLOYEE_COLUMNS: [Column; 7] = [
    text("Mã NV"),
    text("Họ tên"),
    text("Giới tính"),
    text("Phòng ban"),
    text("Chức vụ"),
    text("Trạng thái"),
    text("Email"),
];

pub fn render_employees(employees: &[&Employee]) -> String {
    let rows: Vec<Vec<String>> = employees
        .iter()
        .map(|e| {
            vec![
                e.employee_id.clone(),
                e.name.clone(),
                e.gender.clone(),
                e.department.clone(),
                e.position.clone(),
                e.status.to_long_str().to_string(),
                e.email.clone(),
            ]
        })
        .collect();

    render_table(&EMPLOYEE_COLUMNS, &rows)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use hrm_core::EmployeeStatus;
    use pretty_assertions::assert_eq;
    use super::*;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../hrm-data/test-data")
            .join(name)
    }

    fn console() -> Console {
        let settings = Settings {
            employees_file: fixture("employees.csv"),
            payroll_file: fixture("attendance_payroll.csv"),
            ..Default::default()
        };
        Console::load(&settings).expect("fixtures should load")
    }

    #[test]
    fn test_load_fixtures() {
        let console = console();

        assert_eq!(console.directory().len(), 7);
        assert_eq!(console.store().len(), 9);
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let settings = Settings {
            employees_file: PathBuf::from("nowhere/employees.csv"),
            ..Default::default()
        };

        let err = Console::load(&settings).expect_err("should fail");

        assert!(
            err.to_string().contains("nowhere/employees.csv"),
            "got {err}"
        );
    }

    #[test]
    fn test_payroll_table_formats_amounts() {
        let console = console();
        let selected = console.select(&PayrollFilter::new("NV001", "2024-06", "all"));

        let table = render_payroll_table(&selected, console.directory());

        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ID  Mã NV  Họ tên"), "got {}", lines[0]);
        assert!(lines[0].ends_with("Tổng lương"));
        assert!(lines[1].contains("Nguyễn Văn An"));
        assert!(lines[1].ends_with("16.600.000 ₫"), "got {}", lines[1]);
    }

    #[test]
    fn test_payroll_table_keeps_unknown_employee() {
        let loaded = console();
        let mut records = loaded.store().list().to_vec();
        records[0].employee_id = "NV404".to_string();
        let console = Console::new(
            loaded.directory().clone(),
            InMemoryPayrollStore::with_records(records).unwrap(),
        );
        let selected = console.select(&PayrollFilter::new("nv404", "", ""));

        let table = render_payroll_table(&selected, console.directory());

        let row = table.lines().nth(1).unwrap();
        assert!(row.contains("NV404  —"), "got {row}");
    }

    #[test]
    fn test_june_summary_render() {
        let console = console();
        let filter = PayrollFilter::new("", "2024-06", "all");
        let summary = PayrollSummary::from_records(console.select(&filter));

        let out = render_summary(&period_title(&filter.month), &summary);

        assert_eq!(
            out,
            "Tháng 6/2024\n\
             Tổng nhân viên: 7\n\
             Tổng quỹ lương: 139.180.000 ₫\n\
             Tổng thuế TNCN: 16.430.000 ₫\n\
             Tổng BHXH:      8.890.000 ₫\n"
        );
    }

    #[test]
    fn test_period_title() {
        assert_eq!(period_title(&Criterion::Any), "Tất cả các tháng");
        assert_eq!(period_title(&Criterion::parse("2024-05")), "Tháng 5/2024");
        assert_eq!(period_title(&Criterion::parse("Q2")), "Q2");
    }

    #[test]
    fn test_employees_render_status_label() {
        let console = console();
        let selected = console.select_employees(&EmployeeFilter::new("", "all", "on-leave"));

        let out = render_employees(&selected);

        let rows: Vec<_> = out.lines().skip(1).collect();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].starts_with("NV005"));
        assert!(rows[0].contains(EmployeeStatus::OnLeave.to_long_str()));
    }

    #[test]
    fn test_export_writes_filtered_rows() {
        let console = console();
        let path = std::env::temp_dir().join(format!("hrm-export-{}.csv", std::process::id()));

        let written = console
            .export(&PayrollFilter::new("", "2024-05", "all"), &path)
            .expect("export should succeed");
        let contents = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(written, 2);
        assert_eq!(contents.lines().count(), 3);
        assert!(contents.lines().nth(1).unwrap().ends_with(",16150000"));
    }

    #[test]
    fn test_empty_table_is_header_only() {
        let table = render_payroll_table(&[], &EmployeeDirectory::default());

        assert_eq!(table.lines().count(), 1);
    }
}
