use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use hrm_cli::app::{self, Console};
use hrm_cli::config::{ConsoleConfig, Settings};
use hrm_cli::logging;
use hrm_core::{EmployeeFilter, PayrollFilter, PayrollSummary};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Attendance and payroll console.
///
/// Loads the employee roster and the monthly attendance-payroll sheet from
/// CSV, then lists, totals or exports the records.
#[derive(Debug, Parser)]
#[command(name = "hrm-console", version, about, long_about = None)]
struct Cli {
    /// TOML config file. Flags override values it sets.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Employee roster CSV.
    #[arg(long, global = true)]
    employees: Option<PathBuf>,

    /// Attendance-payroll CSV.
    #[arg(long, global = true)]
    payroll: Option<PathBuf>,

    /// Log level or EnvFilter directive (e.g. `debug`, `info,hrm_core=trace`).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct SheetFilter {
    /// Search employee code, name or department.
    #[arg(short, long, default_value = "")]
    query: String,

    /// Payroll month as `YYYY-MM`, or `all`.
    #[arg(short, long, default_value = "all")]
    month: String,

    /// Exact department name, or `all`.
    #[arg(short, long, default_value = "all")]
    department: String,
}

impl SheetFilter {
    fn to_filter(&self) -> PayrollFilter {
        PayrollFilter::new(&self.query, &self.month, &self.department)
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the filtered attendance-payroll table.
    List(SheetFilter),

    /// Print payroll totals.
    Summary {
        #[arg(short, long, default_value = "all")]
        month: String,

        #[arg(short, long, default_value = "all")]
        department: String,
    },

    /// Write the filtered sheet to a CSV file.
    Export {
        #[arg(short, long)]
        out: PathBuf,

        #[command(flatten)]
        filter: SheetFilter,
    },

    /// Print the employee directory.
    Employees {
        /// Search name or employee code.
        #[arg(short, long, default_value = "")]
        query: String,

        #[arg(short, long, default_value = "all")]
        department: String,

        /// `active`, `on-leave`, `terminated` or `all`.
        #[arg(short, long, default_value = "all")]
        status: String,
    },
}

// ─── settings ────────────────────────────────────────────────────────────────

fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let file = match &cli.config {
        Some(path) => ConsoleConfig::load(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?,
        None => ConsoleConfig::default(),
    };

    let flags = ConsoleConfig {
        employees_file: cli.employees.clone(),
        payroll_file: cli.payroll.clone(),
        log_level: cli.log_level.clone(),
        log_file: cli.log_file.clone(),
    };

    Ok(file.merge(flags).resolve())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn run(
    console: &Console,
    command: Command,
) -> Result<()> {
    match command {
        Command::List(filter) => {
            let records = console.select(&filter.to_filter());
            print!("{}", app::render_payroll_table(&records, console.directory()));
        }
        Command::Summary { month, department } => {
            let filter = PayrollFilter::new("", &month, &department);
            let summary = PayrollSummary::from_records(console.select(&filter));
            print!("{}", app::render_summary(&app::period_title(&filter.month), &summary));
        }
        Command::Export { out, filter } => {
            let written = console.export(&filter.to_filter(), &out)?;
            println!("Exported {} records to {}", written, out.display());
        }
        Command::Employees {
            query,
            department,
            status,
        } => {
            let employees = console.select_employees(&EmployeeFilter::new(&query, &department, &status));
            print!("{}", app::render_employees(&employees));
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = resolve_settings(&cli)?;

    logging::init_default_logging(&settings.log_level);
    if let Some(log_file) = &settings.log_file {
        logging::enable_file_logging(log_file)?;
    }
    debug!(?settings, "resolved settings");

    let console = Console::load(&settings)?;
    run(&console, cli.command)
}
