//! Console configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then command-line flags. Later layers only replace values they set.
//!
//! ```toml
//! employees_file = "data/employees.csv"
//! payroll_file = "data/attendance_payroll.csv"
//! log_level = "debug"
//! log_file = "hrm-console.log"
//! ```
//!
//! Relative paths in a config file are resolved against the file's directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_EMPLOYEES_FILE: &str = "employees.csv";
pub const DEFAULT_PAYROLL_FILE: &str = "attendance_payroll.csv";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// One configuration layer. Unset fields fall through to the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    pub employees_file: Option<PathBuf>,
    pub payroll_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl ConsoleConfig {
    pub fn from_toml_str(
        source: &str,
        origin: &str,
    ) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    /// Read a config file and anchor its relative paths at the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&source, &path.display().to_string())?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        tracing::debug!(path = %path.display(), "loaded console config");
        Ok(config.relative_to(base))
    }

    fn relative_to(
        self,
        base: &Path,
    ) -> Self {
        let anchor = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        Self {
            employees_file: self.employees_file.map(anchor),
            payroll_file: self.payroll_file.map(anchor),
            log_level: self.log_level,
            log_file: self.log_file.map(anchor),
        }
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(
        self,
        other: ConsoleConfig,
    ) -> Self {
        Self {
            employees_file: other.employees_file.or(self.employees_file),
            payroll_file: other.payroll_file.or(self.payroll_file),
            log_level: other.log_level.or(self.log_level),
            log_file: other.log_file.or(self.log_file),
        }
    }

    /// Fill remaining gaps with the built-in defaults.
    pub fn resolve(self) -> Settings {
        Settings {
            employees_file: self
                .employees_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_EMPLOYEES_FILE)),
            payroll_file: self
                .payroll_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PAYROLL_FILE)),
            log_level: self
                .log_level
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_file: self.log_file,
        }
    }
}

/// Fully resolved settings the console runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub employees_file: PathBuf,
    pub payroll_file: PathBuf,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        ConsoleConfig::default().resolve()
    }
}
