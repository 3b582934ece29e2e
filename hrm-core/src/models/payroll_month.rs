use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static MONTH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})$").expect("month pattern is valid"));

/// Errors produced when parsing a [`PayrollMonth`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayrollMonthError {
    #[error("month '{0}' is not in YYYY-MM format")]
    Format(String),

    #[error("month '{0}' is not a valid calendar month")]
    OutOfRange(String),
}

/// A payroll period identified by year and month, written as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PayrollMonth {
    year: i32,
    month: u32,
}

impl PayrollMonth {
    /// Builds a month from its parts, rejecting anything outside
    /// years 1000..=9999 and months 1..=12.
    pub fn new(
        year: i32,
        month: u32,
    ) -> Result<Self, PayrollMonthError> {
        let raw = format!("{year:04}-{month:02}");
        if !(1000..=9999).contains(&year) {
            return Err(PayrollMonthError::OutOfRange(raw));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|_| Self { year, month })
            .ok_or(PayrollMonthError::OutOfRange(raw))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First calendar day of the period.
    pub fn first_day(&self) -> NaiveDate {
        // Constructors only admit valid year/month pairs.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Console label, e.g. `Tháng 6/2024`.
    pub fn label(&self) -> String {
        format!("Tháng {}/{}", self.month, self.year)
    }
}

impl TryFrom<NaiveDate> for PayrollMonth {
    type Error = PayrollMonthError;

    /// Fails for dates outside years 1000..=9999.
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date.year(), date.month())
    }
}

impl FromStr for PayrollMonth {
    type Err = PayrollMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let caps = MONTH_PATTERN
            .captures(trimmed)
            .ok_or_else(|| PayrollMonthError::Format(s.to_string()))?;

        let year: i32 = caps[1]
            .parse()
            .map_err(|_| PayrollMonthError::Format(s.to_string()))?;
        let month: u32 = caps[2]
            .parse()
            .map_err(|_| PayrollMonthError::Format(s.to_string()))?;

        Self::new(year, month).map_err(|_| PayrollMonthError::OutOfRange(trimmed.to_string()))
    }
}

impl TryFrom<String> for PayrollMonth {
    type Error = PayrollMonthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PayrollMonth> for String {
    fn from(month: PayrollMonth) -> Self {
        month.to_string()
    }
}

impl fmt::Display for PayrollMonth {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_well_formed_month() {
        let month: PayrollMonth = "2024-06".parse().unwrap();

        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), 6);
        assert_eq!(month.to_string(), "2024-06");
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let month: PayrollMonth = "  2024-01 ".parse().unwrap();

        assert_eq!(month.to_string(), "2024-01");
    }

    #[test]
    fn rejects_month_thirteen() {
        let err = "2024-13".parse::<PayrollMonth>().unwrap_err();

        assert_eq!(err, PayrollMonthError::OutOfRange("2024-13".to_string()));
    }

    #[test]
    fn rejects_month_zero() {
        assert!(matches!(
            "2024-00".parse::<PayrollMonth>(),
            Err(PayrollMonthError::OutOfRange(_))
        ));
    }

    #[test]
    fn rejects_other_layouts() {
        for raw in ["2024-6", "06/2024", "2024-06-01", "", "all"] {
            assert!(
                matches!(raw.parse::<PayrollMonth>(), Err(PayrollMonthError::Format(_))),
                "expected format error for {raw:?}"
            );
        }
    }

    #[test]
    fn label_uses_console_wording() {
        let month = PayrollMonth::new(2024, 6).unwrap();

        assert_eq!(month.label(), "Tháng 6/2024");
    }

    #[test]
    fn first_day_and_from_date_agree() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        let month = PayrollMonth::try_from(date).unwrap();

        assert_eq!(month.first_day(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn from_date_rejects_years_outside_four_digits() {
        for year in [0, 999, 10000] {
            let date = NaiveDate::from_ymd_opt(year, 5, 1).unwrap();

            assert!(
                matches!(PayrollMonth::try_from(date), Err(PayrollMonthError::OutOfRange(_))),
                "year {year} should be rejected"
            );
        }
    }

    #[test]
    fn orders_chronologically() {
        let earlier = PayrollMonth::new(2023, 12).unwrap();
        let later = PayrollMonth::new(2024, 1).unwrap();

        assert!(earlier < later);
    }
}
