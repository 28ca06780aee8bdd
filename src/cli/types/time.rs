//! Calendar types: game days and displayed months.

use crate::error::{Result, StreakError};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Parse an ISO `YYYY-MM-DD` day.
pub fn parse_day(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| StreakError::InvalidDate {
        value: s.to_string(),
    })
}

/// A calendar month, written `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthSpec {
    year: i32,
    month: u32,
}

impl MonthSpec {
    /// Build a month, returning `None` when `month` is outside 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// The month a given day falls in.
    pub fn containing(day: NaiveDate) -> Self {
        Self {
            year: day.year(),
            month: day.month(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day().pred_opt().unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day.year() == self.year && day.month() == self.month
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for MonthSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthSpec {
    type Err = StreakError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || StreakError::InvalidMonth {
            value: s.to_string(),
        };
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_day_valid() {
        assert_eq!(parse_day("2025-01-15").unwrap(), day(2025, 1, 15));
        assert_eq!(parse_day(" 2024-02-29 ").unwrap(), day(2024, 2, 29));
    }

    #[test]
    fn test_parse_day_invalid() {
        assert!(parse_day("2023-02-29").is_err());
        assert!(parse_day("tomorrow").is_err());
        assert!(parse_day("").is_err());
    }

    #[test]
    fn test_month_from_str() {
        let month = MonthSpec::from_str("2025-03").unwrap();
        assert_eq!(month, MonthSpec::new(2025, 3).unwrap());
        assert_eq!(month.to_string(), "2025-03");
    }

    #[test]
    fn test_month_from_str_invalid() {
        assert!(MonthSpec::from_str("2025-13").is_err());
        assert!(MonthSpec::from_str("2025").is_err());
        assert!(MonthSpec::from_str("March").is_err());
    }

    #[test]
    fn test_month_bounds() {
        let feb = MonthSpec::new(2024, 2).unwrap();
        assert_eq!(feb.first_day(), day(2024, 2, 1));
        assert_eq!(feb.last_day(), day(2024, 2, 29));

        let dec = MonthSpec::new(2025, 12).unwrap();
        assert_eq!(dec.last_day(), day(2025, 12, 31));
    }

    #[test]
    fn test_month_next_wraps_year() {
        let dec = MonthSpec::new(2025, 12).unwrap();
        assert_eq!(dec.next(), MonthSpec::new(2026, 1).unwrap());
        assert_eq!(MonthSpec::new(2025, 3).unwrap().next().to_string(), "2025-04");
    }

    #[test]
    fn test_month_contains() {
        let month = MonthSpec::containing(day(2025, 11, 20));
        assert!(month.contains(day(2025, 11, 1)));
        assert!(!month.contains(day(2025, 12, 1)));
        assert!(!month.contains(day(2024, 11, 20)));
    }
}
