//! Calendar year-month used to describe contribution periods.

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use thiserror::Error;

/// Years accepted in a year-month.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// Errors parsing a year-month.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PeriodError {
    #[error("invalid year-month {input:?}: expected YYYY-MM")]
    Malformed { input: String },

    #[error("invalid month {month} in {input:?}: expected 1-12")]
    MonthOutOfRange { input: String, month: u32 },

    #[error("invalid year {year} in {input:?}: expected 1-9999")]
    YearOutOfRange { input: String, year: i32 },
}

/// A calendar month of a specific year.
///
/// Only constructed through [`YearMonth::new`] or parsing, so the year is
/// always within [`YEAR_RANGE`] and the month within 1-12. Field order makes
/// the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Build a year-month, rejecting out-of-range years and months.
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        Self::checked(year, month, || format!("{year:04}-{month:02}"))
    }

    fn checked(year: i32, month: u32, input: impl Fn() -> String) -> Result<Self, PeriodError> {
        if !YEAR_RANGE.contains(&year) {
            return Err(PeriodError::YearOutOfRange {
                input: input(),
                year,
            });
        }
        if !(1..=12).contains(&month) {
            return Err(PeriodError::MonthOutOfRange {
                input: input(),
                month,
            });
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month (January = 1).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The current month in the local time zone.
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let malformed = || PeriodError::Malformed {
            input: input.to_string(),
        };

        let (year, month) = input.split_once('-').ok_or_else(malformed)?;
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;

        Self::checked(year, month, || input.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let ym: YearMonth = "2015-12".parse().unwrap();
        assert_eq!(ym, YearMonth { year: 2015, month: 12 });

        let ym: YearMonth = " 2001-1 ".parse().unwrap();
        assert_eq!(ym, YearMonth { year: 2001, month: 1 });
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "December 2015".parse::<YearMonth>(),
            Err(PeriodError::Malformed { .. })
        ));
        assert!(matches!(
            "2015".parse::<YearMonth>(),
            Err(PeriodError::Malformed { .. })
        ));
    }

    #[test]
    fn parse_rejects_month_out_of_range() {
        let err = "2015-13".parse::<YearMonth>().unwrap_err();
        assert_eq!(
            err,
            PeriodError::MonthOutOfRange {
                input: "2015-13".into(),
                month: 13
            }
        );
        assert!("2015-00".parse::<YearMonth>().is_err());
    }

    #[test]
    fn parse_rejects_year_out_of_range() {
        assert_eq!(
            "0-01".parse::<YearMonth>(),
            Err(PeriodError::YearOutOfRange {
                input: "0-01".into(),
                year: 0
            })
        );
        assert!("10000-01".parse::<YearMonth>().is_err());
    }

    #[test]
    fn parse_rejects_leading_minus() {
        // split_once sees an empty year before the first '-'
        assert!(matches!(
            "-2000000000-01".parse::<YearMonth>(),
            Err(PeriodError::Malformed { .. })
        ));
    }

    #[test]
    fn new_validates_year() {
        assert!(YearMonth::new(1, 1).is_ok());
        assert!(YearMonth::new(9999, 12).is_ok());
        assert!(matches!(
            YearMonth::new(-5, 6),
            Err(PeriodError::YearOutOfRange { year: -5, .. })
        ));
    }

    #[test]
    fn new_validates_month() {
        assert!(YearMonth::new(2020, 6).is_ok());
        assert!(YearMonth::new(2020, 0).is_err());
    }

    #[test]
    fn display_pads() {
        assert_eq!(YearMonth { year: 2001, month: 3 }.to_string(), "2001-03");
    }

    #[test]
    fn ordering_is_chronological() {
        let a = YearMonth { year: 2000, month: 12 };
        let b = YearMonth { year: 2001, month: 1 };
        assert!(a < b);
    }

    #[test]
    fn current_month_is_in_range() {
        let now = YearMonth::current();
        assert!((1..=12).contains(&now.month));
        assert!(now.year >= 2024);
    }
}
