//! Time types for the vega P&L engine.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - ACT/365.25 year fractions (`years_to_expiry`) — the convention the
//!   vol-change models are calibrated against
//!
//! The engine never reads the wall clock itself: every time-dependent
//! computation takes an explicit reference date, and `Date::today()` is only
//! meant for the outermost call boundary.

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Days per year under the ACT/365.25 convention used throughout the engine.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 parsing/formatting and day arithmetic. Expiry axes are
/// stored as `Date` values so that bucket classification and year fractions
/// never re-parse strings.
///
/// # Examples
///
/// ```
/// use vega_core::types::Date;
///
/// let date = Date::from_ymd(2026, 6, 19).unwrap();
/// let parsed: Date = "2026-06-19".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let later = date.offset_days(10);
/// assert_eq!(later - date, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// Returns `Err(DateError::InvalidDate)` for impossible dates such as
    /// February 30th.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    ///
    /// Only intended for the outermost call boundary (CLI); library code
    /// threads explicit reference dates instead.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format (YYYY-MM-DD).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the date shifted by `days` (negative values shift backwards).
    pub fn offset_days(self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the underlying NaiveDate for access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// Positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Calendar days from `reference` to `expiry`.
///
/// Negative when the expiry is in the past.
pub fn days_to_expiry(reference: Date, expiry: Date) -> i64 {
    expiry - reference
}

/// Years from `reference` to `expiry` under ACT/365.25.
///
/// Negative when the expiry is in the past; the vol-change models treat any
/// non-positive value as an expired instrument.
///
/// # Examples
///
/// ```
/// use vega_core::types::{years_to_expiry, Date};
///
/// let reference = Date::from_ymd(2026, 2, 6).unwrap();
/// let expiry = Date::from_ymd(2027, 2, 6).unwrap();
/// let t = years_to_expiry(reference, expiry);
/// assert!((t - 365.0 / 365.25).abs() < 1e-12);
/// ```
pub fn years_to_expiry(reference: Date, expiry: Date) -> f64 {
    (expiry - reference) as f64 / DAYS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_ymd_valid() {
        let date = Date::from_ymd(2026, 6, 19).unwrap();
        assert_eq!(date.year(), 2026);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 19);
    }

    #[test]
    fn test_from_ymd_invalid() {
        assert!(Date::from_ymd(2026, 2, 30).is_err());
        assert!(Date::from_ymd(2026, 13, 1).is_err());
        // 2026 is not a leap year
        assert!(Date::from_ymd(2026, 2, 29).is_err());
    }

    #[test]
    fn test_parse_and_display_roundtrip() {
        let date = Date::parse("2026-06-19").unwrap();
        assert_eq!(format!("{}", date), "2026-06-19");

        let parsed: Date = "2026-06-19".parse().unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Date::parse("not-a-date").is_err());
        assert!(Date::parse("2026/06/19").is_err());
    }

    #[test]
    fn test_subtraction() {
        let start = Date::from_ymd(2026, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 11).unwrap();
        assert_eq!(end - start, 10);
        assert_eq!(start - end, -10);
    }

    #[test]
    fn test_offset_days() {
        let date = Date::from_ymd(2026, 2, 6).unwrap();
        assert_eq!(format!("{}", date.offset_days(30)), "2026-03-08");
        assert_eq!(date.offset_days(-37), Date::from_ymd(2025, 12, 31).unwrap());
    }

    #[test]
    fn test_years_to_expiry_one_calendar_year() {
        let reference = Date::from_ymd(2026, 2, 6).unwrap();
        let expiry = Date::from_ymd(2027, 2, 6).unwrap();
        assert_relative_eq!(
            years_to_expiry(reference, expiry),
            365.0 / 365.25,
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_years_to_expiry_expired_is_negative() {
        let reference = Date::from_ymd(2026, 2, 6).unwrap();
        let expiry = Date::from_ymd(2026, 1, 6).unwrap();
        assert!(years_to_expiry(reference, expiry) < 0.0);
        assert_eq!(days_to_expiry(reference, expiry), -31);
    }

    #[test]
    fn test_years_to_expiry_same_day_is_zero() {
        let date = Date::from_ymd(2026, 2, 6).unwrap();
        assert_eq!(years_to_expiry(date, date), 0.0);
    }

    #[test]
    fn test_date_ordering() {
        let earlier = Date::from_ymd(2026, 1, 1).unwrap();
        let later = Date::from_ymd(2026, 12, 31).unwrap();
        assert!(earlier < later);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_date_serde_roundtrip() {
            let date = Date::from_ymd(2026, 6, 19).unwrap();
            let json = serde_json::to_string(&date).unwrap();
            assert_eq!(json, "\"2026-06-19\"");

            let parsed: Date = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, date);
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = Date> {
            (2000i32..2100i32, 1u32..13u32, 1u32..29u32)
                .prop_map(|(y, m, d)| Date::from_ymd(y, m, d).unwrap())
        }

        proptest! {
            #[test]
            fn year_fraction_is_antisymmetric(a in date_strategy(), b in date_strategy()) {
                let forward = years_to_expiry(a, b);
                let backward = years_to_expiry(b, a);
                prop_assert!((forward + backward).abs() < 1e-12);
            }

            #[test]
            fn year_fraction_is_additive(a in date_strategy(), b in date_strategy(), c in date_strategy()) {
                let mut dates = [a, b, c];
                dates.sort();
                let [d1, d2, d3] = dates;
                let lhs = years_to_expiry(d1, d3);
                let rhs = years_to_expiry(d1, d2) + years_to_expiry(d2, d3);
                prop_assert!((lhs - rhs).abs() < 1e-12);
            }

            #[test]
            fn offset_days_inverts_subtraction(a in date_strategy(), days in -5000i64..5000i64) {
                let shifted = a.offset_days(days);
                prop_assert_eq!(shifted - a, days);
            }
        }
    }
}
