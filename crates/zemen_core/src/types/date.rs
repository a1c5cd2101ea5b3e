//! The Ethiopian calendar date type.
//!
//! This module provides:
//! - `EthiopianDate`: a date (with time-of-day) in the Ethiopian calendar
//! - Leap-year and validity rules for the 13-month calendar
//! - Fixed-offset conversion to and from the Gregorian calendar
//! - Template formatting, comparison, and approximate day arithmetic
//!
//! # Examples
//!
//! ```
//! use zemen_core::types::EthiopianDate;
//!
//! let start = EthiopianDate::from_ymd(2016, 1, 25).unwrap();
//! let mut date = start;
//! date.add_days(10);
//!
//! assert_eq!((date.year, date.month, date.day), (2016, 2, 5));
//! assert_eq!(date.format("YYYY-MM-DD"), "2016-02-05");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use std::fmt;
use std::str::FromStr;

use super::error::DateError;
use super::month::Month;

/// A date (and time-of-day) in the Ethiopian calendar.
///
/// The Ethiopian calendar has twelve 30-day months followed by Pagume, a
/// 5-day intercalary month (6 days in leap years). Validated construction
/// goes through [`EthiopianDate::from_ymd`] or
/// [`EthiopianDate::from_ymd_hms`]; fields are public so that month/day
/// arithmetic can operate on the raw components, and mutating helpers do
/// not re-validate the result. Time-of-day components are carried through
/// conversions and formatting but take no part in date comparison.
///
/// # Examples
///
/// ```
/// use zemen_core::types::EthiopianDate;
///
/// let date = EthiopianDate::from_ymd(2017, 2, 5).unwrap();
/// assert_eq!(date.year, 2017);
/// assert_eq!(date.month, 2);
/// assert_eq!(date.day, 5);
///
/// // Pagume day 6 exists only in leap years
/// assert!(EthiopianDate::from_ymd(2015, 13, 6).is_ok());
/// assert!(EthiopianDate::from_ymd(2016, 13, 6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EthiopianDate {
    /// Year. Any integer the leap rule accepts, negatives included.
    pub year: i32,
    /// Month (1-13, where 13 is Pagume).
    pub month: u32,
    /// Day of month (1-30; at most 5 or 6 in Pagume).
    pub day: u32,
    /// Hour of day (0-23).
    pub hour: u32,
    /// Minute (0-59).
    pub minute: u32,
    /// Second (0-59).
    pub second: u32,
}

impl EthiopianDate {
    /// Creates a date at midnight from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Ethiopian year
    /// * `month` - Month (1-13)
    /// * `day` - Day of month (1-30, capped at 5/6 in month 13)
    ///
    /// # Returns
    /// `Ok(EthiopianDate)` if the components pass
    /// [`EthiopianDate::is_valid_date`], `Err(DateError::InvalidDate)`
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use zemen_core::types::EthiopianDate;
    ///
    /// let date = EthiopianDate::from_ymd(2017, 2, 20).unwrap();
    /// assert_eq!(date.hour, 0);
    ///
    /// assert!(EthiopianDate::from_ymd(2017, 14, 1).is_err());
    /// assert!(EthiopianDate::from_ymd(2017, 1, 31).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        Self::from_ymd_hms(year, month, day, 0, 0, 0)
    }

    /// Creates a date with an explicit time-of-day.
    ///
    /// Only the date components are validated; time-of-day values are
    /// stored as given, matching the calendar rule that validity is a
    /// property of `(year, month, day)` alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use zemen_core::types::EthiopianDate;
    ///
    /// let date = EthiopianDate::from_ymd_hms(2016, 1, 4, 9, 30, 0).unwrap();
    /// assert_eq!(date.hour, 9);
    /// assert_eq!(date.minute, 30);
    /// ```
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, DateError> {
        if !Self::is_valid_date(year, month, day) {
            return Err(DateError::InvalidDate {
                year,
                month: month as i32,
                day: day as i32,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Returns true if the given Ethiopian year is a leap year.
    ///
    /// A year is a leap year iff `year mod 4 == 3`, using the Euclidean
    /// remainder so the four-year cycle holds for negative years as well.
    ///
    /// # Examples
    ///
    /// ```
    /// use zemen_core::types::EthiopianDate;
    ///
    /// assert!(EthiopianDate::is_leap_year(2015));
    /// assert!(!EthiopianDate::is_leap_year(2016));
    /// assert!(EthiopianDate::is_leap_year(-1)); // -1 mod 4 == 3
    /// ```
    #[inline]
    pub fn is_leap_year(year: i32) -> bool {
        year.rem_euclid(4) == 3
    }

    /// Returns true if `(year, month, day)` names a real Ethiopian date.
    ///
    /// Months run 1-13 and days 1-30; month 13 (Pagume) is capped at 6
    /// days in leap years and 5 otherwise. This is a pure check with no
    /// receiver, usable before construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use zemen_core::types::EthiopianDate;
    ///
    /// assert!(EthiopianDate::is_valid_date(2015, 13, 6));
    /// assert!(!EthiopianDate::is_valid_date(2016, 13, 6));
    /// assert!(!EthiopianDate::is_valid_date(2016, 13, 7));
    /// assert!(!EthiopianDate::is_valid_date(2016, 0, 1));
    /// ```
    pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
        if !(1..=13).contains(&month) {
            return false;
        }
        if !(1..=30).contains(&day) {
            return false;
        }
        if month == 13 {
            let pagume_days = if Self::is_leap_year(year) { 6 } else { 5 };
            if day > pagume_days {
                return false;
            }
        }
        true
    }

    /// Converts a Gregorian calendar point to an Ethiopian date.
    ///
    /// Uses the fixed-offset approximation: `year - 8`, month shifted by
    /// 8 (months September-December) or forward by 4 (January-August),
    /// `day - 7`. Time-of-day passes through unchanged.
    ///
    /// Gregorian days 1-7 map to a non-positive Ethiopian day and fail
    /// construction; that is an inherent limit of the fixed offset, not
    /// repaired here.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use zemen_core::types::EthiopianDate;
    ///
    /// let greg = NaiveDate::from_ymd_opt(2024, 9, 11)
    ///     .unwrap()
    ///     .and_hms_opt(8, 15, 0)
    ///     .unwrap();
    /// let eth = EthiopianDate::from_gregorian(greg).unwrap();
    ///
    /// assert_eq!((eth.year, eth.month, eth.day), (2016, 1, 4));
    /// assert_eq!(eth.hour, 8);
    ///
    /// // Days 1-7 are unrepresentable under the fixed offset
    /// let early = NaiveDate::from_ymd_opt(2024, 9, 5)
    ///     .unwrap()
    ///     .and_hms_opt(0, 0, 0)
    ///     .unwrap();
    /// assert!(EthiopianDate::from_gregorian(early).is_err());
    /// ```
    pub fn from_gregorian(dt: NaiveDateTime) -> Result<Self, DateError> {
        let greg_year = dt.year();
        let greg_month = dt.month();
        let greg_day = dt.day() as i32;

        let year = greg_year - 8;
        let month = if greg_month >= 9 {
            greg_month - 8
        } else {
            greg_month + 4
        };
        let day = greg_day - 7;

        if day < 1 {
            return Err(DateError::InvalidDate {
                year,
                month: month as i32,
                day,
            });
        }

        Self::from_ymd_hms(year, month, day as u32, dt.hour(), dt.minute(), dt.second())
    }

    /// Converts this Ethiopian date to a Gregorian calendar point.
    ///
    /// Inverse of the month/year mapping only: `year + 8`, month shifted
    /// back by 4 or 8, and the day carried over as-is (no inverse of the
    /// `-7` day offset, so a round trip through
    /// [`EthiopianDate::from_gregorian`] lands 7 days early). Time-of-day
    /// passes through unchanged.
    ///
    /// Combinations the Gregorian calendar cannot represent (e.g. a
    /// 30-day Ethiopian month landing on February) are returned as
    /// `Err(DateError::InvalidDate)` rather than rolled over.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Datelike, NaiveDate};
    /// use zemen_core::types::EthiopianDate;
    ///
    /// let eth = EthiopianDate::from_ymd(2016, 1, 4).unwrap();
    /// let greg = eth.to_gregorian().unwrap();
    ///
    /// assert_eq!((greg.year(), greg.month(), greg.day()), (2024, 9, 4));
    /// ```
    pub fn to_gregorian(&self) -> Result<NaiveDateTime, DateError> {
        let year = self.year + 8;
        let month = if self.month <= 4 {
            self.month + 8
        } else {
            self.month - 4
        };
        let day = self.day;

        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(self.hour, self.minute, self.second))
            .ok_or(DateError::InvalidDate {
                year,
                month: month as i32,
                day: day as i32,
            })
    }

    /// Looks up the English name of a month by its 1-indexed number.
    ///
    /// Returns `None` for numbers outside 1-13.
    ///
    /// # Examples
    ///
    /// ```
    /// use zemen_core::types::EthiopianDate;
    ///
    /// assert_eq!(EthiopianDate::month_name(1), Some("Meskerem"));
    /// assert_eq!(EthiopianDate::month_name(13), Some("Pagume"));
    /// assert_eq!(EthiopianDate::month_name(14), None);
    /// ```
    pub fn month_name(month: u32) -> Option<&'static str> {
        Month::from_number(month).map(|m| m.name())
    }

    /// Renders the date through a token template.
    ///
    /// Recognised tokens are `YYYY` (year, unpadded), `MM` (month,
    /// zero-padded to two digits), `DD` (day, zero-padded to two digits),
    /// and `MMMM` (English month name). Substitution is a single pass in
    /// that fixed order, replacing only the first occurrence of each
    /// token. A repeated token is therefore substituted once, and an
    /// `MMMM` token is consumed as `MM` plus a residue before the name
    /// substitution runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use zemen_core::types::EthiopianDate;
    ///
    /// let date = EthiopianDate::from_ymd(2017, 2, 5).unwrap();
    /// assert_eq!(date.format("YYYY-MM-DD"), "2017-02-05");
    /// assert_eq!(date.format("DD/MM/YYYY"), "05/02/2017");
    /// ```
    pub fn format(&self, template: &str) -> String {
        let month_name = Self::month_name(self.month).unwrap_or("");
        template
            .replacen("YYYY", &self.year.to_string(), 1)
            .replacen("MM", &format!("{:02}", self.month), 1)
            .replacen("DD", &format!("{:02}", self.day), 1)
            .replacen("MMMM", month_name, 1)
    }

    /// Renders the date as `"<day> <Amharic month name> <year>"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use zemen_core::types::EthiopianDate;
    ///
    /// let new_year = EthiopianDate::from_ymd(2017, 1, 1).unwrap();
    /// assert_eq!(new_year.format_amharic(), "1 መስከረም 2017");
    /// ```
    pub fn format_amharic(&self) -> String {
        let name = Month::from_number(self.month)
            .map(|m| m.amharic_name())
            .unwrap_or("");
        format!("{} {} {}", self.day, name, self.year)
    }

    /// Advances the date in place by the given number of days.
    ///
    /// Normalisation treats every month, Pagume included, as 30 days:
    /// while the day exceeds 30 it is reduced by 30 and the month
    /// incremented, rolling month 13 over to month 1 of the next year.
    /// The result is not re-validated, so advancing into Pagume can leave
    /// a day beyond its true 5/6-day length.
    ///
    /// Returns the receiver to allow chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use zemen_core::types::EthiopianDate;
    ///
    /// let mut date = EthiopianDate::from_ymd(2016, 1, 25).unwrap();
    /// date.add_days(10);
    /// assert_eq!((date.month, date.day), (2, 5));
    ///
    /// // Chaining mutates the same value twice
    /// date.add_days(30).add_days(30);
    /// assert_eq!(date.month, 4);
    /// ```
    pub fn add_days(&mut self, days: u32) -> &mut Self {
        self.day += days;
        while self.day > 30 {
            self.day -= 30;
            self.month += 1;
            if self.month > 13 {
                self.month = 1;
                self.year += 1;
            }
        }
        self
    }

    /// Returns the approximate ordinal of this date.
    ///
    /// The ordinal is the fixed-coefficient metric
    /// `365 * year + 30 * month + day`. It ignores leap days and the
    /// short 13th month, so it is a deterministic day-distance scale
    /// rather than an exact calendar day count.
    ///
    /// # Examples
    ///
    /// ```
    /// use zemen_core::types::EthiopianDate;
    ///
    /// let date = EthiopianDate::from_ymd(2017, 1, 5).unwrap();
    /// assert_eq!(date.approximate_ordinal(), 365 * 2017 + 30 + 5);
    /// ```
    #[inline]
    pub fn approximate_ordinal(&self) -> i64 {
        365 * self.year as i64 + 30 * self.month as i64 + self.day as i64
    }

    /// Returns the absolute distance between two dates on the
    /// approximate-ordinal scale.
    ///
    /// Always non-negative and zero for dates with equal
    /// `(year, month, day)`. This is the distance used by late-fee
    /// calculation and is deliberately not an exact calendar day count.
    ///
    /// # Examples
    ///
    /// ```
    /// use zemen_core::types::EthiopianDate;
    ///
    /// let due = EthiopianDate::from_ymd(2017, 1, 1).unwrap();
    /// let paid = EthiopianDate::from_ymd(2017, 1, 5).unwrap();
    ///
    /// assert_eq!(due.difference(&paid), 4);
    /// assert_eq!(paid.difference(&due), 4);
    /// ```
    pub fn difference(&self, other: &EthiopianDate) -> i64 {
        (self.approximate_ordinal() - other.approximate_ordinal()).abs()
    }

    /// Returns true if this date falls strictly before `other`.
    ///
    /// Comparison is lexicographic over `(year, month, day)`;
    /// time-of-day is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use zemen_core::types::EthiopianDate;
    ///
    /// let a = EthiopianDate::from_ymd(2016, 13, 5).unwrap();
    /// let b = EthiopianDate::from_ymd(2017, 1, 1).unwrap();
    ///
    /// assert!(a.is_before(&b));
    /// assert!(!b.is_before(&a));
    /// ```
    pub fn is_before(&self, other: &EthiopianDate) -> bool {
        (self.year, self.month, self.day) < (other.year, other.month, other.day)
    }

    /// Returns true if this date falls strictly after `other`.
    pub fn is_after(&self, other: &EthiopianDate) -> bool {
        !self.is_before(other) && !self.is_equal(other)
    }

    /// Returns true if both dates have the same `(year, month, day)`.
    ///
    /// Time-of-day is ignored, unlike the derived `PartialEq` which
    /// compares every field.
    pub fn is_equal(&self, other: &EthiopianDate) -> bool {
        (self.year, self.month, self.day) == (other.year, other.month, other.day)
    }

    /// Parses a date from `YYYY-MM-DD` form (unpadded year accepted).
    ///
    /// # Examples
    ///
    /// ```
    /// use zemen_core::types::EthiopianDate;
    ///
    /// let date = EthiopianDate::parse("2017-02-05").unwrap();
    /// assert_eq!((date.year, date.month, date.day), (2017, 2, 5));
    ///
    /// assert!(EthiopianDate::parse("2017-14-01").is_err());
    /// assert!(EthiopianDate::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let (negative, rest) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let mut parts = rest.splitn(3, '-');
        let mut component = |name: &str| {
            parts
                .next()
                .filter(|p| !p.is_empty())
                .ok_or_else(|| DateError::Parse(format!("missing {} in {:?}", name, s)))
        };

        let year_str = component("year")?;
        let month_str = component("month")?;
        let day_str = component("day")?;

        let year: i32 = year_str
            .parse()
            .map_err(|_| DateError::Parse(format!("invalid year in {:?}", s)))?;
        let month: u32 = month_str
            .parse()
            .map_err(|_| DateError::Parse(format!("invalid month in {:?}", s)))?;
        let day: u32 = day_str
            .parse()
            .map_err(|_| DateError::Parse(format!("invalid day in {:?}", s)))?;

        Self::from_ymd(if negative { -year } else { year }, month, day)
    }
}

impl fmt::Display for EthiopianDate {
    /// Formats the date as `YYYY-MM-DD` (unpadded year).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for EthiopianDate {
    type Err = DateError;

    /// Parses a date from `YYYY-MM-DD` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EthiopianDate::parse(s)
    }
}
