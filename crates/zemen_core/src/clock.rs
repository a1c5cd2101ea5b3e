//! Wall-clock helpers for the Addis Ababa timezone.
//!
//! The host clock is the only outside input this crate reads. Zone
//! projection and time-of-day rendering are delegated to chrono and
//! chrono-tz; the fixed-offset conversion of
//! [`EthiopianDate::from_gregorian`] does the rest.

use chrono::{Local, Utc};
use chrono_tz::Africa::Addis_Ababa;

use crate::types::date::EthiopianDate;
use crate::types::error::DateError;

/// The current moment in Ethiopia: calendar date plus display time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentDateTime {
    /// Current date in the Ethiopian calendar.
    pub date: EthiopianDate,
    /// Time of day in 12-hour clock form, e.g. `"2:35 PM"`.
    pub time: String,
}

/// Reads the wall clock in the `Africa/Addis_Ababa` zone and converts it
/// to an Ethiopian date with a 12-hour display time.
///
/// # Errors
///
/// Returns `DateError::InvalidDate` when the current Gregorian
/// day-of-month falls in 1-7, which the fixed-offset mapping cannot
/// represent.
pub fn current_datetime_in_ethiopia() -> Result<CurrentDateTime, DateError> {
    let now = Utc::now().with_timezone(&Addis_Ababa);
    let date = EthiopianDate::from_gregorian(now.naive_local())?;
    let time = now.format("%-I:%M %p").to_string();
    Ok(CurrentDateTime { date, time })
}

/// Reads the local wall clock and converts it to an Ethiopian date.
///
/// # Errors
///
/// Same representability limit as [`current_datetime_in_ethiopia`].
pub fn current_ethiopian_date() -> Result<EthiopianDate, DateError> {
    EthiopianDate::from_gregorian(Local::now().naive_local())
}

/// Absolute distance between two dates on the approximate-ordinal scale.
///
/// Thin wrapper over [`EthiopianDate::difference`].
///
/// # Examples
///
/// ```
/// use zemen_core::clock::difference_between_dates;
/// use zemen_core::types::EthiopianDate;
///
/// let a = EthiopianDate::from_ymd(2017, 1, 1).unwrap();
/// let b = EthiopianDate::from_ymd(2017, 1, 5).unwrap();
/// assert_eq!(difference_between_dates(&a, &b), 4);
/// ```
pub fn difference_between_dates(a: &EthiopianDate, b: &EthiopianDate) -> i64 {
    a.difference(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difference_wrapper_matches_method() {
        let a = EthiopianDate::from_ymd(2016, 13, 1).unwrap();
        let b = EthiopianDate::from_ymd(2017, 1, 1).unwrap();
        assert_eq!(difference_between_dates(&a, &b), a.difference(&b));
    }

    #[test]
    fn test_current_date_is_valid_or_unrepresentable() {
        // The fixed offset cannot represent Gregorian days 1-7, so the
        // clock helpers legitimately fail on those days of the month.
        match current_ethiopian_date() {
            Ok(date) => {
                assert!(EthiopianDate::is_valid_date(date.year, date.month, date.day));
            }
            Err(err) => assert!(matches!(err, DateError::InvalidDate { .. })),
        }
    }

    #[test]
    fn test_current_datetime_has_twelve_hour_display() {
        if let Ok(now) = current_datetime_in_ethiopia() {
            assert!(now.time.ends_with("AM") || now.time.ends_with("PM"));
        }
    }
}
