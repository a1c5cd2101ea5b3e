//! Error types for Ethiopian date handling.

use thiserror::Error;

/// Errors that can occur when constructing, converting, or parsing dates.
///
/// # Variants
/// - `InvalidDate`: components that do not name a representable date
/// - `Parse`: failed to parse a date string
///
/// # Examples
/// ```
/// use zemen_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2015, month: 13, day: 7 };
/// assert_eq!(format!("{}", err), "invalid date: 2015-13-7");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Date components that do not name a representable date.
    ///
    /// Components are carried as signed values so that conversion results
    /// that fall outside the calendar (e.g. a non-positive day produced by
    /// the fixed-offset mapping) are reported as computed.
    #[error("invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component.
        year: i32,
        /// Month component as computed.
        month: i32,
        /// Day component as computed.
        day: i32,
    },

    /// Failed to parse a date string.
    #[error("date parse error: {0}")]
    Parse(String),
}
