//! Core calendar types.
//!
//! This module provides:
//! - `date`: the [`EthiopianDate`] type with validation, conversion,
//!   formatting, and arithmetic
//! - `month`: the thirteen Ethiopian months with English and Amharic names
//! - `error`: structured error types for date construction and parsing
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level:
//! [`EthiopianDate`] from `date`, [`Month`] from `month`, and
//! [`DateError`] from `error`.

pub mod date;
pub mod error;
pub mod month;

pub use date::EthiopianDate;
pub use error::DateError;
pub use month::Month;
