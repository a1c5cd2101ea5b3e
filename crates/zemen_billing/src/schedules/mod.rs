//! Payment scheduling over the Ethiopian calendar.
//!
//! This module provides:
//! - [`PaymentSchedule`]: a materialised sequence of due dates
//! - [`PaymentScheduleBuilder`]: builder pattern for constructing schedules
//! - [`Frequency`]: billing frequency enumeration
//! - [`due_date_after`]: the single due-date derivation
//! - [`late_fee`] and [`LateFeePolicy`]: fee calculation for late payments
//!
//! # Examples
//!
//! ```
//! use zemen_billing::schedules::{late_fee, PaymentScheduleBuilder};
//! use zemen_core::types::EthiopianDate;
//!
//! let schedule = PaymentScheduleBuilder::new()
//!     .start(EthiopianDate::from_ymd(2017, 2, 20).unwrap())
//!     .frequency_months(2)
//!     .count(3)
//!     .build()
//!     .unwrap();
//!
//! let months: Vec<u32> = schedule.iter().map(|d| d.month).collect();
//! assert_eq!(months, vec![2, 4, 6]);
//! ```

mod error;
mod fees;
mod frequency;
mod schedule;

pub use error::ScheduleError;
pub use fees::{late_fee, LateFeePolicy, DEFAULT_DAILY_FEE_RATE};
pub use frequency::Frequency;
pub use schedule::{due_date_after, PaymentSchedule, PaymentScheduleBuilder};
