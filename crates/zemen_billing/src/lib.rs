//! # zemen_billing: Payment Scheduling over the Ethiopian Calendar
//!
//! ## Role
//!
//! zemen_billing sits on top of [`zemen_core`] and derives billing
//! artefacts from Ethiopian dates:
//! - Due dates advanced by a month-based frequency (`schedules`)
//! - Materialised payment schedules with independent per-entry derivation
//! - Late fees on the approximate-ordinal day distance
//!
//! All schedule arithmetic follows the calendar kernel's conventions:
//! month overflow wraps a single time past Pagume, results are not
//! re-validated against month lengths, and day distances use the
//! fixed-coefficient ordinal rather than exact calendar day counts.
//!
//! ## Usage Examples
//!
//! ```rust
//! use zemen_billing::schedules::{LateFeePolicy, PaymentScheduleBuilder};
//! use zemen_core::types::EthiopianDate;
//!
//! let schedule = PaymentScheduleBuilder::new()
//!     .start(EthiopianDate::from_ymd(2017, 1, 1).unwrap())
//!     .count(3)
//!     .build()
//!     .unwrap();
//!
//! let due = schedule.first_due_date().unwrap();
//! let paid = EthiopianDate::from_ymd(2017, 1, 5).unwrap();
//! assert_eq!(LateFeePolicy::default().fee(&due, &paid), 40.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): enable serialisation for schedules and policies

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod schedules;
