//! # zemen_core: Ethiopian Calendar Kernel
//!
//! ## Role
//!
//! zemen_core is the foundation crate of the zemen workspace, providing:
//! - The Ethiopian calendar date type (`types::date`)
//! - Month names in English and Ge'ez script (`types::month`)
//! - Fixed-date holiday lookup (`holidays`)
//! - Wall-clock helpers for the Addis Ababa zone (`clock`)
//! - Error types: `DateError` (`types::error`)
//!
//! ## Conversion model
//!
//! Gregorian interop uses a fixed-offset approximation (year −8, month
//! shifted by 8 or 4, day −7 on the way in, no day offset on the way
//! out) rather than a full calendrical algorithm. The asymmetry and its
//! consequences are documented on the conversion methods and covered by
//! tests; day-distance arithmetic uses a fixed-coefficient approximate
//! ordinal, never exact calendar day counts.
//!
//! ## Usage Examples
//!
//! ```rust
//! use zemen_core::types::EthiopianDate;
//!
//! let start = EthiopianDate::from_ymd(2017, 2, 20).unwrap();
//! assert_eq!(start.format("YYYY-MM-DD"), "2017-02-20");
//! assert_eq!(EthiopianDate::month_name(2), Some("Tikimit"));
//!
//! let due = EthiopianDate::from_ymd(2017, 1, 1).unwrap();
//! let paid = EthiopianDate::from_ymd(2017, 1, 5).unwrap();
//! assert_eq!(due.difference(&paid), 4);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: enable serialisation for `EthiopianDate` and `Month`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod clock;
pub mod holidays;
pub mod types;
