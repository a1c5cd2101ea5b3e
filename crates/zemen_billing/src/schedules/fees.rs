//! Late-fee calculation.

use zemen_core::types::EthiopianDate;

/// Default fee charged per approximate day late.
pub const DEFAULT_DAILY_FEE_RATE: f64 = 10.0;

/// Computes the fee owed for a payment made against a due date.
///
/// A payment strictly before the due date owes nothing. Any other
/// payment, same-day included, is charged
/// `difference(due, payment) * daily_rate`, where the difference is the
/// approximate-ordinal distance of
/// [`EthiopianDate::difference`] — for a same-day payment that distance
/// is zero, so the fee still comes out to 0.
///
/// # Examples
///
/// ```
/// use zemen_billing::schedules::late_fee;
/// use zemen_core::types::EthiopianDate;
///
/// let due = EthiopianDate::from_ymd(2017, 1, 1).unwrap();
/// let paid = EthiopianDate::from_ymd(2017, 1, 5).unwrap();
///
/// assert_eq!(late_fee(&due, &paid, 10.0), 40.0);
/// assert_eq!(late_fee(&due, &due, 10.0), 0.0);
/// ```
pub fn late_fee(due: &EthiopianDate, payment: &EthiopianDate, daily_rate: f64) -> f64 {
    if payment.is_before(due) {
        return 0.0;
    }
    due.difference(payment) as f64 * daily_rate
}

/// Late-fee policy carrying a configurable daily rate.
///
/// # Examples
///
/// ```
/// use zemen_billing::schedules::LateFeePolicy;
/// use zemen_core::types::EthiopianDate;
///
/// let policy = LateFeePolicy::default();
/// let due = EthiopianDate::from_ymd(2017, 1, 1).unwrap();
/// let paid = EthiopianDate::from_ymd(2017, 1, 3).unwrap();
///
/// assert_eq!(policy.fee(&due, &paid), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LateFeePolicy {
    /// Fee charged per approximate day late.
    pub daily_rate: f64,
}

impl Default for LateFeePolicy {
    /// Policy with the default daily rate of 10.
    fn default() -> Self {
        Self {
            daily_rate: DEFAULT_DAILY_FEE_RATE,
        }
    }
}

impl LateFeePolicy {
    /// Creates a policy with the given daily rate.
    pub fn new(daily_rate: f64) -> Self {
        Self { daily_rate }
    }

    /// Computes the fee for a payment under this policy.
    pub fn fee(&self, due: &EthiopianDate, payment: &EthiopianDate) -> f64 {
        late_fee(due, payment, self.daily_rate)
    }
}
