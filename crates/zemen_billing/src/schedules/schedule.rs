//! Payment schedule generation.

use zemen_core::types::EthiopianDate;

use super::error::ScheduleError;
use super::frequency::Frequency;

/// Computes the due date `frequency_months` Ethiopian months after `start`.
///
/// The result is a new value built from the start date's
/// `(year, month, day)` with time-of-day reset to midnight. Month
/// overflow is normalised with a single wraparound pass: a month beyond
/// 13 is reduced by 13 once, incrementing the year. Advancing by 14 or
/// more months can therefore leave an over-range month; that single-wrap
/// behaviour is part of the schedule contract and is not generalised.
/// The result is not re-validated against month lengths, so a start on
/// day 20 advanced into Pagume keeps day 20.
///
/// # Examples
///
/// ```
/// use zemen_billing::schedules::due_date_after;
/// use zemen_core::types::EthiopianDate;
///
/// let start = EthiopianDate::from_ymd(2017, 2, 20).unwrap();
/// let due = due_date_after(&start, 2);
/// assert_eq!((due.year, due.month, due.day), (2017, 4, 20));
///
/// // Wrapping past Pagume rolls into the next year
/// let late_start = EthiopianDate::from_ymd(2017, 12, 10).unwrap();
/// let wrapped = due_date_after(&late_start, 3);
/// assert_eq!((wrapped.year, wrapped.month, wrapped.day), (2018, 2, 10));
/// ```
pub fn due_date_after(start: &EthiopianDate, frequency_months: u32) -> EthiopianDate {
    let mut due = EthiopianDate {
        year: start.year,
        month: start.month,
        day: start.day,
        hour: 0,
        minute: 0,
        second: 0,
    };
    due.month += frequency_months;
    if due.month > 13 {
        due.month -= 13;
        due.year += 1;
    }
    due
}

/// A materialised, ascending sequence of payment due dates.
///
/// Every entry is derived independently from the same start date, so the
/// schedule is a pure function of its index: entry `i` is the start date
/// advanced by `frequency_months * i` months. The full sequence is built
/// eagerly and owned by the caller.
///
/// # Examples
///
/// ```
/// use zemen_billing::schedules::PaymentSchedule;
/// use zemen_core::types::EthiopianDate;
///
/// let start = EthiopianDate::from_ymd(2017, 2, 20).unwrap();
/// let schedule = PaymentSchedule::generate(&start, 2, 3);
///
/// let months: Vec<u32> = schedule.iter().map(|d| d.month).collect();
/// assert_eq!(months, vec![2, 4, 6]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaymentSchedule {
    /// Due dates in ascending schedule order.
    due_dates: Vec<EthiopianDate>,
}

impl PaymentSchedule {
    /// Generates a schedule of `count` due dates from a start date.
    ///
    /// Entry `i` (0-indexed) is [`due_date_after`]`(start, frequency_months * i)`,
    /// applied to the original start each time rather than chained, so a
    /// single entry's wraparound never compounds into later entries.
    /// `count == 0` yields an empty schedule.
    pub fn generate(start: &EthiopianDate, frequency_months: u32, count: usize) -> Self {
        let due_dates = (0..count)
            .map(|i| due_date_after(start, frequency_months * i as u32))
            .collect();
        Self { due_dates }
    }

    /// Returns the due dates in schedule order.
    #[inline]
    pub fn due_dates(&self) -> &[EthiopianDate] {
        &self.due_dates
    }

    /// Returns the number of due dates.
    #[inline]
    pub fn len(&self) -> usize {
        self.due_dates.len()
    }

    /// Returns whether the schedule is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.due_dates.is_empty()
    }

    /// Returns the first due date, if any.
    #[inline]
    pub fn first_due_date(&self) -> Option<EthiopianDate> {
        self.due_dates.first().copied()
    }

    /// Returns the last due date, if any.
    #[inline]
    pub fn last_due_date(&self) -> Option<EthiopianDate> {
        self.due_dates.last().copied()
    }

    /// Returns an iterator over the due dates.
    pub fn iter(&self) -> impl Iterator<Item = &EthiopianDate> {
        self.due_dates.iter()
    }
}

/// Builder for payment schedules with a start date, frequency, and count.
///
/// Defaults to monthly payments (`frequency_months = 1`) and twelve
/// instalments.
///
/// # Examples
///
/// ```
/// use zemen_billing::schedules::{Frequency, PaymentScheduleBuilder};
/// use zemen_core::types::EthiopianDate;
///
/// let schedule = PaymentScheduleBuilder::new()
///     .start(EthiopianDate::from_ymd(2017, 2, 20).unwrap())
///     .frequency(Frequency::Quarterly)
///     .count(4)
///     .build()
///     .unwrap();
///
/// assert_eq!(schedule.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct PaymentScheduleBuilder {
    start: Option<EthiopianDate>,
    frequency_months: u32,
    count: usize,
}

impl Default for PaymentScheduleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentScheduleBuilder {
    /// Creates a builder with monthly frequency and twelve instalments.
    pub fn new() -> Self {
        Self {
            start: None,
            frequency_months: 1,
            count: 12,
        }
    }

    /// Sets the schedule start date.
    pub fn start(mut self, date: EthiopianDate) -> Self {
        self.start = Some(date);
        self
    }

    /// Sets the payment frequency from a [`Frequency`].
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency_months = frequency.months();
        self
    }

    /// Sets the payment frequency as a raw month count.
    pub fn frequency_months(mut self, months: u32) -> Self {
        self.frequency_months = months;
        self
    }

    /// Sets the number of instalments.
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Builds the schedule.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::MissingField` when no start date was set.
    pub fn build(self) -> Result<PaymentSchedule, ScheduleError> {
        let start = self
            .start
            .ok_or(ScheduleError::MissingField { field: "start" })?;
        Ok(PaymentSchedule::generate(
            &start,
            self.frequency_months,
            self.count,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> EthiopianDate {
        EthiopianDate::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_due_date_after_zero_months() {
        let start = EthiopianDate::from_ymd_hms(2017, 2, 20, 9, 30, 0).unwrap();
        let due = due_date_after(&start, 0);

        assert_eq!((due.year, due.month, due.day), (2017, 2, 20));
        // Time-of-day is dropped on the cloned value
        assert_eq!((due.hour, due.minute, due.second), (0, 0, 0));
    }

    #[test]
    fn test_due_date_after_simple_advance() {
        let due = due_date_after(&ymd(2017, 2, 20), 2);
        assert_eq!((due.year, due.month, due.day), (2017, 4, 20));
    }

    #[test]
    fn test_due_date_after_wraps_year_once() {
        let due = due_date_after(&ymd(2017, 12, 10), 3);
        assert_eq!((due.year, due.month, due.day), (2018, 2, 10));
    }

    #[test]
    fn test_due_date_after_day_is_not_revalidated() {
        // Advancing day 20 into Pagume keeps day 20
        let due = due_date_after(&ymd(2017, 11, 20), 2);
        assert_eq!((due.year, due.month, due.day), (2017, 13, 20));
        assert!(!EthiopianDate::is_valid_date(due.year, due.month, due.day));
    }

    #[test]
    fn test_due_date_after_large_advance_wraps_only_once() {
        // 14 months from month 2 is 16; one wrap leaves month 3 next year,
        // but 27 months leaves an over-range month 16 after the single pass.
        let due = due_date_after(&ymd(2017, 2, 20), 27);
        assert_eq!((due.year, due.month), (2018, 16));
    }

    #[test]
    fn test_generate_is_independent_per_entry() {
        let start = ymd(2017, 2, 20);
        let schedule = PaymentSchedule::generate(&start, 2, 3);

        let entries: Vec<(i32, u32, u32)> = schedule
            .iter()
            .map(|d| (d.year, d.month, d.day))
            .collect();
        assert_eq!(
            entries,
            vec![(2017, 2, 20), (2017, 4, 20), (2017, 6, 20)]
        );
    }

    #[test]
    fn test_generate_first_entry_is_start_date() {
        let start = ymd(2017, 2, 20);
        let schedule = PaymentSchedule::generate(&start, 1, 12);

        let first = schedule.first_due_date().unwrap();
        assert!(first.is_equal(&start));
        assert_eq!(schedule.len(), 12);
    }

    #[test]
    fn test_generate_year_wrap_mid_schedule() {
        // Monthly from month 10: entries 10, 11, 12, 13, then 1 next year
        let schedule = PaymentSchedule::generate(&ymd(2017, 10, 5), 1, 5);
        let entries: Vec<(i32, u32)> = schedule.iter().map(|d| (d.year, d.month)).collect();
        assert_eq!(
            entries,
            vec![(2017, 10), (2017, 11), (2017, 12), (2017, 13), (2018, 1)]
        );
    }

    #[test]
    fn test_generate_zero_count_is_empty() {
        let schedule = PaymentSchedule::generate(&ymd(2017, 1, 1), 1, 0);
        assert!(schedule.is_empty());
        assert_eq!(schedule.first_due_date(), None);
        assert_eq!(schedule.last_due_date(), None);
    }

    #[test]
    fn test_generate_is_ascending() {
        let schedule = PaymentSchedule::generate(&ymd(2017, 1, 15), 2, 6);
        for pair in schedule.due_dates().windows(2) {
            assert!(pair[0].is_before(&pair[1]));
        }
    }

    #[test]
    fn test_builder_defaults() {
        let schedule = PaymentScheduleBuilder::new()
            .start(ymd(2017, 1, 1))
            .build()
            .unwrap();

        // Twelve monthly instalments by default
        assert_eq!(schedule.len(), 12);
        assert_eq!(schedule.last_due_date().unwrap().month, 12);
    }

    #[test]
    fn test_builder_with_frequency_enum() {
        let via_enum = PaymentScheduleBuilder::new()
            .start(ymd(2017, 2, 20))
            .frequency(Frequency::Quarterly)
            .count(4)
            .build()
            .unwrap();
        let via_months = PaymentScheduleBuilder::new()
            .start(ymd(2017, 2, 20))
            .frequency_months(3)
            .count(4)
            .build()
            .unwrap();

        assert_eq!(via_enum, via_months);
    }

    #[test]
    fn test_builder_missing_start() {
        let result = PaymentScheduleBuilder::new().count(3).build();
        assert!(matches!(
            result,
            Err(ScheduleError::MissingField { field: "start" })
        ));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = EthiopianDate> {
            (1900i32..2200i32, 1u32..=13u32, 1u32..=30u32)
                .prop_filter_map("valid Ethiopian date", |(y, m, d)| {
                    EthiopianDate::from_ymd(y, m, d).ok()
                })
        }

        proptest! {
            #[test]
            fn test_schedule_entries_match_direct_derivation(
                start in date_strategy(),
                frequency in 1u32..13u32,
                count in 0usize..24usize,
            ) {
                let schedule = PaymentSchedule::generate(&start, frequency, count);
                prop_assert_eq!(schedule.len(), count);

                for (i, due) in schedule.iter().enumerate() {
                    let expected = due_date_after(&start, frequency * i as u32);
                    prop_assert_eq!(*due, expected);
                }
            }

            #[test]
            fn test_due_day_is_preserved(
                start in date_strategy(),
                frequency in 0u32..13u32,
            ) {
                let due = due_date_after(&start, frequency);
                prop_assert_eq!(due.day, start.day);
            }
        }
    }
}
