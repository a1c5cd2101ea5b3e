//! Billing Demo CLI
//!
//! Walks the public API end to end: current-date lookup in the Addis
//! Ababa zone, payment-schedule generation, and late-fee calculation.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use zemen_billing::schedules::{LateFeePolicy, PaymentScheduleBuilder};
use zemen_core::clock;
use zemen_core::types::EthiopianDate;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("billing_demo=info".parse()?))
        .init();

    match clock::current_datetime_in_ethiopia() {
        Ok(now) => {
            tracing::info!("Current Ethiopian date: {}", now.date.format_amharic());
            tracing::info!("Current time in Ethiopia: {}", now.time);
        }
        // Gregorian days 1-7 have no counterpart under the fixed offset
        Err(err) => tracing::warn!("Today is not representable: {}", err),
    }

    let start = EthiopianDate::from_ymd(2017, 2, 20)?;
    let schedule = PaymentScheduleBuilder::new()
        .start(start)
        .frequency_months(2)
        .count(12)
        .build()?;

    tracing::info!("Bi-monthly schedule from {}:", start);
    for due in schedule.iter() {
        tracing::info!("  due {}", due.format("YYYY-MM-DD"));
    }

    let policy = LateFeePolicy::default();
    if let Some(first_due) = schedule.first_due_date() {
        let mut paid = first_due;
        paid.add_days(4);
        tracing::info!(
            "Fee for settling {} on {}: {:.2}",
            first_due,
            paid,
            policy.fee(&first_due, &paid)
        );
    }

    Ok(())
}
