#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use daily_limit::{ledger::Tracker, time::FixedClock};

/// Reference "today" shared by the integration suites.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 4, 12).expect("valid date")
}

pub fn days_ago(n: u64) -> NaiveDate {
    today() - Days::new(n)
}

/// Builds a tracker pinned to [`today`] and hands back the clock for time travel.
pub fn pinned_tracker(limit: f64) -> (Tracker, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::on(today()));
    (Tracker::with_clock(limit, clock.clone()), clock)
}
