use std::{fmt, sync::Arc};

use chrono::NaiveDate;
use tracing::debug;

use super::{record::Record, window::DateWindow};
use crate::{
    time::{Clock, SystemClock},
    utils::round_places,
};

/// Daily limit plus the records counted against it.
///
/// Every "today" query reads the clock when it runs, so results move across
/// midnight without any change to the tracker itself.
#[derive(Clone)]
pub struct Tracker {
    limit: f64,
    records: Vec<Record>,
    clock: Arc<dyn Clock>,
}

impl Tracker {
    pub fn new(limit: f64) -> Self {
        Self::with_clock(limit, Arc::new(SystemClock))
    }

    pub fn with_clock(limit: f64, clock: Arc<dyn Clock>) -> Self {
        Self {
            limit,
            records: Vec::new(),
            clock,
        }
    }

    /// Appends a record. The limit is not checked.
    pub fn add_record(&mut self, record: Record) {
        debug!(
            amount = record.amount(),
            date = %record.date(),
            total = self.records.len() + 1,
            "record added"
        );
        self.records.push(record);
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Sum of amounts recorded on `day`, rounded to cents.
    pub fn stats_on(&self, day: NaiveDate) -> f64 {
        self.stats_in(DateWindow::day(day))
    }

    /// Sum of amounts whose date falls inside `window`, rounded to cents.
    pub fn stats_in(&self, window: DateWindow) -> f64 {
        let total = self
            .records
            .iter()
            .filter(|record| window.contains(record.date()))
            .fold(0.0, |acc, record| acc + record.amount());
        round_places(total, 2)
    }

    pub fn stats_today(&self) -> f64 {
        let today = self.today();
        let total = self.stats_on(today);
        debug!(%today, total, "today stats");
        total
    }

    /// Total over `(today - 7 days, today]`.
    pub fn stats_week(&self) -> f64 {
        let today = self.today();
        let total = self.stats_in(DateWindow::trailing_week(today));
        debug!(%today, total, "week stats");
        total
    }

    /// What is left of the limit today; negative once it is exceeded.
    pub fn remainder_today(&self) -> f64 {
        round_places(self.limit - self.stats_today(), 2)
    }
}

impl fmt::Debug for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracker")
            .field("limit", &self.limit)
            .field("records", &self.records)
            .field("today", &self.today())
            .finish()
    }
}
