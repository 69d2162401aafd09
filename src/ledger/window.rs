use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Length of the trailing window used for weekly stats.
pub const WEEK_DAYS: u64 = 7;

/// Half-open date range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// The single calendar day `day`.
    pub fn day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day + Days::new(1),
        }
    }

    /// The last seven days ending with `today`: `(today - 7, today]`.
    pub fn trailing_week(today: NaiveDate) -> Self {
        Self {
            start: today - Days::new(WEEK_DAYS - 1),
            end: today + Days::new(1),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}
