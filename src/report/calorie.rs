use std::fmt;

use crate::{
    ledger::{Record, Tracker},
    utils::round_whole,
};

/// Outcome of comparing today's calories with the limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalorieStatus {
    StopEating,
    /// `remaining` is a whole number of kcal.
    CanEat { remaining: f64 },
}

impl fmt::Display for CalorieStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalorieStatus::StopEating => f.write_str("Stop eating!"),
            CalorieStatus::CanEat { remaining } => write!(
                f,
                "You can eat more today, but no more than {remaining} kcal total."
            ),
        }
    }
}

/// Calorie counter: a tracker whose limit is a daily kcal budget.
#[derive(Debug, Clone)]
pub struct CalorieReport {
    tracker: Tracker,
}

impl CalorieReport {
    pub fn new(tracker: Tracker) -> Self {
        Self { tracker }
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn add_record(&mut self, record: Record) {
        self.tracker.add_record(record);
    }

    pub fn status(&self) -> CalorieStatus {
        let remaining = round_whole(self.tracker.remainder_today());
        if remaining <= 0.0 {
            CalorieStatus::StopEating
        } else {
            CalorieStatus::CanEat { remaining }
        }
    }

    pub fn message(&self) -> String {
        self.status().to_string()
    }
}

impl From<Tracker> for CalorieReport {
    fn from(tracker: Tracker) -> Self {
        Self::new(tracker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn report(limit: f64, eaten: &[f64]) -> CalorieReport {
        let today = NaiveDate::from_ymd_opt(2021, 4, 12).unwrap();
        let clock = Arc::new(FixedClock::on(today));
        let mut report = CalorieReport::new(Tracker::with_clock(limit, clock));
        for amount in eaten {
            report.add_record(Record::on(*amount, None, today));
        }
        report
    }

    #[test]
    fn overspend_stops_eating() {
        let report = report(10000.0, &[10000.0, 200.0]);
        assert_eq!(report.status(), CalorieStatus::StopEating);
        assert_eq!(report.message(), "Stop eating!");
    }

    #[test]
    fn exact_limit_stops_eating() {
        assert_eq!(report(2000.0, &[2000.0]).message(), "Stop eating!");
    }

    #[test]
    fn remaining_is_rounded_to_whole_kcal() {
        let report = report(10000.0, &[8999.6]);
        let status = report.status();
        assert_eq!(status, CalorieStatus::CanEat { remaining: 1000.0 });
        assert_eq!(
            report.message(),
            "You can eat more today, but no more than 1000 kcal total."
        );
    }

    #[test]
    fn large_limits_print_in_full() {
        let report = report(1e20, &[]);
        assert_eq!(
            report.message(),
            "You can eat more today, but no more than 100000000000000000000 kcal total."
        );
    }

    #[test]
    fn half_kcal_left_rounds_down_to_nothing() {
        assert_eq!(report(100.0, &[99.5]).status(), CalorieStatus::StopEating);
    }
}
