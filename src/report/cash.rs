use std::fmt;

use tracing::warn;

use crate::{
    currency::Currency,
    ledger::{Record, Tracker},
};

/// Outcome of converting today's money remainder into a currency.
#[derive(Debug, Clone, PartialEq)]
pub enum CashStatus {
    /// The requested code is not one of `rub`, `usd`, `eur`.
    Unknown(String),
    /// Spending matches the limit to the cent.
    Exhausted,
    Remaining {
        amount: f64,
        currency: Currency,
    },
    /// Overspend; `amount` is positive.
    Debt {
        amount: f64,
        currency: Currency,
    },
}

impl fmt::Display for CashStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CashStatus::Unknown(code) => write!(f, "{code} is an unknown currency"),
            CashStatus::Exhausted => f.write_str("No money left, hold on"),
            CashStatus::Remaining { amount, currency } => {
                write!(f, "Remaining today: {amount} {currency}")
            }
            CashStatus::Debt { amount, currency } => write!(
                f,
                "No money left, hold on: your debt is {amount} {currency}"
            ),
        }
    }
}

/// Money counter: a tracker whose limit is a daily budget in rubles.
#[derive(Debug, Clone)]
pub struct CashReport {
    tracker: Tracker,
}

impl CashReport {
    pub fn new(tracker: Tracker) -> Self {
        Self { tracker }
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn add_record(&mut self, record: Record) {
        self.tracker.add_record(record);
    }

    /// Classifies today's remainder for the currency `code`.
    ///
    /// The remainder is rounded to cents before the zero check and converted
    /// (and rounded again) only afterwards.
    pub fn status(&self, code: &str) -> CashStatus {
        let Ok(currency) = code.parse::<Currency>() else {
            warn!(code, "unknown currency requested");
            return CashStatus::Unknown(code.to_string());
        };

        let remaining = self.tracker.remainder_today();
        if remaining == 0.0 {
            return CashStatus::Exhausted;
        }

        let amount = currency.convert(remaining);
        if amount > 0.0 {
            CashStatus::Remaining { amount, currency }
        } else {
            CashStatus::Debt {
                amount: amount.abs(),
                currency,
            }
        }
    }

    pub fn message(&self, code: &str) -> String {
        self.status(code).to_string()
    }
}

impl From<Tracker> for CashReport {
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

    fn report(limit: f64, spent: &[f64]) -> CashReport {
        let today = NaiveDate::from_ymd_opt(2021, 4, 12).unwrap();
        let clock = Arc::new(FixedClock::on(today));
        let mut report = CashReport::new(Tracker::with_clock(limit, clock));
        for amount in spent {
            report.add_record(Record::on(*amount, None, today));
        }
        report
    }

    #[test]
    fn untouched_limit_in_each_currency() {
        let report = report(1000.0, &[]);
        assert_eq!(report.message("rub"), "Remaining today: 1000 rub");
        assert_eq!(report.message("usd"), "Remaining today: 12.82 USD");
        assert_eq!(report.message("eur"), "Remaining today: 10.86 Euro");
    }

    #[test]
    fn unknown_code_is_echoed() {
        let report = report(1000.0, &[]);
        assert_eq!(report.message("xyz"), "xyz is an unknown currency");
        assert_eq!(
            report.status("Eur"),
            CashStatus::Unknown("Eur".to_string())
        );
    }

    #[test]
    fn exhausted_limit_ignores_currency() {
        let report = report(1000.0, &[600.0, 400.0]);
        for code in ["rub", "usd", "eur"] {
            assert_eq!(report.message(code), "No money left, hold on");
        }
    }

    #[test]
    fn unknown_code_wins_over_exhausted_limit() {
        let report = report(1000.0, &[1000.0]);
        assert_eq!(report.message("gbp"), "gbp is an unknown currency");
    }

    #[test]
    fn remainder_rounding_to_zero_counts_as_exhausted() {
        let report = report(1000.0, &[999.996]);
        assert_eq!(report.status("usd"), CashStatus::Exhausted);
    }

    #[test]
    fn overspend_reports_positive_debt() {
        let report = report(1000.0, &[1186.0, 84.0, 1140.0]);
        assert_eq!(
            report.message("rub"),
            "No money left, hold on: your debt is 1410 rub"
        );
        assert_eq!(
            report.message("usd"),
            "No money left, hold on: your debt is 18.08 USD"
        );
        assert_eq!(
            report.message("eur"),
            "No money left, hold on: your debt is 15.31 Euro"
        );
    }

    #[test]
    fn remainder_below_a_cent_after_conversion_reads_as_debt() {
        let report = report(1000.0, &[999.99]);
        assert_eq!(
            report.status("eur"),
            CashStatus::Debt {
                amount: 0.0,
                currency: Currency::Eur,
            }
        );
        assert_eq!(
            report.message("eur"),
            "No money left, hold on: your debt is 0 Euro"
        );
        assert_eq!(report.message("rub"), "Remaining today: 0.01 rub");
    }
}
