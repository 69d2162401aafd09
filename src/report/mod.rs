//! Human-readable messages built on top of a [`Tracker`](crate::ledger::Tracker).

pub mod calorie;
pub mod cash;

pub use calorie::{CalorieReport, CalorieStatus};
pub use cash::{CashReport, CashStatus};
