#![doc(test(attr(deny(warnings))))]

//! Daily Limit tracks dated money and calorie records against a daily limit and
//! reports what is left for today and what was consumed over the last week.

pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod time;
pub mod utils;

pub use errors::{LimitError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Daily Limit tracing initialized.");
    });
}
