//! Records, date windows and the tracker that aggregates them.

pub mod record;
pub mod tracker;
pub mod window;

pub use record::{Record, DATE_FORMAT, DEFAULT_COMMENT};
pub use tracker::Tracker;
pub use window::DateWindow;
