//! Temporal wire and application types
//!
//! - `timestamp`: UTC instants, the store's temporal wire type
//! - `date`: calendar dates, the application-side date type

pub mod date;
pub mod timestamp;

pub use date::CalendarDate;
pub use timestamp::Timestamp;
