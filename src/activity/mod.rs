//! Activity logging
//!
//! Event recording, time sources and log presentation.

pub mod clock;
pub mod format;
pub mod history;

pub use clock::{Clock, FixedClock, SystemClock};
pub use format::{format_entry, render_dump};
pub use history::{ActivityLog, EventSink, LogEntry};
