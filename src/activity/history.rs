//! In-memory activity log
//!
//! Append-only record of timestamped events for the current run.

use std::fmt;

use chrono::NaiveTime;

use super::clock::{Clock, SystemClock};
use super::format::{format_entry, render_dump};

/// Append-only destination for activity messages.
pub trait EventSink {
    fn record(&mut self, message: String);
}

/// Captures raw messages without timestamps.
impl EventSink for Vec<String> {
    fn record(&mut self, message: String) {
        self.push(message);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn record(&mut self, message: String) {
        (**self).record(message);
    }
}

/// A single recorded event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub time: NaiveTime,
    pub message: String,
}

impl LogEntry {
    pub fn new(time: NaiveTime, message: impl Into<String>) -> Self {
        Self {
            time,
            message: message.into(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_entry(self.time, &self.message))
    }
}

/// Ordered, timestamped activity history.
#[derive(Debug, Default)]
pub struct ActivityLog<C = SystemClock> {
    clock: C,
    entries: Vec<LogEntry>,
}

impl ActivityLog<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> ActivityLog<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            entries: Vec::new(),
        }
    }

    /// Stamps `message` with the current time and appends it.
    ///
    /// The new entry is returned so it can be shown right away.
    pub fn append(&mut self, message: impl Into<String>) -> &LogEntry {
        let entry = LogEntry::new(self.clock.now(), message);
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries appended after the first `mark` entries.
    pub fn entries_since(&self, mark: usize) -> &[LogEntry] {
        self.entries.get(mark..).unwrap_or(&[])
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Full log rendered for display.
    pub fn dump(&self) -> String {
        render_dump(&self.entries)
    }
}

impl<C: Clock> EventSink for ActivityLog<C> {
    fn record(&mut self, message: String) {
        self.append(message);
    }
}
