//! Activity log presentation
//!
//! Renders recorded entries as display text.

use chrono::NaiveTime;

use super::history::LogEntry;

pub const DUMP_HEADER: &str = "--- ACTIVITY LOG ---";
pub const DUMP_FOOTER: &str = "--- END OF LOG ---";
pub const EMPTY_PLACEHOLDER: &str = "(no activity recorded)";

/// Formats one line as `[HH:MM:SS] message`.
pub fn format_entry(time: NaiveTime, message: &str) -> String {
    format!("[{}] {}", time.format("%H:%M:%S"), message)
}

/// Renders the full log between header and footer markers.
pub fn render_dump(entries: &[LogEntry]) -> String {
    let mut out = format!("\n{DUMP_HEADER}\n");
    if entries.is_empty() {
        out.push_str(EMPTY_PLACEHOLDER);
        out.push('\n');
    }
    for entry in entries {
        out.push_str(&entry.to_string());
        out.push('\n');
    }
    out.push_str(DUMP_FOOTER);
    out.push_str("\n\n");
    out
}
