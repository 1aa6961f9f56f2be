//! Table formatting utilities for CLI output.

use chrono::{DateTime, Local, Utc};

/// Truncates a string to a maximum number of characters, adding "..." if needed.
///
/// Counts characters, not bytes, so accented names are never split.
///
/// # Examples
///
/// ```rust
/// use taskboard_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// assert_eq!(truncate_string("Revisión técnica", 9), "Revisi...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Render a timestamp in the local timezone, minute precision.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Checkbox-style completion marker.
pub const fn status_marker(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}
