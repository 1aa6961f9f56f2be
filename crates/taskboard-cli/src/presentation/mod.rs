//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no domain transforms.

pub mod task_display;
pub mod tables;

pub use task_display::{display_task_details, display_task_table};
pub use tables::{format_timestamp, print_separator, status_marker, truncate_string};
