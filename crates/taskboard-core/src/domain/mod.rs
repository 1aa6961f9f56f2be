//! Domain types for taskboard.

pub mod task;

pub use task::{NewTask, Task, TaskCategory, TaskDraft, TaskId, TaskReplacement, TaskUpdate};
