#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{NewTask, Task, TaskCategory, TaskDraft, TaskId, TaskReplacement, TaskUpdate};
pub use paths::{PathError, data_root, database_path};
pub use ports::{CoreError, Repos, RepositoryError, TaskRepository};
pub use services::TaskService;
