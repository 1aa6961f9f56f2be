//! Filesystem locations used by taskboard.

mod database;
mod error;
mod platform;

pub use database::{DATABASE_ENV, DATABASE_FILE_NAME, database_path};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root};
