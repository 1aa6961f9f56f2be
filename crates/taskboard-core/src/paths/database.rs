//! Database path resolution.
//!
//! Provides the canonical path to the taskboard `SQLite` database file.

use std::env;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::{data_root, ensure_dir, normalize_user_path};

/// Environment variable pointing directly at a database file.
pub const DATABASE_ENV: &str = "TASKBOARD_DATABASE";

/// File name of the database inside the data root.
pub const DATABASE_FILE_NAME: &str = "taskboard.db";

/// Get the path to the taskboard database file.
///
/// `TASKBOARD_DATABASE` wins when set; otherwise the file is
/// `data/taskboard.db` under the data root. The parent directory is
/// created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    if let Ok(raw) = env::var(DATABASE_ENV) {
        let path = normalize_user_path(&raw)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_dir(parent)?;
        }
        return Ok(path);
    }

    let data_dir = data_root()?.join("data");
    ensure_dir(&data_dir)?;
    Ok(data_dir.join(DATABASE_FILE_NAME))
}
