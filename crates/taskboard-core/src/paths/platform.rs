//! Platform-specific data directory resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "TASKBOARD_DATA_DIR";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `TASKBOARD_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/taskboard`)
///
/// The directory is created if it doesn't exist.
pub fn data_root() -> Result<PathBuf, PathError> {
    let root = match env::var(DATA_DIR_ENV) {
        Ok(path) => normalize_user_path(&path)?,
        Err(_) => dirs::data_local_dir()
            .ok_or(PathError::NoDataDir)?
            .join("taskboard"),
    };

    ensure_dir(&root)?;
    Ok(root)
}

/// Create `path` and its parents if missing.
pub(super) fn ensure_dir(path: &Path) -> Result<(), PathError> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}

/// Normalize a user-provided path, expanding a leading `~`.
pub(super) fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    if trimmed == "~" || trimmed.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return Ok(home.join(trimmed.trim_start_matches('~').trim_start_matches('/')));
        }
    }

    Ok(PathBuf::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_user_path_is_rejected() {
        assert!(matches!(normalize_user_path("  "), Err(PathError::EmptyPath)));
    }

    #[test]
    fn plain_user_path_is_kept() {
        assert_eq!(
            normalize_user_path(" /tmp/tasks ").unwrap(),
            PathBuf::from("/tmp/tasks")
        );
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(normalize_user_path("~/tasks").unwrap(), home.join("tasks"));
        }
    }

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
