//! Paths command handler.
//!
//! Displays the resolved data locations for diagnostics.

use std::env;

use taskboard_core::paths::{DATA_DIR_ENV, DATABASE_ENV, data_root, database_path};

use crate::error::CliError;

/// Execute the paths command.
///
/// Prints `key = value` lines, followed by any environment overrides in effect.
pub fn execute() -> Result<(), CliError> {
    println!("data_root = {}", data_root()?.display());
    println!("database = {}", database_path()?.display());

    for var in [DATA_DIR_ENV, DATABASE_ENV] {
        if let Ok(value) = env::var(var) {
            println!("# {var} is set: {value}");
        }
    }
    Ok(())
}
