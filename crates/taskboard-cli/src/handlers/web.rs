//! Web command handler.
//!
//! Builds the server configuration from CLI flags and runs the Axum server
//! until Ctrl+C.

use std::path::{Path, PathBuf};

use taskboard_axum::{ServerConfig, start_server};

use crate::error::CliError;

/// Directories probed for a built web client, in priority order.
pub const STATIC_DIR_CANDIDATES: [&str; 3] = ["build", "dist", "web_ui/dist"];

/// Flags of the `web` command.
#[derive(Debug, Clone, Default)]
pub struct WebOptions {
    pub host: String,
    pub port: u16,
    pub static_dir: Option<PathBuf>,
    pub api_only: bool,
    pub allowed_origins: Vec<String>,
}

/// First candidate under `base` that contains an `index.html`.
pub fn detect_static_dir(base: &Path) -> Option<PathBuf> {
    STATIC_DIR_CANDIDATES
        .iter()
        .map(|candidate| base.join(candidate))
        .find(|path| path.join("index.html").is_file())
}

/// Translate flags into a server configuration.
///
/// Static dir resolution: `--api-only` > `--static-dir` > auto-detected
/// client build > API only.
pub fn server_config(options: WebOptions, base: &Path) -> ServerConfig {
    let mut config = ServerConfig::with_defaults();
    config.host = options.host;
    config.port = options.port;

    if !options.api_only {
        config.static_dir = options.static_dir.or_else(|| detect_static_dir(base));
    }

    if !options.allowed_origins.is_empty() {
        config = config.with_allowed_origins(options.allowed_origins);
    }

    config
}

/// Execute the web command.
pub async fn execute(options: WebOptions) -> Result<(), CliError> {
    let config = server_config(options, Path::new("."));
    let port = config.port;

    println!();
    if let Some(ref dir) = config.static_dir {
        println!("  taskboard web server starting...");
        println!();
        println!("  Serving UI from: {}", dir.display());
        println!("  Local:   http://localhost:{port}");
        println!("  Network: http://{}", config.bind_address());
    } else {
        println!("  taskboard web server starting (API only)...");
        println!();
        println!("  API:     http://localhost:{port}/api/tasks");
        println!();
        println!("  Tip: Use --static-dir to serve a frontend build");
    }
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    start_server(config)
        .await
        .map_err(|e| CliError::Core(format!("Web server failed: {e:#}")))
}
