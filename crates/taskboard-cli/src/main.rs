//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to `TaskService`.
//! Handlers reach the database only through `CliContext`.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use taskboard_cli::handlers::list::ListFilter;
use taskboard_cli::handlers::web::WebOptions;
use taskboard_cli::{Cli, CliConfig, CliContext, CliError, Commands, bootstrap, handlers};

/// Log to stderr. `RUST_LOG` wins; otherwise the server logs at info and
/// one-shot commands stay quiet unless `--verbose` is given.
fn init_tracing(verbose: bool, serving: bool) {
    let default = match (verbose, serving) {
        (true, _) => "debug",
        (false, true) => "info",
        (false, false) => "warn",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn open_context() -> Result<CliContext, CliError> {
    let config = CliConfig::with_defaults().map_err(|e| CliError::Config(format!("{e:#}")))?;
    bootstrap(config)
        .await
        .map_err(|e| CliError::Database(format!("{e:#}")))
}

async fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Web {
            port,
            host,
            static_dir,
            api_only,
            allowed_origins,
        } => {
            handlers::web::execute(WebOptions {
                host,
                port,
                static_dir,
                api_only,
                allowed_origins,
            })
            .await
        }
        Commands::Paths => handlers::paths::execute(),
        Commands::List { completed, pending } => {
            let ctx = open_context().await?;
            handlers::list::execute(&ctx, ListFilter::from_flags(completed, pending)).await
        }
        Commands::Add {
            nombre,
            description,
            tipo,
            numero,
        } => {
            let ctx = open_context().await?;
            handlers::add::execute(&ctx, nombre, description, tipo, numero).await
        }
        Commands::Show { task } => {
            let ctx = open_context().await?;
            handlers::show::execute(&ctx, &task).await
        }
        Commands::Toggle { task } => {
            let ctx = open_context().await?;
            handlers::toggle::execute(&ctx, &task).await
        }
        Commands::Remove { task } => {
            let ctx = open_context().await?;
            handlers::remove::execute(&ctx, &task).await
        }
        Commands::ClearCompleted => {
            let ctx = open_context().await?;
            handlers::clear_completed::execute(&ctx).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose, matches!(cli.command, Some(Commands::Web { .. })));

    let Some(command) = cli.command else {
        // No command provided - show help
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    };

    match run(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}
