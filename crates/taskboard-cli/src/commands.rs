//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands.
///
/// Commands that take a `task` argument accept either the task's UUID or
/// its number.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (API and optional static client)
    Web {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = taskboard_axum::bootstrap::DEFAULT_PORT)]
        port: u16,
        /// Address to bind
        #[arg(long, default_value = taskboard_axum::bootstrap::DEFAULT_HOST)]
        host: String,
        /// Directory holding the built web client
        #[arg(long)]
        static_dir: Option<PathBuf>,
        /// Serve only the API, even if a client build is found
        #[arg(long, conflicts_with = "static_dir")]
        api_only: bool,
        /// Restrict CORS to this origin (repeatable; default allows any)
        #[arg(long = "allowed-origin")]
        allowed_origins: Vec<String>,
    },

    /// List tasks ordered by number
    List {
        /// Only show completed tasks
        #[arg(long, conflicts_with = "pending")]
        completed: bool,
        /// Only show open tasks
        #[arg(long)]
        pending: bool,
    },

    /// Add a task
    Add {
        /// Task name
        nombre: String,
        /// Task description
        #[arg(short, long = "description")]
        description: Option<String>,
        /// Category (Personal, Trabajo, Estudio, Hogar, Salud, Otro)
        #[arg(short, long)]
        tipo: Option<String>,
        /// Explicit task number (assigned automatically when omitted)
        #[arg(short, long)]
        numero: Option<i64>,
    },

    /// Show one task in detail
    Show {
        /// Task UUID or number
        task: String,
    },

    /// Flip a task between open and completed
    Toggle {
        /// Task UUID or number
        task: String,
    },

    /// Remove a task
    Remove {
        /// Task UUID or number
        task: String,
    },

    /// Remove every completed task
    ClearCompleted,

    /// Show resolved data and database paths
    Paths,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Cli;
    use clap::Parser;

    #[test]
    fn add_parses_all_options() {
        let cli = Cli::parse_from([
            "taskboard",
            "add",
            "Buy milk",
            "--description",
            "Two litres",
            "--tipo",
            "Hogar",
            "--numero",
            "4",
        ]);

        match cli.command {
            Some(Commands::Add {
                nombre,
                description,
                tipo,
                numero,
            }) => {
                assert_eq!(nombre, "Buy milk");
                assert_eq!(description.as_deref(), Some("Two litres"));
                assert_eq!(tipo.as_deref(), Some("Hogar"));
                assert_eq!(numero, Some(4));
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn web_accepts_repeated_origins() {
        let cli = Cli::parse_from([
            "taskboard",
            "web",
            "--port",
            "8080",
            "--allowed-origin",
            "http://a.test",
            "--allowed-origin",
            "http://b.test",
        ]);

        match cli.command {
            Some(Commands::Web {
                port,
                allowed_origins,
                api_only,
                ..
            }) => {
                assert_eq!(port, 8080);
                assert_eq!(allowed_origins, vec!["http://a.test", "http://b.test"]);
                assert!(!api_only);
            }
            _ => panic!("expected web command"),
        }
    }

    #[test]
    fn api_only_conflicts_with_static_dir() {
        let result = Cli::try_parse_from([
            "taskboard",
            "web",
            "--api-only",
            "--static-dir",
            "./build",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn list_filters_are_exclusive() {
        assert!(Cli::try_parse_from(["taskboard", "list", "--completed", "--pending"]).is_err());
    }

    #[test]
    fn clear_completed_is_kebab_case() {
        let cli = Cli::parse_from(["taskboard", "clear-completed"]);
        assert!(matches!(cli.command, Some(Commands::ClearCompleted)));
    }
}
