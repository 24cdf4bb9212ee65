use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for userbook.
/// Without a subcommand the interactive session runs, exactly like `add`.
#[derive(Parser, Debug)]
#[command(
    name = "userbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record users into a local SQLite database and list them back",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a custom DB)
    #[arg(global = true, long = "db", value_name = "PATH")]
    pub db: Option<String>,

    /// Read configuration from this file instead of ~/.userbook/userbook.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactively add users, then list all of them (default)
    Add,

    /// List stored users
    List,

    /// Show or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,
    },

    /// Inspect the database file
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
