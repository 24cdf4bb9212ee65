//! userbook library root.
//! Exposes the CLI parser, the high-level run() function and the modules
//! behind them: the database gateway, the record model and date helpers.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Add) => cli::commands::add::handle(cfg),
        Some(Commands::List) => cli::commands::list::handle(cfg),
        Some(cmd @ Commands::Config { .. }) => {
            cli::commands::config::handle(cmd, cfg, cli.config.as_deref())
        }
        Some(cmd @ Commands::Db { .. }) => cli::commands::db::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load(cli.config.as_deref())?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
