use crate::cli::commands::open_database;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use std::io;

/// Run the interactive session on stdin/stdout.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let gw = open_database(cfg)?;

    let stdin = io::stdin();
    let mut session = Session::new(&gw, stdin.lock(), io::stdout(), cfg)?;
    session.run()?;

    Ok(())
}
