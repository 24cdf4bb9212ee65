use crate::cli::commands::open_database;
use crate::config::Config;
use crate::core::report;
use crate::errors::AppResult;
use crate::ui::messages::error;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let gw = open_database(cfg)?;

    match report::render_users(&gw) {
        Ok(table) => print!("{}", table),
        Err(e) => error(e),
    }

    Ok(())
}
