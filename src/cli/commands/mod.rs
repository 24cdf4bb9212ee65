pub mod add;
pub mod config;
pub mod db;
pub mod list;

use crate::config::Config;
use crate::db::gateway::Gateway;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Open the configured database and make sure the `user` table exists.
/// Both steps are fatal for every command that reads or writes users.
pub fn open_database(cfg: &Config) -> AppResult<Gateway> {
    let path = expand_tilde(&cfg.database);
    let gw = Gateway::open(&path.to_string_lossy())?;
    gw.ensure_schema()?;
    Ok(gw)
}
