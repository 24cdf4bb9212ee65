use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::gateway::Gateway;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use crate::utils::path::expand_tilde;

/// `db --check` / `db --info`. Neither the file nor the schema is ever
/// created here.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { check, info: show_info } = cmd {
        let path = expand_tilde(&cfg.database);
        if !path.exists() {
            warning(format!("Database file missing: {}", path.display()));
            return Ok(());
        }

        let gw = Gateway::open(&path.to_string_lossy())?;

        if *show_info || !*check {
            let summary = stats::collect(&gw)?;
            stats::print_db_info(&summary);
        }

        if *check {
            info("Running integrity check…");
            let result = stats::integrity_check(&gw)?;
            if result == "ok" {
                success("Integrity check passed.");
            } else {
                error(format!("Integrity check failed: {}", result));
            }
        }
    }

    Ok(())
}
