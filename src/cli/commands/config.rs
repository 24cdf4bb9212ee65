use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, config_path: Option<&Path>) -> AppResult<()> {
    if let Commands::Config { print_config, init } = cmd {
        if *init {
            let target = config_path
                .map(Path::to_path_buf)
                .unwrap_or_else(Config::config_file);

            if target.exists() {
                warning(format!(
                    "Configuration file already exists: {}",
                    target.display()
                ));
            } else {
                let written = Config::default().save(Some(target.as_path()))?;
                success(format!("Config file: {}", written.display()));
            }
        }

        if *print_config || !*init {
            print!("{}", cfg.to_yaml()?);
        }
    }

    Ok(())
}
