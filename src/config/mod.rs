use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Legacy fixed database name, relative to the working directory.
pub const DEFAULT_DATABASE: &str = "users.db";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// `sha256` or `plaintext`
    #[serde(default = "default_password_storage")]
    pub password_storage: String,
    /// 0 means retry forever, like the historical behaviour.
    #[serde(default)]
    pub max_insert_retries: u32,
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}
fn default_password_storage() -> String {
    "sha256".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            password_storage: default_password_storage(),
            max_insert_retries: 0,
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.userbook`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".userbook")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("userbook.conf")
    }

    /// Load configuration from `path` (or the standard location).
    /// A missing file is not an error: defaults are returned.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("invalid YAML: {}", e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    fn validate(&self) -> AppResult<()> {
        if self.database.trim().is_empty() {
            return Err(AppError::Config("'database' must not be empty".into()));
        }
        match self.password_storage.as_str() {
            "sha256" | "plaintext" => Ok(()),
            other => Err(AppError::Config(format!(
                "unknown password_storage '{}' (expected sha256 or plaintext)",
                other
            ))),
        }
    }

    /// Write the configuration file, creating its directory if needed.
    pub fn save(&self, path: Option<&Path>) -> AppResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }

        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(path)
    }
}
