use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{error::StatusError, model::UnitSystem};

/// File name looked up in the working directory and the platform config dir.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Static configuration, read once at startup.
///
/// Example JSON:
/// ```json
/// {"discord_token": "...", "weather": "...", "units": "metric", "city": "Paris"}
/// ```
#[derive(Clone, Deserialize)]
pub struct Config {
    /// Discord user token, sent verbatim in the `Authorization` header.
    #[serde(rename = "discord_token")]
    pub auth_token: String,

    /// OpenWeather API key.
    #[serde(rename = "weather")]
    pub weather_api_key: String,

    pub city: String,

    #[serde(rename = "units")]
    pub unit_system: UnitSystem,
}

// Credentials stay out of logs and panic messages.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("city", &self.city)
            .field("unit_system", &self.unit_system)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Load config from `path`. Files ending in `.toml` are read as TOML,
    /// everything else as JSON.
    pub fn load(path: &Path) -> Result<Self, StatusError> {
        let contents = fs::read_to_string(path).map_err(|source| StatusError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let cfg = if is_toml {
            Self::from_toml(&contents)
        } else {
            Self::from_json(&contents)
        }
        .map_err(|message| StatusError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })?;

        cfg.validate()?;
        Ok(cfg)
    }

    fn from_json(contents: &str) -> Result<Self, String> {
        serde_json::from_str(contents).map_err(|e| e.to_string())
    }

    fn from_toml(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| e.to_string())
    }

    /// Reject blank credentials or city before any request is made.
    pub fn validate(&self) -> Result<(), StatusError> {
        let required = [
            ("discord_token", &self.auth_token),
            ("weather", &self.weather_api_key),
            ("city", &self.city),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(StatusError::MissingField(field));
            }
        }

        Ok(())
    }

    /// Pick the config file: an explicit path wins, then `./config.json`,
    /// then `config.json` in the platform config directory.
    pub fn resolve_path(explicit: Option<PathBuf>) -> Result<PathBuf, StatusError> {
        if let Some(path) = explicit {
            return Ok(path);
        }

        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return Ok(local);
        }

        Self::config_file_path()
    }

    /// Path to the config file in the platform config directory.
    pub fn config_file_path() -> Result<PathBuf, StatusError> {
        let dirs = ProjectDirs::from("dev", "weather-status", "weather-status")
            .ok_or(StatusError::NoConfigDir)?;

        Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
