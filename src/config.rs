//! Global configuration at ~/.config/planner/config.toml
//!
//! The only setting is the API base URL. A missing config file just means
//! defaults; a `--base-url` flag on the command line wins over both.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

static DEFAULT_API_BASE_URL: &str = "https://fsa-crud-2aa9294fe819.herokuapp.com/api/2506-Joe";

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

#[derive(Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
        }
    }
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("planner");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Config> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn base_url_can_be_overridden() {
        let config: Config = toml::from_str(r#"api_base_url = "http://localhost:3000/api""#).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:3000/api");
    }
}
