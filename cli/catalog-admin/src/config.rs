//! Admin console configuration.
//!
//! Sources, in increasing precedence: built-in defaults, an optional
//! `catalog-admin.toml` in the XDG config directory, and
//! `CATALOG_ADMIN_*` environment variables.

use std::path::PathBuf;

use config::{Config as HierarchicalConfig, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use xdg::BaseDirectories;

/// Name of the managed config directory
const CONFIG_DIR_NAME: &str = "catalog-admin";
pub const CONFIG_FILE: &str = "catalog-admin.toml";

/// Matches the backend's development default.
pub const DEFAULT_CATALOG_URL: &str = "http://127.0.0.1:5000";

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    /// Base URL of the catalog service
    // Using a URL type here adds an extra trailing slash,
    // so just use a String.
    pub catalog_url: String,

    /// Optional User-Agent override for catalog requests
    pub user_agent: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            user_agent: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Read(#[source] config::ConfigError),
    #[error("could not parse config: {0}")]
    Parse(#[source] config::ConfigError),
}

impl Config {
    /// Load configuration from defaults, the user's config file, and
    /// the environment.
    pub fn parse() -> Result<Config, ConfigError> {
        let mut builder = HierarchicalConfig::builder()
            .set_default("catalog_url", DEFAULT_CATALOG_URL)
            .map_err(ConfigError::Read)?;

        if let Some(path) = Self::config_file_path() {
            if path.exists() {
                builder = builder.add_source(
                    File::from(path).format(FileFormat::Toml).required(false),
                );
            }
        }

        let config = builder
            .add_source(Environment::with_prefix("CATALOG_ADMIN"))
            .build()
            .map_err(ConfigError::Read)?;

        config.try_deserialize().map_err(ConfigError::Parse)
    }

    fn config_file_path() -> Option<PathBuf> {
        let dirs = BaseDirectories::with_prefix(CONFIG_DIR_NAME);
        dirs.get_config_home().map(|home| home.join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_development_backend() {
        let config = Config::default();
        assert_eq!(config.catalog_url, "http://127.0.0.1:5000");
        assert_eq!(config.user_agent, None);
    }
}
