mod credentials;
mod types;

pub use credentials::{ApiKey, ModelBinding, resolve_api_key};
pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `CONFIG_PATH`, or `config.yaml` if unset.
///
/// A missing default file means built-in defaults; a missing file that was
/// named explicitly is an error.
pub async fn load() -> Result<Config> {
    match env::var("CONFIG_PATH") {
        Ok(path) => load_from(&path).await,
        Err(_) => {
            if Path::new(DEFAULT_CONFIG_PATH).exists() {
                load_from(DEFAULT_CONFIG_PATH).await
            } else {
                debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
                Ok(Config::default())
            }
        }
    }
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path)
        .await
        .map_err(|e| Error::config(format!("cannot read {}: {}", config_path, e)))?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
