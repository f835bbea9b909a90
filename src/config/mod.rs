mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

/// Loads configuration from the YAML file at `CONFIG_PATH` (default
/// `config.yaml`). A missing file yields the built-in defaults; the
/// `GOOGLE_API_KEY` environment variable overrides the file's API key.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let mut config = match tokio::fs::read_to_string(&config_path).await {
        Ok(config_str) => serde_yaml::from_str(&config_str)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
        Err(e) => return Err(e.into()),
    };

    if let Ok(api_key) = env::var("GOOGLE_API_KEY") {
        config.gemini.api_key = api_key;
    }

    if config.gemini.api_key.is_empty() {
        return Err(Error::config(
            "No Gemini API key: set GOOGLE_API_KEY or gemini.api_key in the config file",
        ));
    }

    Ok(config)
}
