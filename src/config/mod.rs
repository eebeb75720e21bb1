mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the YAML configuration and applies environment overrides.
///
/// `CONFIG_PATH` names the file. When it is unset and `config.yaml` does not
/// exist, built-in defaults are used instead.
pub async fn load() -> Result<Config> {
    load_with(DEFAULT_CONFIG_PATH, |key| env::var(key).ok()).await
}

/// `load` with an explicit fallback path and variable lookup.
pub async fn load_with<F>(default_path: &str, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let explicit_path = lookup("CONFIG_PATH");
    let config_path = explicit_path
        .clone()
        .unwrap_or_else(|| default_path.to_string());

    debug!("Loading configuration from: {}", config_path);

    let mut config = match load_file(&config_path).await {
        Ok(config) => config,
        Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound && explicit_path.is_none() => {
            debug!("No {} found, using default configuration", config_path);
            Config::default()
        }
        Err(e) => return Err(e),
    };

    apply_env_overrides(&mut config, lookup)?;

    Ok(config)
}

pub async fn load_file(config_path: &str) -> Result<Config> {
    let config_str = tokio::fs::read_to_string(config_path).await?;
    from_yaml(&config_str)
}

pub fn from_yaml(config_str: &str) -> Result<Config> {
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

/// Overrides file values with `OPENAI_API_KEY`, `OPENAI_BASE_URL` and `PORT`.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(api_key) = lookup("OPENAI_API_KEY") {
        config.llm.api_key = api_key;
    }

    if let Some(base_url) = lookup("OPENAI_BASE_URL") {
        config.llm.base_url = base_url;
    }

    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }

    Ok(())
}
