mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind};
use tracing::debug;

pub const API_KEY_VAR: &str = "HF_API_KEY";
pub const MODEL_VAR: &str = "MODEL_ID";
pub const ORIGIN_VAR: &str = "FRONTEND_ORIGIN";
pub const HOST_VAR: &str = "HOST";
pub const PORT_VAR: &str = "PORT";

/// Loads the optional YAML file, applies environment overrides and validates.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_file(&config_path).await?;
    config.apply_env(|key| env::var(key).ok())?;
    config.validate()?;

    Ok(config)
}

/// Reads `path` as YAML; a missing file yields the defaults.
pub async fn load_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    match tokio::fs::read_to_string(path).await {
        Ok(config_str) => Ok(serde_yaml::from_str(&config_str)?),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No configuration file at {}, using defaults", path);
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

impl Config {
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup(API_KEY_VAR) {
            self.llm.api_key = api_key;
        }
        if let Some(model) = lookup(MODEL_VAR) {
            self.llm.model = model;
        }
        if let Some(origin) = lookup(ORIGIN_VAR) {
            self.server.allowed_origin = origin;
        }
        if let Some(host) = lookup(HOST_VAR) {
            self.server.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("{PORT_VAR} is not a valid port: '{port}'")))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            return Err(Error::config(format!("{API_KEY_VAR} is not set")));
        }
        if self.llm.model.trim().is_empty() {
            return Err(Error::config("model identifier must not be empty"));
        }
        if self.llm.timeout_secs == 0 {
            return Err(Error::config("llm.timeout_secs must be greater than zero"));
        }
        Ok(())
    }
}
