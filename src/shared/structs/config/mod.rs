use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::shared::DEFAULT_CREDITS_ENDPOINT;
use crate::shared::error::ConfigError;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Configuration {
    pub server_bind_point: String,
    pub port: u16,
    pub log_level: String,
    pub credits_endpoint: String,
    pub request_timeout_secs: u64,
    #[serde(skip)]
    pub secrets: Secrets,
}

/// Values that are only ever read from the environment.
#[derive(Clone, Default, PartialEq)]
pub struct Secrets {
    pub application_id: String,
    pub public_key: String,
    pub credits_api_key: String,
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("application_id", &self.application_id)
            .field("public_key", &self.public_key)
            .field("credits_api_key", &"<redacted>")
            .finish()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            server_bind_point: "0.0.0.0".into(),
            port: 8787,
            log_level: "DEBUG".into(),
            credits_endpoint: DEFAULT_CREDITS_ENDPOINT.into(),
            request_timeout_secs: 10,
            secrets: Secrets::default(),
        }
    }

    /// Loads the settings file (if configured) and layers the process environment on top.
    pub fn load() -> anyhow::Result<Self> {
        let env = std::env::vars().collect::<HashMap<_, _>>();
        let base = match (env.get("CONFIG_DIRECTORY"), env.get("CONFIG_FILE_NAME")) {
            (Some(directory), Some(file_name)) => {
                Self::load_from_config_file(Path::new(directory), file_name)?
            }
            _ => Self::new(),
        };

        Ok(base.with_env(&env)?)
    }

    pub fn load_from_config_file(config_directory: &Path, file_name: &str) -> anyhow::Result<Self> {
        if !config_directory.exists() {
            std::fs::create_dir_all(config_directory)?;
        }

        let configuration_path = config_directory.join(file_name);
        if !configuration_path.exists() {
            let new_config = Configuration::new();
            let serialized = toml::to_string_pretty(&new_config)?;
            std::fs::write(configuration_path, serialized)?;
            Ok(new_config)
        } else {
            let raw_config = std::fs::read_to_string(configuration_path)?;
            let deserialized: Configuration = toml::from_str(&raw_config)?;
            Ok(deserialized)
        }
    }

    /// Applies overrides and secrets from an environment map.
    pub fn with_env(mut self, env: &HashMap<String, String>) -> Result<Self, ConfigError> {
        if let Some(bind_point) = env.get("SERVER_BIND_POINT") {
            self.server_bind_point = bind_point.clone();
        }
        if let Some(port) = env.get("PORT") {
            self.port = parse_number("PORT", port)?;
        }
        if let Some(log_level) = env.get("LOG_LEVEL") {
            self.log_level = log_level.clone();
        }
        if let Some(endpoint) = env.get("CREDITS_ENDPOINT") {
            self.credits_endpoint = endpoint.clone();
        }
        if let Some(timeout) = env.get("REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = parse_number("REQUEST_TIMEOUT_SECS", timeout)?;
        }

        self.secrets = Secrets {
            application_id: require(env, "DISCORD_APPLICATION_ID")?,
            public_key: require(env, "DISCORD_PUBLIC_KEY")?,
            credits_api_key: require(env, "DV_KEY")?,
        };

        Ok(self)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_bind_point, self.port)
    }
}

fn require(env: &HashMap<String, String>, name: &'static str) -> Result<String, ConfigError> {
    env.get(name)
        .filter(|value| !value.trim().is_empty())
        .cloned()
        .ok_or(ConfigError::MissingVariable(name))
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}
