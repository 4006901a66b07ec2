//! Configuration management for the login demo
//!
//! Values come from built-in defaults, an optional `config.toml`, and
//! `CODESAFE_*` environment variables, in increasing priority.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::auth::{CredentialStore, LogMode, SEED_USERS};

/// Config file locations, lowest priority first.
const CONFIG_PATHS: [&str; 2] = [
    "codesafe-login/config", // run from the workspace parent
    "config",                // run from the crate directory
];

const ENV_PREFIX: &str = "CODESAFE";

/// Complete demo configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Login attempts allowed per session
    /// Environment: CODESAFE_MAX_ATTEMPTS
    pub max_attempts: u32,

    /// Whether attempt lines may contain passwords
    /// Environment: CODESAFE_LOG_MODE (`secure` or `insecure`)
    pub log_mode: LogMode,

    /// Seed accounts. Keys are lowercased by the config loader.
    pub users: BTreeMap<String, String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            log_mode: LogMode::Secure,
            users: SEED_USERS
                .iter()
                .map(|(user, pass)| (user.to_string(), pass.to_string()))
                .collect(),
        }
    }
}

impl DemoConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        for path in CONFIG_PATHS {
            builder = builder.add_source(File::with_name(path).required(false));
        }
        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Self::from_settings(settings)
    }

    /// Parse configuration from TOML text, without file or environment lookup
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Self::from_settings(settings)
    }

    fn from_settings(settings: Config) -> Result<Self, ConfigError> {
        let config: DemoConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the credential store described by this configuration
    pub fn credential_store(&self) -> CredentialStore {
        self.users
            .iter()
            .map(|(user, pass)| (user.as_str(), pass.as_str()))
            .collect()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::Message(
                "max_attempts must be greater than 0".into(),
            ));
        }

        if self.users.is_empty() {
            return Err(ConfigError::Message("users cannot be empty".into()));
        }

        if self.users.keys().any(|user| user.trim().is_empty()) {
            return Err(ConfigError::Message("usernames cannot be blank".into()));
        }

        Ok(())
    }
}
