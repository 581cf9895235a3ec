use core::fmt::{Debug, Display};
use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "campus-events.toml";
pub const ENV_PREFIX: &str = "CAMPUS_EVENTS_";

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Logins are only accepted for addresses ending in `@{email_domain}`.
    pub email_domain: String,
    /// Course code prefixes recognised in transcripts.
    pub department_prefixes: Vec<String>,
    /// Catalog document to load instead of the built-in sample catalog.
    pub catalog_path: Option<PathBuf>,
    pub description_preview_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            email_domain: "lau.edu".to_owned(),
            department_prefixes: ["CSC", "BUS", "ENG", "MED", "ART"]
                .into_iter()
                .map(ToOwned::to_owned)
                .collect(),
            catalog_path: None,
            description_preview_len: 100,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let domain = &self.email_domain;
        if domain.is_empty() || domain.contains(|c: char| c == '@' || c.is_whitespace()) {
            return Err(ConfigError::InvalidEmailDomain(self.email_domain.clone()));
        }
        if self.department_prefixes.is_empty() {
            return Err(ConfigError::NoDepartmentPrefixes);
        }
        if let Some(prefix) = self
            .department_prefixes
            .iter()
            .find(|prefix| !is_department_prefix(prefix))
        {
            return Err(ConfigError::InvalidPrefix(prefix.clone()));
        }
        Ok(())
    }
}

/// Exactly three ASCII uppercase letters, e.g. `CSC`.
#[must_use]
pub fn is_department_prefix(prefix: &str) -> bool {
    prefix.len() == 3 && prefix.bytes().all(|byte| byte.is_ascii_uppercase())
}

#[derive(thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Figment(#[from] Box<figment::Error>),
    #[error("email domain {0:?} is not a valid domain")]
    InvalidEmailDomain(String),
    #[error("at least one department prefix needs to be configured")]
    NoDepartmentPrefixes,
    #[error("department prefix {0:?} must be exactly three uppercase letters")]
    InvalidPrefix(String),
}

impl Debug for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[must_use]
pub fn figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(CONFIG_FILE))
        .merge(Env::prefixed(ENV_PREFIX))
}

pub fn get_config() -> Result<Config, ConfigError> {
    let config: Config = figment().extract().map_err(Box::new)?;
    config.validate()?;
    Ok(config)
}
