//! Runtime configuration.
//!
//! Prefix defaults come from, in increasing priority: built-in defaults, an
//! optional JSON file, and `CIDR_RANGE_IPV4_PREFIX` / `CIDR_RANGE_IPV6_PREFIX`.

use crate::models::{AddressFamily, Prefixes};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const ENV_IPV4_PREFIX: &str = "CIDR_RANGE_IPV4_PREFIX";
pub const ENV_IPV6_PREFIX: &str = "CIDR_RANGE_IPV6_PREFIX";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file does not exist: {0}")]
    Missing(String),
    #[error("error reading config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("error parsing config {path}: path={at} error={message}")]
    Parse {
        path: String,
        at: String,
        message: String,
    },
    #[error("{key}={value:?} is not a valid prefix length")]
    Env { key: String, value: String },
    #[error("{family} prefix /{prefix} exceeds the address width of {max} bits")]
    PrefixOutOfRange {
        family: AddressFamily,
        prefix: u8,
        max: u8,
    },
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub prefixes: Prefixes,
}

impl Config {
    /// Parse a config document. `origin` is only used in error messages.
    pub fn from_json(json: &str, origin: &str) -> Result<Config, ConfigError> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        let config: Config =
            serde_path_to_error::deserialize(&mut deserializer).map_err(|e| ConfigError::Parse {
                path: origin.to_string(),
                at: e.path().to_string(),
                message: e.inner().to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file.
    pub fn from_file(file: &str) -> Result<Config, ConfigError> {
        if !Path::new(file).exists() {
            return Err(ConfigError::Missing(file.to_string()));
        }
        log::info!("Using config file: {file}");
        let json = std::fs::read_to_string(file).map_err(|source| ConfigError::Read {
            path: file.to_string(),
            source,
        })?;
        Config::from_json(&json, file)
    }

    /// Build the effective config: defaults, then `file` if given, then the
    /// process environment.
    pub fn load(file: Option<&str>) -> Result<Config, ConfigError> {
        let mut config = match file {
            Some(file) => Config::from_file(file)?,
            None => Config::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply prefix overrides looked up through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(prefix) = env_prefix(&lookup, ENV_IPV4_PREFIX)? {
            log::warn!("{ENV_IPV4_PREFIX} overrides ipv4 prefix to /{prefix}");
            self.prefixes.ipv4 = prefix;
        }
        if let Some(prefix) = env_prefix(&lookup, ENV_IPV6_PREFIX)? {
            log::warn!("{ENV_IPV6_PREFIX} overrides ipv6 prefix to /{prefix}");
            self.prefixes.ipv6 = prefix;
        }
        self.validate()
    }

    /// Reject prefixes wider than their address family.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for family in [AddressFamily::V4, AddressFamily::V6] {
            let prefix = self.prefixes.for_family(family);
            if prefix > family.bits() {
                return Err(ConfigError::PrefixOutOfRange {
                    family,
                    prefix,
                    max: family.bits(),
                });
            }
        }
        Ok(())
    }
}

fn env_prefix<F>(lookup: &F, key: &str) -> Result<Option<u8>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<u8>()
            .map(Some)
            .map_err(|_| ConfigError::Env {
                key: key.to_string(),
                value,
            }),
    }
}
