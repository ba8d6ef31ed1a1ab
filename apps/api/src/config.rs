//! Application configuration loading from environment variables.
//!
//! Everything is read once at startup; a `.env` file is honoured through `dotenvy`
//! in `main` before [`Config::from_env`] runs.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging level (default: "info,society_api=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `SOCIETY_REGISTRY_PATH`: JSON file of societies (default: built-in registry)
//! - `SERVICE_RADIUS_KM`: Serviceable distance from a society (default: 5.0)
//! - `BATCH_MAX_RECORDS`: Largest accepted batch import (default: 1000)
//! - `REQUEST_BODY_LIMIT_BYTES`: Maximum request body size (default: 2 MiB)

use crate::domain::resolution::{DEFAULT_SERVICE_RADIUS_KM, ResolverSettings};
use serde::Deserialize;

pub const DEFAULT_BATCH_MAX_RECORDS: usize = 1000;
pub const DEFAULT_REQUEST_BODY_LIMIT_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Registry file to load instead of the built-in societies
    pub society_registry_path: Option<String>,

    /// Distance in kilometres within which an address is serviceable
    pub service_radius_km: f64,

    /// Maximum number of rows accepted by the batch endpoint
    pub batch_max_records: usize,

    pub request_body_limit_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            society_registry_path: None,
            service_radius_km: DEFAULT_SERVICE_RADIUS_KM,
            batch_max_records: DEFAULT_BATCH_MAX_RECORDS,
            request_body_limit_bytes: DEFAULT_REQUEST_BODY_LIMIT_BYTES,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// service radius or batch size is not positive.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        let config = Self {
            host: env_or("HOST", defaults.host)?,
            port: env_or("PORT", defaults.port)?,
            society_registry_path: env_optional("SOCIETY_REGISTRY_PATH"),
            service_radius_km: env_or("SERVICE_RADIUS_KM", defaults.service_radius_km)?,
            batch_max_records: env_or("BATCH_MAX_RECORDS", defaults.batch_max_records)?,
            request_body_limit_bytes: env_or(
                "REQUEST_BODY_LIMIT_BYTES",
                defaults.request_body_limit_bytes,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.service_radius_km.is_finite() && self.service_radius_km > 0.0,
            "SERVICE_RADIUS_KM must be a positive number, got {}",
            self.service_radius_km
        );
        anyhow::ensure!(self.batch_max_records > 0, "BATCH_MAX_RECORDS must be positive");
        Ok(())
    }

    pub fn resolver_settings(&self) -> ResolverSettings {
        ResolverSettings {
            service_radius_km: self.service_radius_km,
            ..ResolverSettings::default()
        }
    }
}

/// Load an optional environment variable, treating blank values as unset.
fn env_optional(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
