//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the credentials are not in the environment, falls back to a file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `MARKETPLACE_CONSUMER_KEY`: OAuth consumer key (required)
//! - `MARKETPLACE_CONSUMER_SECRET`: OAuth consumer secret (required)
//! - `MARKETPLACE_ENVIRONMENT`: `development` or `production`
//! - `MARKETPLACE_BASE_URL`: Base URL override
//! - `MARKETPLACE_POLL_INTERVAL_MS`: Validation poll interval in milliseconds
//! - `MARKETPLACE_REQUEST_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `MARKETPLACE_USER_AGENT`: User-Agent sent with every request
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./marketplace.json` or `./marketplace.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use marketplace_domain::{ClientConfig, Environment, MarketplaceError, Result};

use crate::errors::InfraError;

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the credentials
/// are missing there, falls back to loading from a config file.
///
/// # Errors
/// Returns `MarketplaceError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - The loaded configuration fails validation
pub fn load() -> Result<ClientConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Credentials are required; every other setting keeps its default when
/// the variable is unset.
///
/// # Errors
/// Returns `MarketplaceError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<ClientConfig> {
    let consumer_key = env_var("MARKETPLACE_CONSUMER_KEY")?;
    let consumer_secret = env_var("MARKETPLACE_CONSUMER_SECRET")?;

    let mut config = ClientConfig::new(consumer_key, consumer_secret);

    if let Some(environment) = optional_env("MARKETPLACE_ENVIRONMENT") {
        config.environment = environment
            .parse::<Environment>()
            .map_err(MarketplaceError::Config)?;
    }
    config.base_url = optional_env("MARKETPLACE_BASE_URL");
    if let Some(interval) = optional_env("MARKETPLACE_POLL_INTERVAL_MS") {
        config.poll_interval_ms = interval.parse::<u64>().map_err(|e| {
            MarketplaceError::Config(format!("Invalid poll interval: {}", e))
        })?;
    }
    if let Some(timeout) = optional_env("MARKETPLACE_REQUEST_TIMEOUT_SECS") {
        config.request_timeout_secs = timeout.parse::<u64>().map_err(|e| {
            MarketplaceError::Config(format!("Invalid request timeout: {}", e))
        })?;
    }
    config.user_agent = optional_env("MARKETPLACE_USER_AGENT");

    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `MarketplaceError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The loaded configuration fails validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(MarketplaceError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            MarketplaceError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| MarketplaceError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents).map_err(|e| InfraError::from(e).into()),
        _ => Err(MarketplaceError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidate_files(&cwd));
        candidates.extend([cwd.join("../config.json"), cwd.join("../config.toml")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidate_files(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidate_files(dir: &Path) -> [PathBuf; 4] {
    [
        dir.join("marketplace.json"),
        dir.join("marketplace.toml"),
        dir.join("config.json"),
        dir.join("config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `MarketplaceError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        MarketplaceError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Optional environment variable; blank values count as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
