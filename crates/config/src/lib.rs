#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for wheelhouse
//!
//! This crate handles loading and merging configuration from:
//! - Default values (hard-coded)
//! - Configuration file (~/.config/wheelhouse/config.toml)
//! - Environment variables
//! - CLI flags

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use wheelhouse_errors::{ConfigError, Error};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub publish: PublishConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Publish pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Directory under which per-invocation staging directories are created
    pub staging_root: Option<PathBuf>,
    #[serde(default = "default_build_command")]
    pub build_command: String,
    #[serde(default = "default_build_args")]
    pub build_args: Vec<String>,
    /// Seconds before the build invocation is aborted; 0 disables the deadline
    #[serde(default = "default_build_timeout_secs")]
    pub build_timeout_secs: u64,
}

/// Catalog discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Catalog to discover; falls back to the cluster's initial catalog
    pub catalog_name: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Directory log files are written to
    pub log_dir: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            staging_root: None,
            build_command: default_build_command(),
            build_args: default_build_args(),
            build_timeout_secs: default_build_timeout_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            level: default_log_level(),
        }
    }
}

// Default value functions for serde

fn default_build_command() -> String {
    "python".to_string()
}

fn default_build_args() -> Vec<String> {
    vec!["setup.py".to_string(), "bdist_wheel".to_string()]
}

fn default_build_timeout_secs() -> u64 {
    600 // 10 minutes
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Get the default config file path
    ///
    /// # Errors
    ///
    /// Returns an error if the system config directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, Error> {
        let config_dir = dirs::config_dir().ok_or_else(|| ConfigError::NotFound {
            path: "config directory".to_string(),
        })?;
        Ok(config_dir.join("wheelhouse").join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the file contents
    /// contain invalid TOML syntax that cannot be parsed.
    pub async fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|_| ConfigError::NotFound {
                path: path.display().to_string(),
            })?;

        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })
            .map_err(Into::into)
    }

    /// Load configuration with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or contains invalid TOML syntax.
    pub async fn load() -> Result<Self, Error> {
        let config_path = Self::default_path()?;

        if config_path.exists() {
            debug!(path = %config_path.display(), "loading configuration file");
            Self::load_from_file(&config_path).await
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an optional path or use default
    ///
    /// If path is provided, loads from that file.
    /// If path is None, uses the default loading behavior.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub async fn load_or_default(path: &Option<PathBuf>) -> Result<Self, Error> {
        match path {
            Some(config_path) => Self::load_from_file(config_path).await,
            None => Self::load().await,
        }
    }

    /// Merge with environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    /// that cannot be parsed into the expected types.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        // WHEELHOUSE_STAGING_ROOT
        if let Ok(root) = std::env::var("WHEELHOUSE_STAGING_ROOT") {
            if root.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "WHEELHOUSE_STAGING_ROOT".to_string(),
                    value: root,
                }
                .into());
            }
            self.publish.staging_root = Some(PathBuf::from(root));
        }

        // WHEELHOUSE_BUILD_TIMEOUT
        if let Ok(timeout) = std::env::var("WHEELHOUSE_BUILD_TIMEOUT") {
            self.publish.build_timeout_secs =
                timeout.parse().map_err(|_| ConfigError::InvalidValue {
                    field: "WHEELHOUSE_BUILD_TIMEOUT".to_string(),
                    value: timeout,
                })?;
        }

        // WHEELHOUSE_CATALOG
        if let Ok(catalog) = std::env::var("WHEELHOUSE_CATALOG") {
            self.catalog.catalog_name = Some(catalog);
        }

        // WHEELHOUSE_LOG_LEVEL
        if let Ok(level) = std::env::var("WHEELHOUSE_LOG_LEVEL") {
            self.logging.level = match level.as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => level,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field: "WHEELHOUSE_LOG_LEVEL".to_string(),
                        value: level,
                    }
                    .into())
                }
            };
        }

        Ok(())
    }

    /// Get the staging root (with default)
    #[must_use]
    pub fn staging_root(&self) -> PathBuf {
        self.publish
            .staging_root
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("wheelhouse"))
    }

    /// Get the log directory (with default)
    #[must_use]
    pub fn log_dir(&self) -> PathBuf {
        self.logging
            .log_dir
            .clone()
            .unwrap_or_else(|| self.staging_root().join("logs"))
    }

    /// Build deadline, `None` when disabled
    #[must_use]
    pub fn build_timeout(&self) -> Option<u64> {
        match self.publish.build_timeout_secs {
            0 => None,
            secs => Some(secs),
        }
    }
}
