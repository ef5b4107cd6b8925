//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.ssnit.toml` in the working directory
//! 4. `~/.config/ssnit/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::env::Env;
use crate::models::OutputFormat;
use crate::pension::{Scheme, SchemeError};

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to combine config layers: {source}")]
    Merge { source: toml::de::Error },

    #[error("invalid [scheme] configuration: {0}")]
    InvalidScheme(#[from] SchemeError),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub scheme: Scheme,
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from the global config, the config in `local_dir`, then applies
    /// environment variable overrides. The resulting scheme is validated.
    pub fn load(local_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let global_path = Self::global_config_path();
        Self::load_layers(global_path.as_deref(), local_dir, env)
    }

    /// Load configuration from an explicit global config file and local directory.
    ///
    /// Layers are merged key by key, so any key a later layer sets wins,
    /// even when it restores a built-in default.
    pub fn load_layers(
        global_path: Option<&Path>,
        local_dir: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut merged = toml::Table::new();

        // Layer 4: global config
        if let Some(path) = global_path {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading global config");
                merge_tables(&mut merged, Self::load_file(path)?);
            }
        }

        // Layer 3: local config
        if let Some(dir) = local_dir {
            let local_path = dir.join(crate::constants::CONFIG_FILENAME);
            if local_path.exists() {
                tracing::debug!(path = %local_path.display(), "loading local config");
                merge_tables(&mut merged, Self::load_file(&local_path)?);
            }
        }

        let mut config: Config = toml::Value::Table(merged)
            .try_into()
            .map_err(|source| ConfigError::Merge { source })?;

        // Layer 2: environment variables
        config.apply_env_vars(env);

        config.scheme.validate()?;
        Ok(config)
    }

    /// Load one config layer, keeping only the keys the file sets.
    ///
    /// The layer is also checked against the full schema so that errors
    /// name the offending file.
    fn load_file(path: &Path) -> Result<toml::Table, ConfigError> {
        let parse_error = |source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        };
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let table: toml::Table = toml::from_str(&content).map_err(parse_error)?;
        toml::Value::Table(table.clone())
            .try_into::<Config>()
            .map_err(parse_error)?;
        Ok(table)
    }

    /// Get the global config file path.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Serialize the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(format) = env.parsed::<OutputFormat>(crate::constants::ENV_FORMAT) {
            self.output.format = format;
        }
        if let Ok(val) = env.var(crate::constants::ENV_CURRENCY) {
            let val = val.trim();
            if val.is_empty() {
                tracing::warn!("ignoring empty {} value", crate::constants::ENV_CURRENCY);
            } else {
                self.scheme.currency = val.to_string();
            }
        }
    }
}

/// Overlay `layer` onto `base`. Nested tables merge; any other value replaces.
fn merge_tables(base: &mut toml::Table, layer: toml::Table) {
    for (key, value) in layer {
        match value {
            toml::Value::Table(incoming) => match base.get_mut(&key) {
                Some(toml::Value::Table(existing)) => merge_tables(existing, incoming),
                _ => {
                    base.insert(key, toml::Value::Table(incoming));
                }
            },
            other => {
                base.insert(key, other);
            }
        }
    }
}
