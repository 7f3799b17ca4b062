//! Lifecycle configuration, read from a TOML file.
//!
//! ```toml
//! [validation]
//! on_gateway_error = "fail_closed"   # or "surface"
//!
//! [cache]
//! initial_capacity = 1024
//! ```

use folio_cache::ModelCache;
use folio_model::GatewayErrorPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level lifecycle configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleConfig {
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// How validation treats its collaborators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Behaviour of uniqueness rules when the persistence gateway errors.
    #[serde(default)]
    pub on_gateway_error: GatewayErrorPolicy,
}

/// Sizing of the in-process model cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

fn default_initial_capacity() -> usize {
    256
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
        }
    }
}

impl CacheConfig {
    /// Creates an empty model cache sized per this config.
    pub fn build(&self) -> ModelCache {
        ModelCache::with_capacity(self.initial_capacity)
    }
}

impl LifecycleConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields the defaults. An unreadable or malformed file
    /// is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("No lifecycle config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        info!("Loaded lifecycle config from {:?}", path);
        Ok(config)
    }

    /// Like [`LifecycleConfig::load_from`], but falls back to the defaults
    /// with a warning instead of failing.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load lifecycle config {:?}: {}. Falling back to defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }
}
