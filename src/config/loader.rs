//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, EngineMetadata, RateDefaults};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── engine.yaml   # Engine metadata and rate defaults
/// ```
///
/// # Example
///
/// ```no_run
/// use budget_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Weeks per year: {}", loader.rate_defaults().target_weeks_per_year);
/// # Ok::<(), budget_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `engine.yaml` is missing (`ConfigNotFound`), is not
    /// valid YAML (`ConfigParseError`) or holds an out-of-range default
    /// (`InvalidConfig`).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let engine_path = path.as_ref().join("engine.yaml");
        let config = Self::load_yaml::<EngineConfig>(&engine_path)?;
        config.rate_defaults().validate()?;

        tracing::debug!(
            path = %engine_path.display(),
            version = %config.engine().version,
            "Loaded engine configuration"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the engine metadata.
    pub fn engine(&self) -> &EngineMetadata {
        self.config.engine()
    }

    /// Returns the defaults applied to absent profile fields.
    pub fn rate_defaults(&self) -> &RateDefaults {
        self.config.rate_defaults()
    }
}
