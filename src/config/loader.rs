//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, FormDefaults};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// validates the rate constants before the engine ever runs.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml    # Rates, commission schedule, phone-line rules
/// └── defaults.yaml  # Form reset values
/// ```
///
/// # Example
///
/// ```no_run
/// use salesfloor_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Default expense lines: {}", loader.defaults().expenses.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    engine: EngineConfig,
    defaults: FormDefaults,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML (`ConfigParseError`)
    /// - The net revenue rate is not strictly positive (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use salesfloor_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), salesfloor_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine_path = path.join("engine.yaml");
        let engine = Self::load_yaml::<EngineConfig>(&engine_path)?;

        let defaults_path = path.join("defaults.yaml");
        let defaults = Self::load_yaml::<FormDefaults>(&defaults_path)?;

        Self::validate(&engine, &engine_path)?;

        Ok(Self { engine, defaults })
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

    /// Checks rate constants the formulas divide by or scale with.
    fn validate(engine: &EngineConfig, path: &Path) -> EngineResult<()> {
        if engine.revenue.net_revenue_rate <= Decimal::ZERO {
            return Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: format!(
                    "net_revenue_rate must be positive, got {}",
                    engine.revenue.net_revenue_rate
                ),
            });
        }

        if let Some(remit_rate) = engine.revenue.remit_rate {
            if remit_rate < Decimal::ZERO {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("remit_rate must be non-negative, got {}", remit_rate),
                });
            }
        }

        Ok(())
    }

    /// Returns the engine configuration.
    pub fn engine(&self) -> &EngineConfig {
        &self.engine
    }

    /// Returns the default form values.
    pub fn defaults(&self) -> &FormDefaults {
        &self.defaults
    }
}
