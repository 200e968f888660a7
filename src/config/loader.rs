//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the tracker
//! policy from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AllowanceConfig, TrackerConfig, TrackerPolicy};

/// Loads and provides access to the tracker policy configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// exposes the policy values the engine's callers need: the absence credit
/// for vacation/sick days and the annual vacation allowance.
///
/// # Directory Structure
///
/// ```text
/// config/tracker/
/// ├── policy.yaml     # Metadata and workday policy
/// └── allowance.yaml  # Annual vacation allowance
/// ```
///
/// # Example
///
/// ```no_run
/// use timecard_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/tracker").unwrap();
/// println!("Absence credit: {} minutes", loader.absence_credit_minutes());
/// println!("Vacation allowance: {} days", loader.vacation_allowance_days());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TrackerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if either file is missing ([`EngineError::ConfigNotFound`])
    /// or contains invalid YAML or missing fields ([`EngineError::ConfigParseError`]).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let policy = Self::load_yaml::<TrackerPolicy>(&policy_path)?;

        let allowance_path = path.join("allowance.yaml");
        let allowance = Self::load_yaml::<AllowanceConfig>(&allowance_path)?;

        Ok(Self {
            config: TrackerConfig::new(policy, allowance),
        })
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

    /// Returns the underlying tracker configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Minutes credited as worked time for a vacation or sick day.
    pub fn absence_credit_minutes(&self) -> i64 {
        self.config.policy().workday.absence_credit_minutes
    }

    /// Vacation days granted per calendar year.
    pub fn vacation_allowance_days(&self) -> u32 {
        self.config.allowance().vacation.annual_days
    }
}
