//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{DeductionsConfig, ScheduleConfig, ScheduleMetadata};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// validates the tax schedule before handing it to the calculation layer.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/fy2024_25/
/// ├── schedule.yaml    # Schedule metadata and progressive tax bands
/// └── deductions.yaml  # Provident fund and utilities rates
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/fy2024_25").unwrap();
/// println!("Schedule: {}", loader.metadata().name);
/// println!("Bands: {}", loader.schedule().bands.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    schedule: ScheduleConfig,
    deductions: DeductionsConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/fy2024_25")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The tax schedule fails validation (`InvalidSchedule`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/fy2024_25")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let schedule_path = path.join("schedule.yaml");
        let schedule = Self::load_yaml::<ScheduleConfig>(&schedule_path)?;
        schedule.validate()?;

        let deductions_path = path.join("deductions.yaml");
        let deductions = Self::load_yaml::<DeductionsConfig>(&deductions_path)?;

        Ok(Self {
            schedule,
            deductions,
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

    /// Returns the loaded tax schedule.
    pub fn schedule(&self) -> &ScheduleConfig {
        &self.schedule
    }

    /// Returns the loaded deduction rates.
    pub fn deductions(&self) -> &DeductionsConfig {
        &self.deductions
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.schedule.metadata
    }
}
