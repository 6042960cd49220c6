//! Configuration loading and management for the payroll figures engine.
//!
//! This module provides functionality to load the engine configuration from
//! YAML files, including the progressive tax schedule and the deduction
//! rates used for provident fund and derived utilities expenses.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/fy2024_25").unwrap();
//! println!("Loaded schedule: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DeductionsConfig, ProvidentFundRates, ScheduleConfig, ScheduleMetadata, TaxBand,
    UtilitiesRates,
};
