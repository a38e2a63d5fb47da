//! Configuration loading and management for the calculation engine.
//!
//! This module provides functionality to load engine configuration from
//! YAML files: rate constants, the commission schedule, phone-line
//! derivation rules, and the default form values used by the reset flow.
//!
//! # Example
//!
//! ```no_run
//! use salesfloor_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Net revenue rate: {}", config.engine().revenue.net_revenue_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CommissionSchedule, CommissionTier, EngineConfig, FormDefaults, PhoneLineRules, RevenueRates,
};
