//! Configuration loading and management for the budget engine.
//!
//! This module loads engine metadata and the defaults substituted for absent
//! financial profile fields from `engine.yaml`.
//!
//! # Example
//!
//! ```no_run
//! use budget_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded engine: {}", config.engine().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, EngineMetadata, RateDefaults};
