//! Configuration management for the plugin resolver
//!
//! This module handles the environment snapshot, tier selection, and
//! resolver settings that parameterize plugin configuration.

pub mod env;
pub mod loader;
pub mod settings;
pub mod tier;

pub use env::EnvSource;
pub use loader::ConfigLoader;
pub use settings::Settings;
pub use tier::{TIER_ENV_VAR, Tier};
