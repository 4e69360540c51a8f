//! # Roster Config
//!
//! Configuration management for Roster. Settings are merged from TOML files
//! and `ROSTER_`-prefixed environment variables.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
