//! Configuration system for the doctabs open-document registry.
//!
//! This crate provides configuration loading, saving, and default values
//! for the tab registry. It includes:
//!
//! - The `Config` struct and its serde defaults
//! - Singleton view definitions (reserved sentinel paths such as `HOME`)
//! - Log level selection for the debug log bridge
//! - Typed configuration errors

pub mod config;
pub mod defaults;
pub mod error;
mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use types::{LogLevel, SingletonView};
