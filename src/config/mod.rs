//! Tab registry configuration.
//!
//! Re-exports all configuration types from the `doctabs-config` crate.
//! All configuration types, defaults, and utilities are defined in `doctabs-config`.

pub use doctabs_config::*;
