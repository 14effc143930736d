//! Configuration module for Loadboard-RS
//!
//! Handles loading settings from YAML files and environment variables.
//! Settings are constructed once at startup and passed through the
//! application state; there is no process-wide settings instance.

mod settings;

pub use settings::*;
