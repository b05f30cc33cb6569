//! Appiumize configuration file
//!
//! `~/.appiumize/config.toml` holds the defaults the CLI and the tool server
//! share. Every field has a default, so a missing file or a partial one is
//! fine.

pub mod manager;
pub mod security;
pub mod types;

pub use manager::{ConfigError, ConfigManager};
pub use security::{validate_log_level, validate_output_prefix, validate_settings, SecurityError};
pub use types::{AppiumizeConfig, Settings};
