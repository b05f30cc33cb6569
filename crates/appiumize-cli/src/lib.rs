//! Appiumize CLI library components.
//!
//! This crate provides the command-line interface and the stdio tool server
//! around the rewrite engine. The main binary is in `main.rs`.

pub mod catalog;
pub mod convert;
pub mod formatters;
pub mod logging;
pub mod server;

// Re-export core types for convenience
pub use appiumize_core::{ConversionResult, FileConversionResult, Platform, ValidationResult};
