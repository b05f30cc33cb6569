//! Appiumize Core - shared records and error types.
//!
//! This crate holds the types every other appiumize crate agrees on:
//!
//! - [`Platform`]: The target platform a conversion resolves to
//! - [`ConversionResult`]: Outcome of rewriting one source blob
//! - [`ValidationResult`]: Outcome of the read-only convertibility check
//! - [`FileConversionResult`]: Outcome of converting a file on disk
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │   appiumize-cli      │  (Commands, tool server, logging)
//! └──────────┬───────────┘
//!            │
//!            ▼
//! ┌──────────────────────┐
//! │appiumize-rule-engine │  (Catalog, rewrite, analyze)
//! └──────────┬───────────┘
//!            │
//!            ▼
//! ┌──────────────────────┐
//! │  appiumize-core      │  (This crate - records and errors)
//! └──────────────────────┘
//! ```
//!
//! Records serialize with camelCase keys so they can be handed to tool
//! clients unchanged.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{ConversionResult, FileConversionResult, Platform, Status, ValidationResult};
