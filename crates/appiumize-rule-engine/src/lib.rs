//! Appiumize Rule Engine - Perfecto to Appium source rewriting
//!
//! This crate holds the categorized rule catalog and the two pure
//! operations that use it:
//!
//! - [`rewrite`]: applies every rule in catalog order to a source blob,
//!   injects helpers and imports, then resolves platform branches
//! - [`analyze`]: reports which rules and categories match without
//!   touching the input
//!
//! # Architecture
//!
//! - **Catalog**: ordered categories, each an ordered list of rules. Order is
//!   precedence; the engine never names a category
//! - **Rules**: a compiled regex plus a literal template or a computed
//!   replacement function
//! - **Multi-Source Loading**: built-in rules + literal rules from TOML files
//!
//! # Example
//!
//! ```no_run
//! use appiumize_core::Platform;
//! use appiumize_rule_engine::{load_built_in_catalog, rewrite};
//!
//! let catalog = load_built_in_catalog().expect("built-in rules compile");
//! let result = rewrite(
//!     r#"driver.findElement(PerfectoMobileBy.id("login-button")).click();"#,
//!     Platform::Android,
//!     &catalog,
//! );
//! assert!(result.converted_code.unwrap().contains(r#"By.id("login-button")"#));
//! ```

pub mod analyzer;
pub mod built_in;
pub mod catalog;
pub mod constants;
pub mod engine;
pub mod inject;
pub mod loader;
pub mod platform;
pub mod rule;
pub mod swipe;
pub mod toml_rule;

// Re-export core types
pub use analyzer::{analyze, is_perfecto_code, PERFECTO_MARKERS};
pub use built_in::load_built_in_catalog;
pub use catalog::{Catalog, Category};
pub use constants::*;
pub use engine::rewrite;
pub use loader::RuleLoader;
pub use platform::{platform_branch, resolve_platform_branches};
pub use rule::{ComputeFn, ReplaceError, Replacement, Rule, RuleMatch};
pub use swipe::{swipe_direction, CoordinateError, Direction};
pub use toml_rule::{TomlRule, TomlRuleFile};

/// Result type for rule operations
pub type Result<T> = std::result::Result<T, RuleError>;

/// Error types for building and loading rules
///
/// These are construction-time errors. Failures while rewriting are reported
/// through [`appiumize_core::ConversionResult`] instead.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Failed to load rules from {path}: {source}")]
    LoadError {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Rule file {path} is {size} bytes, max allowed is {max_allowed}")]
    FileTooLarge {
        path: String,
        size: u64,
        max_allowed: u64,
    },

    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),
}
