//! Output formatters for conversion and validation results.

pub mod human;
pub mod json;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

use appiumize_core::{ConversionResult, FileConversionResult, ValidationResult};
use appiumize_rule_engine::Catalog;

/// Renders command results for stdout
pub trait Formatter {
    fn conversion(&self, result: &ConversionResult) -> String;

    fn file_conversion(&self, result: &FileConversionResult) -> String;

    fn validation(&self, result: &ValidationResult) -> String;

    /// Render the rule catalog, optionally narrowed to one category
    fn catalog(&self, catalog: &Catalog, category: Option<&str>) -> String;
}

/// Pick the formatter for `--json`
pub fn formatter(json: bool) -> Box<dyn Formatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(HumanFormatter)
    }
}
