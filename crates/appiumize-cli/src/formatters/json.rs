//! JSON formatter. Records are printed exactly as the tool server returns
//! them.

use super::Formatter;
use appiumize_core::{ConversionResult, FileConversionResult, ValidationResult};
use appiumize_rule_engine::Catalog;
use serde::Serialize;
use serde_json::json;

pub struct JsonFormatter;

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| json!({ "status": "error", "message": e.to_string() }).to_string())
}

impl Formatter for JsonFormatter {
    fn conversion(&self, result: &ConversionResult) -> String {
        to_json(result)
    }

    fn file_conversion(&self, result: &FileConversionResult) -> String {
        to_json(result)
    }

    fn validation(&self, result: &ValidationResult) -> String {
        to_json(result)
    }

    fn catalog(&self, catalog: &Catalog, category: Option<&str>) -> String {
        let categories: Vec<_> = catalog
            .categories()
            .iter()
            .filter(|c| category.is_none_or(|name| c.name() == name))
            .map(|c| {
                json!({
                    "name": c.name(),
                    "rules": c.rules().iter().map(|r| json!({
                        "name": r.name(),
                        "pattern": r.pattern_str(),
                        "description": r.description(),
                    })).collect::<Vec<_>>(),
                })
            })
            .collect();

        to_json(&json!({ "categories": categories }))
    }
}
