//! Convertibility analysis
//!
//! Tests every rule pattern against the input without replacing anything and
//! combines the result with a substring heuristic for Perfecto namespaces.

use crate::Catalog;
use appiumize_core::ValidationResult;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Substrings that mark code as written against the Perfecto API
///
/// This is a superset signal: command families without a rule still count.
pub const PERFECTO_MARKERS: &[&str] = &[
    "PerfectoMobileBy",
    "mobile:application:",
    "mobile:touch:",
    "mobile:device:",
    "mobile:screen:",
    "mobile:checkpoint:",
    "mobile:location:",
    "mobile:browser:",
    "mobile:network.settings:",
    "mobile:timer:",
    "mobile:keyboard:",
    "mobile:presskey",
    "mobile:text:",
    "mobile:image:",
    "mobile:notifications:",
    "mobile:scroll",
];

/// Whether any Perfecto namespace marker appears in `source`
pub fn is_perfecto_code(source: &str) -> bool {
    PERFECTO_MARKERS.iter().any(|marker| source.contains(marker))
}

/// Report which rules and categories match `source`
pub fn analyze(source: &str, catalog: &Catalog) -> ValidationResult {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let mut matching_patterns: Vec<String> = Vec::new();
        for rule in catalog.rules() {
            let pattern = rule.pattern_str();
            if rule.is_match(source) && !matching_patterns.iter().any(|p| p == pattern) {
                matching_patterns.push(pattern.to_string());
            }
        }

        let matched_categories: Vec<String> = catalog
            .categories()
            .iter()
            .filter(|category| {
                matching_patterns
                    .iter()
                    .any(|pattern| category.owns_pattern(pattern))
            })
            .map(|category| category.name().to_string())
            .collect();

        ValidationResult::success(matching_patterns, matched_categories, is_perfecto_code(source))
    }));

    outcome.unwrap_or_else(|_| ValidationResult::failure("Analysis panicked".to_string()))
}
