//! Human-readable formatter.

use super::Formatter;
use appiumize_core::{ConversionResult, FileConversionResult, ValidationResult};
use appiumize_rule_engine::Catalog;
use colored::*;
use std::fmt::Write;

pub struct HumanFormatter;

impl Formatter for HumanFormatter {
    /// Successful conversions print the converted code alone so the output
    /// can be redirected straight into a file.
    fn conversion(&self, result: &ConversionResult) -> String {
        match &result.converted_code {
            Some(code) if result.is_success() => code.clone(),
            _ => failure_line("Conversion failed", result.message.as_deref()),
        }
    }

    fn file_conversion(&self, result: &FileConversionResult) -> String {
        if !result.is_success() {
            return failure_line(
                &format!("Failed to convert {}", result.input_file.display()),
                result.message.as_deref(),
            );
        }

        let mut out = String::new();
        let _ = writeln!(out, "{} {}", "✓".green(), "File converted".bold());
        let _ = writeln!(out, "  Input:         {}", result.input_file.display());
        if let Some(output) = &result.output_file {
            let _ = writeln!(out, "  Output:        {}", output.display());
        }
        if let Some(platform) = result.platform {
            let _ = writeln!(out, "  Platform:      {}", platform.as_str().cyan());
        }
        if let Some(count) = result.rules_applied_count {
            let _ = write!(out, "  Rules applied: {count}");
        }
        out
    }

    fn validation(&self, result: &ValidationResult) -> String {
        if !result.is_success() {
            return failure_line("Validation failed", result.message.as_deref());
        }

        let mut out = String::new();
        if result.is_convertible {
            let _ = writeln!(out, "{} {}", "✓".green(), "Code is convertible".bold());
        } else {
            let _ = writeln!(
                out,
                "{} {}",
                "✗".yellow(),
                "No Perfecto usage found".bold()
            );
        }
        let _ = writeln!(
            out,
            "  Perfecto markers: {}",
            if result.is_perfecto_code { "yes" } else { "no" }
        );
        let _ = write!(out, "  Matching rules:   {}", result.matching_patterns.len());

        if !result.matched_categories.is_empty() {
            let _ = write!(out, "\n\n{}", "Matched categories:".bold());
            for category in &result.matched_categories {
                let _ = write!(out, "\n  - {}", category.cyan());
            }
        }
        out
    }

    fn catalog(&self, catalog: &Catalog, category: Option<&str>) -> String {
        let mut out = String::new();
        let mut total = 0;

        for cat in catalog
            .categories()
            .iter()
            .filter(|c| category.is_none_or(|name| c.name() == name))
        {
            let _ = writeln!(out, "{} ({})", cat.name().bold(), cat.rules().len());
            for rule in cat.rules() {
                let _ = writeln!(
                    out,
                    "  {:28} {}",
                    rule.name().cyan(),
                    rule.description().bright_black()
                );
            }
            out.push('\n');
            total += cat.rules().len();
        }

        let _ = write!(out, "Total: {total} rule(s)");
        out
    }
}

fn failure_line(headline: &str, message: Option<&str>) -> String {
    match message {
        Some(message) => format!("{} {}: {}", "✗".red(), headline.bold(), message),
        None => format!("{} {}", "✗".red(), headline.bold()),
    }
}
