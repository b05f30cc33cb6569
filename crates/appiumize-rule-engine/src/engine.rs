//! Rewrite engine - applies the catalog to a source blob
//!
//! Rules run in flattened catalog order, each over the output of the one
//! before it. After the last rule the engine injects helpers and imports and
//! finally resolves platform branches. The engine performs no I/O and never
//! returns a partially rewritten buffer.

use crate::inject::{inject_helpers, inject_imports};
use crate::platform::resolve_platform_branches;
use crate::Catalog;
use appiumize_core::{ConversionResult, Platform};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Rewrite `source` for `platform` using every rule in `catalog`
///
/// A failing computed replacement (or a panic inside one) yields an error
/// result that still carries the exact input as `original_code`.
pub fn rewrite(source: &str, platform: Platform, catalog: &Catalog) -> ConversionResult {
    // Nothing shared is mutated inside the closure, so observing it after a
    // panic is fine.
    let outcome = catch_unwind(AssertUnwindSafe(|| apply_catalog(source, platform, catalog)));

    match outcome {
        Ok(Ok((converted, applied))) => {
            ConversionResult::success(source, converted, platform, applied)
        }
        Ok(Err(message)) => ConversionResult::failure(source, platform, message),
        Err(payload) => ConversionResult::failure(source, platform, panic_message(&*payload)),
    }
}

/// Apply every rule, inject helpers and imports, resolve branches. Returns
/// the text plus the number of rules that fired
fn apply_catalog(
    source: &str,
    platform: Platform,
    catalog: &Catalog,
) -> Result<(String, usize), String> {
    let mut output = source.to_string();
    let mut applied = 0;

    for rule in catalog.rules() {
        let replaced = rule
            .apply(&output)
            .map_err(|e| format!("Rule '{}' failed: {}", rule.name(), e))?;
        if let Some(replaced) = replaced {
            output = replaced;
            applied += 1;
        }
    }

    let output = inject_helpers(&output);
    let output = inject_imports(&output);
    let output = resolve_platform_branches(&output, platform);

    Ok((output, applied))
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("Conversion panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("Conversion panicked: {s}")
    } else {
        "Conversion panicked".to_string()
    }
}
