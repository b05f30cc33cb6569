//! Catalog assembly: built-in rules plus the user's rule files.

use anyhow::{Context, Result};
use appiumize_rule_engine::{load_built_in_catalog, Catalog, RuleLoader};
use std::path::PathBuf;

/// Build the catalog used by every command.
///
/// Rule files from the config come first, then the ones given with
/// `--rules`, so command-line rules run last.
pub fn build_catalog(config_files: &[PathBuf], extra_files: &[PathBuf]) -> Result<Catalog> {
    let mut catalog = load_built_in_catalog().context("Failed to compile built-in rules")?;
    tracing::debug!(
        categories = catalog.categories().len(),
        rules = catalog.len(),
        "loaded built-in catalog"
    );

    let files: Vec<&PathBuf> = config_files.iter().chain(extra_files).collect();
    if files.is_empty() {
        return Ok(catalog);
    }

    let loader = RuleLoader::new(files);
    let added = loader
        .apply_to(&mut catalog)
        .context("Failed to load rule files")?;
    tracing::info!(files = loader.files().len(), rules = added, "loaded user rules");

    Ok(catalog)
}
