//! File conversion on top of the pure rewrite engine.

use appiumize_core::{Error, FileConversionResult, Platform};
use appiumize_rule_engine::{rewrite, Catalog};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Default output path: `<prefix><file name>` next to the input
pub fn default_output_path(input: &Path, prefix: &str) -> appiumize_core::Result<PathBuf> {
    let name = input
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::InvalidPath {
            path: input.to_path_buf(),
            reason: "input has no file name".to_string(),
        })?;
    Ok(input.with_file_name(format!("{prefix}{name}")))
}

/// Convert `input` and write the result
///
/// Every failure is reported in the returned record; nothing is written
/// unless the conversion succeeds.
pub async fn convert_file(
    input: &Path,
    output: Option<&Path>,
    platform: Platform,
    catalog: &Catalog,
    output_prefix: &str,
) -> FileConversionResult {
    match try_convert_file(input, output, platform, catalog, output_prefix).await {
        Ok(result) => result,
        Err(e) => FileConversionResult::failure(input.to_path_buf(), e.to_string()),
    }
}

async fn try_convert_file(
    input: &Path,
    output: Option<&Path>,
    platform: Platform,
    catalog: &Catalog,
    output_prefix: &str,
) -> appiumize_core::Result<FileConversionResult> {
    if !fs::try_exists(input).await? {
        return Err(Error::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    let source = fs::read_to_string(input).await?;
    let result = rewrite(&source, platform, catalog);

    let (Some(converted), Some(applied)) = (result.converted_code, result.rules_applied_count)
    else {
        let message = result
            .message
            .unwrap_or_else(|| "Conversion failed".to_string());
        return Ok(FileConversionResult::failure(input.to_path_buf(), message));
    };

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(input, output_prefix)?,
    };

    fs::write(&output, converted).await?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        %platform,
        rules_applied = applied,
        "converted file"
    );

    Ok(FileConversionResult::success(
        input.to_path_buf(),
        output,
        platform,
        applied,
    ))
}
