//! `convert` and `convert-code`.

use super::{exit_code, RunContext};
use anyhow::{Context, Result};
use appiumize_cli::convert::convert_file;
use appiumize_core::Platform;
use appiumize_rule_engine::rewrite;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub platform: Option<Platform>,
}

pub async fn run_convert(options: &ConvertOptions, ctx: &RunContext) -> Result<ExitCode> {
    let platform = options.platform.unwrap_or(ctx.settings.default_platform);
    tracing::debug!(input = %options.input.display(), %platform, "convert");

    let result = convert_file(
        &options.input,
        options.output.as_deref(),
        platform,
        &ctx.catalog,
        &ctx.settings.output_prefix,
    )
    .await;

    if let Some(message) = result.message.as_deref().filter(|_| !result.is_success()) {
        tracing::error!(input = %options.input.display(), "{message}");
    }
    println!("{}", ctx.formatter.file_conversion(&result));
    Ok(exit_code(result.is_success()))
}

/// Convert `code`, or stdin when no code is given
pub fn run_convert_code(
    code: Option<String>,
    platform: Option<Platform>,
    ctx: &RunContext,
) -> Result<ExitCode> {
    let platform = platform.unwrap_or(ctx.settings.default_platform);
    let code = match code {
        Some(code) => code,
        None => read_stdin()?,
    };

    let result = rewrite(&code, platform, &ctx.catalog);
    match (&result.rules_applied_count, &result.message) {
        (Some(applied), _) => tracing::info!(%platform, rules_applied = applied, "converted code"),
        (None, Some(message)) => tracing::error!(%platform, "{message}"),
        (None, None) => {}
    }

    println!("{}", ctx.formatter.conversion(&result));
    Ok(exit_code(result.is_success()))
}

pub(crate) fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read code from stdin")?;
    Ok(buf)
}
