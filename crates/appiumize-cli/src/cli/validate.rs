use super::convert::read_stdin;
use super::{exit_code, RunContext};
use anyhow::{Context, Result};
use appiumize_rule_engine::analyze;
use std::path::Path;
use std::process::ExitCode;

/// Analyze a file, or stdin when no file is given
pub async fn run_validate(file: Option<&Path>, ctx: &RunContext) -> Result<ExitCode> {
    let code = match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => read_stdin()?,
    };

    let result = analyze(&code, &ctx.catalog);
    tracing::info!(
        convertible = result.is_convertible,
        rules = result.matching_patterns.len(),
        "validated code"
    );

    println!("{}", ctx.formatter.validation(&result));
    Ok(exit_code(result.is_success()))
}
