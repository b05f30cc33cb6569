//! Command handlers that run against the loaded catalog.

pub mod convert;
pub mod rules;
pub mod validate;

use appiumize_cli::formatters::Formatter;
use appiumize_config::Settings;
use appiumize_rule_engine::Catalog;
use std::process::ExitCode;

/// Everything a command needs once config and rules are loaded
pub struct RunContext {
    pub catalog: Catalog,
    pub settings: Settings,
    pub formatter: Box<dyn Formatter>,
}

/// Exit code for a finished command: 0 on success, 1 otherwise
pub fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
