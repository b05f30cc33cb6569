//! Appiumize CLI - rewrite Perfecto mobile test scripts into Appium calls.

mod cli;
mod commands;

use anyhow::{Context, Result};
use appiumize_cli::catalog::build_catalog;
use appiumize_cli::formatters::formatter;
use appiumize_cli::logging;
use appiumize_cli::server::ToolServer;
use appiumize_config::ConfigManager;
use appiumize_core::Platform;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "appiumize", version)]
#[command(about = "Rewrite Perfecto mobile test scripts into Appium Java client calls", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file path (default: ~/.appiumize/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Extra TOML rule file, loaded after the configured ones (can be
    /// specified multiple times)
    #[arg(long = "rules", value_name = "FILE", global = true)]
    rule_files: Vec<PathBuf>,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Convert a file and write the result
    ///
    /// Examples:
    ///   appiumize convert LoginTest.java            # writes converted_LoginTest.java
    ///   appiumize convert LoginTest.java -p ios -o LoginTestIos.java
    Convert {
        /// File containing Perfecto code
        file: PathBuf,

        /// Output file (default: <output_prefix><file name> next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Target platform (android or ios)
        #[arg(short, long)]
        platform: Option<Platform>,
    },

    /// Convert inline code, or stdin when CODE is omitted
    ConvertCode {
        code: Option<String>,

        /// Target platform (android or ios)
        #[arg(short, long)]
        platform: Option<Platform>,
    },

    /// Check whether a file (or stdin) contains convertible Perfecto code
    Validate { file: Option<PathBuf> },

    /// List rule categories and rules in the order they are applied
    Rules {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Run the JSON-RPC tool server on stdin/stdout
    Serve,

    /// Manage appiumize configuration
    Config {
        #[command(subcommand)]
        command: commands::ConfigCommand,
    },
}

fn main() -> Result<ExitCode> {
    let Cli {
        command,
        config,
        rule_files,
        verbose,
        json,
    } = Cli::parse();

    if let Command::Config { command } = command {
        commands::handle_config_command(command, config)?;
        return Ok(ExitCode::SUCCESS);
    }

    let runtime = Runtime::new().context("Failed to create tokio runtime")?;
    runtime.block_on(run(command, config, rule_files, verbose, json))
}

async fn run(
    command: Command,
    config: Option<PathBuf>,
    rule_files: Vec<PathBuf>,
    verbose: u8,
    json: bool,
) -> Result<ExitCode> {
    let config_path = match config {
        Some(path) => path,
        None => ConfigManager::config_path()?,
    };
    let manager = ConfigManager::load_or_default(&config_path)
        .await
        .with_context(|| format!("Failed to load config {}", config_path.display()))?;
    let settings = manager.config().settings.clone();

    let log_dir = matches!(command, Command::Serve).then_some(settings.log_dir.as_path());
    if let Some(log_file) = logging::init(&settings.log_level, verbose, log_dir)? {
        tracing::info!(path = %log_file.display(), "logging to file");
    }
    tracing::debug!(config = %config_path.display(), "loaded settings");

    let catalog = build_catalog(&settings.rule_files, &rule_files)?;

    if let Command::Serve = command {
        let server = ToolServer::new(
            Arc::new(catalog),
            settings.default_platform,
            settings.output_prefix.clone(),
        );
        server.run().await.context("Tool server I/O failed")?;
        return Ok(ExitCode::SUCCESS);
    }

    let ctx = cli::RunContext {
        catalog,
        settings,
        formatter: formatter(json),
    };

    match command {
        Command::Convert {
            file,
            output,
            platform,
        } => {
            cli::convert::run_convert(
                &cli::convert::ConvertOptions {
                    input: file,
                    output,
                    platform,
                },
                &ctx,
            )
            .await
        }
        Command::ConvertCode { code, platform } => {
            cli::convert::run_convert_code(code, platform, &ctx)
        }
        Command::Validate { file } => cli::validate::run_validate(file.as_deref(), &ctx).await,
        Command::Rules { category } => {
            cli::rules::run_rules(category.as_deref(), &ctx)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Serve | Command::Config { .. } => Ok(ExitCode::SUCCESS),
    }
}
