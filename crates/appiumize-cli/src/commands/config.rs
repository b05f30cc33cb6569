use anyhow::{Context, Result};
use appiumize_config::ConfigManager;
use clap::Subcommand;
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Create the config file with default settings
    Init,

    /// Show config file path
    Path,

    /// Print the effective settings
    Show,
}

/// Run a config subcommand against `--config` or `~/.appiumize/config.toml`
pub fn handle_config_command(cmd: ConfigCommand, config: Option<PathBuf>) -> Result<()> {
    let config_path = match config {
        Some(path) => path,
        None => ConfigManager::config_path()?,
    };

    let runtime = Runtime::new().context("Failed to create tokio runtime")?;

    runtime.block_on(async {
        match cmd {
            ConfigCommand::Init => init_config(&config_path).await,
            ConfigCommand::Path => {
                println!("{}", config_path.display());
                Ok(())
            }
            ConfigCommand::Show => show_config(&config_path).await,
        }
    })
}

async fn init_config(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        println!("Config already exists at: {}", config_path.display());
        println!("To reinitialize, please delete the existing config first.");
        return Ok(());
    }

    ConfigManager::init_at(config_path).await?;
    println!("✓ Initialized config at: {}", config_path.display());
    Ok(())
}

async fn show_config(config_path: &Path) -> Result<()> {
    let manager = ConfigManager::load_or_default(config_path)
        .await
        .with_context(|| format!("Failed to read config {}", config_path.display()))?;
    let settings = &manager.config().settings;

    if config_path.exists() {
        println!("Config: {}", config_path.display());
    } else {
        println!("Config: {} (not found, using defaults)", config_path.display());
    }
    println!("  Version: {}", manager.config().version);
    println!("  Default platform: {}", settings.default_platform);
    println!("  Output prefix: {}", settings.output_prefix);
    println!("  Log directory: {}", settings.log_dir.display());
    println!("  Log level: {}", settings.log_level);

    if settings.rule_files.is_empty() {
        println!("  Rule files: none");
    } else {
        println!("  Rule files:");
        for file in &settings.rule_files {
            println!("    - {}", file.display());
        }
    }

    Ok(())
}
