//! `payable config` - inspect or create the JSON config file.
//!
//! Every subcommand works on the file in effect: the global `--config`
//! path when given, else `<user config dir>/payable/config.json`.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;
use tracing::debug;

use payable_core::PayableConfig;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the configuration in effect
    Show,

    /// Write a config file with every setting at its default
    Init {
        /// Where to write [default: the config file in effect]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print one setting by dotted key, e.g. "pdf.min_column_gap"
    Get { key: String },

    /// Print which config file is in effect
    Path,
}

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let path = config_file(config_path);
            if config_path.is_none() && !path.exists() {
                eprintln!(
                    "{} No config file at {}, showing defaults",
                    style("ℹ").blue(),
                    path.display()
                );
            }
            let config = load_config(config_path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommand::Init { output, force } => {
            let path = output.unwrap_or_else(|| config_file(config_path));
            write_default(&path, force)?;
            println!("{} Wrote default config to {}", style("✓").green(), path.display());
        }
        ConfigCommand::Get { key } => {
            let value = lookup(&load_config(config_path)?, &key)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        ConfigCommand::Path => {
            let path = config_file(config_path);
            let status = if path.exists() {
                style("exists").green()
            } else {
                style("not created, run `payable config init`").yellow()
            };
            println!("{} ({})", path.display(), status);
        }
    }
    Ok(())
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("payable")
        .join("config.json")
}

/// The explicit config file, else the default location.
pub fn config_file(explicit: Option<&str>) -> PathBuf {
    explicit.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Load the config in effect. An explicit file must exist; a missing
/// default file means built-in defaults.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<PayableConfig> {
    let path = config_file(explicit);
    if explicit.is_none() && !path.exists() {
        return Ok(PayableConfig::default());
    }

    debug!("Loading config from {}", path.display());
    Ok(PayableConfig::from_file(&path)?)
}

fn write_default(path: &std::path::Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists, pass --force to replace it",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    PayableConfig::default().save(path)?;
    Ok(())
}

/// Value of a dotted key such as "output.format".
pub fn lookup(config: &PayableConfig, key: &str) -> anyhow::Result<Value> {
    let mut value = serde_json::to_value(config)?;
    for part in key.split('.') {
        value = value
            .get_mut(part)
            .map(Value::take)
            .ok_or_else(|| anyhow::anyhow!("Unknown config key: {}", key))?;
    }
    Ok(value)
}
