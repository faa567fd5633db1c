//! `payable` - read the total payable and its currency from PDF invoices.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{batch, config, process};

/// Read the total payable and its currency from PDF invoices
#[derive(Parser)]
#[command(name = "payable", author, version, about, long_about = None)]
struct Cli {
    /// Log more: -v info, -vv debug, -vvv trace (RUST_LOG overrides)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON config file [default: <user config dir>/payable/config.json]
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the total from one PDF invoice
    Process(process::ProcessArgs),

    /// Extract totals from every PDF matching a glob
    Batch(batch::BatchArgs),

    /// Inspect or create the config file
    Config(config::ConfigArgs),
}

fn level_name(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Our crates log at the requested level; dependencies stay at warn.
fn log_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level_name(verbose);
        EnvFilter::new(format!("warn,payable={level},payable_core={level}"))
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Process(args) => process::run(args, config_path).await,
        Commands::Batch(args) => batch::run(args, config_path).await,
        Commands::Config(args) => config::run(args, config_path).await,
    }
}
