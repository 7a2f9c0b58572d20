// ABOUTME: CLI entry point for airtable-replicator
// ABOUTME: Parses commands and routes to interactive or one-shot handlers

use airtable_replicator::airtable::{AirtableClient, ClientConfig};
use airtable_replicator::{commands, config, interactive};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "airtable-replicator")]
#[command(about = "Console client for Airtable: create bases, browse tables, duplicate across bases", long_about = None)]
#[command(version)]
struct Cli {
    /// Set the log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    log: String,
    /// Path to the YAML configuration file (defaults to ./config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Airtable API key (falls back to AIRTABLE_API_KEY, then the config file)
    #[arg(long = "api-key", env = "AIRTABLE_API_KEY", global = true)]
    api_key: Option<String>,
    /// Per-request timeout in seconds
    #[arg(long = "timeout-secs", global = true)]
    timeout_secs: Option<u64>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the bases this API key is authorized to see
    Bases,
    /// Create a new base in a configured workspace
    CreateBase {
        /// Name for the new base
        #[arg(long)]
        name: String,
        /// Workspace ID (defaults to the sole configured workspace)
        #[arg(long)]
        workspace: Option<String>,
    },
    /// Duplicate a table (structure and records) into another base
    Duplicate {
        /// Source base ID
        #[arg(long = "source-base")]
        source_base: String,
        /// Table name in the source base (case-sensitive)
        #[arg(long)]
        table: String,
        /// Destination base ID
        #[arg(long = "dest-base")]
        dest_base: String,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // 1. RUST_LOG environment variable has highest precedence
    // 2. --log flag is used if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log.clone()));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = config::load(cli.config.as_deref())?;
    let api_key = config.resolve_api_key(cli.api_key)?;

    let client_config = ClientConfig {
        timeout: config.request_timeout(cli.timeout_secs),
        ..ClientConfig::new(api_key)
    };
    let client = AirtableClient::new(client_config).context("Failed to create Airtable client")?;

    match cli.command {
        None => interactive::run(&client, &config).await,
        Some(Commands::Bases) => commands::list_bases(&client).await,
        Some(Commands::CreateBase { name, workspace }) => {
            commands::create_base(&client, &config, &name, workspace).await
        }
        Some(Commands::Duplicate {
            source_base,
            table,
            dest_base,
            yes,
        }) => commands::duplicate(&client, &source_base, &table, &dest_base, yes).await,
    }
}
