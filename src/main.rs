//! Rolodex - GraphQL person directory service
//!
//! Serves an in-memory person directory over GraphQL, optionally seeded
//! from a JSON file and optionally backed by a remote directory for the
//! list query.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rolodex::config::RolodexConfig;
use rolodex::graphql;
use rolodex::persons::PersonStore;
use rolodex::server;
use rolodex::upstream::UpstreamClient;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rolodex")]
#[command(version)]
#[command(about = "GraphQL person directory service")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "ROLODEX_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GraphQL server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("rolodex={},tower_http=debug", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        let content = std::fs::read_to_string(config_path)?;
        toml::from_str(&content)?
    } else {
        RolodexConfig::default()
    };

    match cli.command {
        Commands::Serve { host, port } => {
            run_serve(config, host, port).await?;
        }
        Commands::Config { default } => {
            show_config(if default { None } else { Some(&config) })?;
        }
    }

    Ok(())
}

async fn run_serve(
    mut config: RolodexConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    tracing::info!("Starting Rolodex");

    let store = match &config.store.seed_file {
        Some(path) => Arc::new(PersonStore::from_seed_file(path).await?),
        None => Arc::new(PersonStore::new()),
    };

    let upstream = UpstreamClient::from_config(&config.upstream)?.map(Arc::new);
    if let Some(client) = &upstream {
        tracing::info!(
            url = client.url(),
            "allPersons will read the remote directory"
        );
    }

    let schema = graphql::build_schema(store, upstream);

    server::serve(&config.server, schema).await?;

    Ok(())
}

fn show_config(config: Option<&RolodexConfig>) -> Result<()> {
    let config = config.cloned().unwrap_or_default();
    let toml = toml::to_string_pretty(&config)?;
    println!("{}", toml);
    Ok(())
}
