//! Widget Board CLI
//!
//! Command-line interface for Widget Board:
//! - Serve the dashboard
//! - Generate a config file
//! - Check a catalog source
//! - Export saved widgets

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use widgetboard::api::{serve, AppState};
use widgetboard::catalog::source_for;
use widgetboard::config::{generate_default_config, Config, ConfigOrigin, LoggingConfig};
use widgetboard::dashboard::Dashboard;
use widgetboard::persistence::{FileStore, PersistenceAdapter, StorageParseError};

#[derive(Parser)]
#[command(name = "widgetboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dashboard builder with a category sidebar and saved widgets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the dashboard server
    Serve {
        /// Config file (default: search standard locations)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load a catalog and print a summary
    Catalog {
        /// URL or file path (default: configured source)
        source: Option<String>,
    },

    /// Print saved widgets as JSON
    Export {
        /// Config file (default: search standard locations)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, host, port } => {
            let (mut config, origin) = load_config(config.as_deref())?;
            if let Some(host) = host {
                config.api.host = host;
            }
            if let Some(port) = port {
                config.api.port = port;
            }

            init_tracing(&config.logging);
            origin.log();
            run_server(config).await?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing config to {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }

        Commands::Catalog { source } => {
            let (config, _) = Config::locate_default();
            let location = source.unwrap_or(config.catalog.source);

            let catalog = source_for(&location, config.catalog.request_timeout_ms)?
                .load()
                .await
                .with_context(|| format!("loading catalog from {}", location))?;

            println!("Catalog: {}", location);
            println!("{:<24} {:<32} {:>6}", "CATEGORY", "IMAGE", "ITEMS");
            for category in &catalog.categories {
                println!(
                    "{:<24} {:<32} {:>6}",
                    category.name,
                    category.graph,
                    category.widgets.len()
                );
            }
            println!();
            println!(
                "{} categories, {} items",
                catalog.categories.len(),
                catalog.item_count()
            );
        }

        Commands::Export { config } => {
            let (config, _) = load_config(config.as_deref())?;
            let store = Arc::new(FileStore::new(config.storage.data_path()));
            let persistence = PersistenceAdapter::new(store, &config.storage.key);

            let widgets = match persistence.load() {
                Ok(widgets) => widgets,
                Err(StorageParseError::Absent(_)) => Vec::new(),
                Err(e) => return Err(e.into()),
            };
            println!("{}", serde_json::to_string_pretty(&widgets)?);
        }
    }

    Ok(())
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting Widget Board v{}", env!("CARGO_PKG_VERSION"));

    let data_path = config.storage.data_path();
    tracing::info!("Data directory: {:?}", data_path);

    let store = Arc::new(FileStore::new(data_path));
    let persistence = PersistenceAdapter::new(store, &config.storage.key);
    let dashboard = Dashboard::bootstrap(persistence, config.storage.restore_editable);

    let source = source_for(&config.catalog.source, config.catalog.request_timeout_ms)
        .context("configuring catalog source")?;

    let state = AppState::new(dashboard, config.api);
    state.spawn_catalog_load(source);

    serve(state).await?;

    tracing::info!("Widget Board stopped");
    Ok(())
}

/// Resolve the config without logging; tracing is not installed yet
fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<(Config, ConfigOrigin)> {
    match path {
        Some(path) => {
            let config = Config::load_with_env(path)?;
            let origin = ConfigOrigin::File {
                path: path.to_path_buf(),
                skipped: Vec::new(),
            };
            Ok((config, origin))
        }
        None => Ok(Config::locate_default()),
    }
}

/// `RUST_LOG` takes precedence over the configured level
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter_directive().into());

    if logging.is_json() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
