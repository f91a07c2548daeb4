mod commands;
mod render;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pokedex_client::PokeClient;
use pokedex_core::constants::{DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS};
use pokedex_core::env_config::{env_non_empty, env_parse_with_default};
use pokedex_storage::JsonFileStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Browse and search the Pokémon catalog from the terminal", long_about = None)]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one raw list page
    List {
        /// Page size, 1-1000 (anything else falls back to 20)
        #[arg(short, long, default_value = "20")]
        limit: String,
        /// Start offset, 0-10000 (anything else falls back to 0)
        #[arg(short, long, default_value = "0")]
        offset: String,
    },
    /// Load the catalog page by page and print it
    Catalog {
        /// Number of 90-entry pages to load
        #[arg(short, long, default_value = "1")]
        pages: u32,
    },
    /// Search by name and remember the term
    Search { term: String },
    /// Show one Pokémon in detail
    Show { name: String },
    /// Resolve a path such as /pokemon/pikachu and render it
    Open { path: String },
    /// Print recent search terms
    History,
    /// Search as you type: one stdin line per keystroke state
    Browse,
}

/// Runtime settings read from the environment.
pub(crate) struct Settings {
    pub api_url: String,
    pub timeout: Duration,
    pub store_path: Option<PathBuf>,
}

impl Settings {
    fn from_env() -> Self {
        Self {
            api_url: env_non_empty("POKEDEX_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            timeout: Duration::from_secs(env_parse_with_default(
                "POKEDEX_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )),
            store_path: env_non_empty("POKEDEX_STORE_PATH").map(PathBuf::from),
        }
    }

    pub(crate) fn client(&self) -> Result<PokeClient> {
        PokeClient::with_timeout(&self.api_url, self.timeout).context("failed to build HTTP client")
    }

    pub(crate) fn store(&self) -> Result<JsonFileStore> {
        let path = match &self.store_path {
            Some(path) => path.clone(),
            None => JsonFileStore::default_path()?,
        };
        let store = JsonFileStore::new(path);
        tracing::debug!(path = %store.path().display(), "using store file");
        Ok(store)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env();
    let json = cli.json;

    match cli.command {
        Commands::List { limit, offset } => {
            commands::list::run(&settings, &limit, &offset, json).await?;
        },
        Commands::Catalog { pages } => {
            commands::catalog::run(&settings, pages, json).await?;
        },
        Commands::Search { term } => {
            commands::search::run(&settings, &term, json).await?;
        },
        Commands::Show { name } => {
            commands::show::run_show(&settings, &name, json).await?;
        },
        Commands::Open { path } => {
            commands::show::run_open(&settings, &path, json).await?;
        },
        Commands::History => {
            commands::history::run(&settings, json)?;
        },
        Commands::Browse => {
            commands::browse::run(&settings, json).await?;
        },
    }

    Ok(())
}
