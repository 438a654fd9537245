mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventhub_core::listing::ListingState;
use eventhub_core::{Catalog, Settings};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "eventhub")]
#[command(about = "Browse the EventHub catalog and export it as a static site")]
struct Cli {
    /// Catalog file (JSON or TOML) to use instead of the configured one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events, filtered and sorted like the home page
    List {
        /// Case-insensitive text to search for
        #[arg(short, long)]
        query: Option<String>,

        /// Only this category ("all" for every category)
        #[arg(short, long)]
        category: Option<String>,

        /// Only this location ("all" for every location)
        #[arg(short, long)]
        location: Option<String>,

        /// Sort key: date, price or title
        #[arg(short, long, default_value = "date")]
        sort: String,
    },
    /// Show one event in full
    Show { id: String },
    /// List categories, with the "all" option first
    Categories,
    /// List locations
    Locations,
    /// Render every page to static HTML files
    Export {
        /// Output directory
        #[arg(short, long, default_value = "site")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let catalog = load_catalog(&settings, cli.catalog)?;
    let currency = settings.currency.as_str();

    match cli.command {
        Commands::List {
            query,
            category,
            location,
            sort,
        } => {
            let state = ListingState::from_params(
                query.as_deref(),
                category.as_deref(),
                location.as_deref(),
                Some(sort.as_str()),
                None,
            );
            commands::list::run(&catalog, &state, currency)
        }
        Commands::Show { id } => commands::show::run(&catalog, &id, currency),
        Commands::Categories => commands::facets::categories(&catalog),
        Commands::Locations => commands::facets::locations(&catalog),
        Commands::Export { out } => commands::export::run(&catalog, &out, currency),
    }
}

/// `--catalog` wins over the configured path; neither means the bundled catalog.
fn load_catalog(settings: &Settings, flag: Option<PathBuf>) -> Result<Catalog> {
    let path = flag.or_else(|| settings.catalog_path());
    let catalog = Catalog::load_or_bundled(path.as_deref(), settings.catalog_options())?;
    tracing::debug!(events = catalog.len(), source = %catalog.source(), "catalog loaded");
    Ok(catalog)
}
