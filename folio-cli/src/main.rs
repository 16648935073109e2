//! Folio CLI - browse the Open Library catalog from the terminal

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_core::config::{DEFAULT_API_URL, DEFAULT_COVERS_URL};
use folio_core::{CatalogConfig, CoverSize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base URL of the catalog API
    #[arg(long, global = true, env = "FOLIO_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Base URL of the cover image service
    #[arg(long, global = true, env = "FOLIO_COVERS_URL", default_value = DEFAULT_COVERS_URL)]
    covers_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the default catalog
    List {
        /// Page to show; out-of-range pages fall back to page 1
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search books by title and/or first publication year
    Search {
        /// Title to search for (at least 2 characters)
        #[arg(short, long, default_value = "")]
        title: String,

        /// Four-digit first publication year
        #[arg(short, long, default_value = "")]
        year: String,

        /// Page to show; out-of-range pages fall back to page 1
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display details of a book
    Show {
        /// Work identifier, e.g. OL17365W or /works/OL17365W
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the cover image URL for a cover identifier
    Cover {
        /// Numeric cover identifier
        #[arg(allow_negative_numbers = true)]
        cover_id: Option<i64>,

        /// Image size (S, M, L)
        #[arg(short, long, default_value = "M")]
        size: CoverSize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "folio_cli=debug,folio_core=debug"
    } else {
        "folio_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CatalogConfig::from_env()
        .with_api_url(cli.api_url)
        .with_covers_url(cli.covers_url);

    match cli.command {
        Commands::List { page, json } => commands::list(config, page, json).await,

        Commands::Search {
            title,
            year,
            page,
            json,
        } => commands::search(config, &title, &year, page, json).await,

        Commands::Show { id, json } => commands::show(config, &id, json).await,

        Commands::Cover { cover_id, size } => commands::cover(&config, cover_id, size),
    }
}
