use analytics::SummaryEngine;
use catalog_store::{
    demo_catalog, demo_instructor_alice, demo_instructor_jane, load_catalog, save_catalog,
    CatalogStore,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the instructor insights service.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve(args) => handle_serve(args).await,
        Commands::Seed(args) => handle_seed(args).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Read-only analytics API over an instructor/course/enrollment catalog.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server.
    Serve(ServeArgs),
    /// Write the demo catalog to a JSON file and print the instructor ids.
    Seed(SeedArgs),
}

#[derive(Parser)]
struct ServeArgs {
    /// Overrides the configured server port.
    #[arg(long)]
    port: Option<u16>,

    /// Serves entities from this catalog JSON file instead of the configured
    /// one (or the built-in demo catalog).
    #[arg(long)]
    data: Option<PathBuf>,
}

#[derive(Parser)]
struct SeedArgs {
    /// Where to write the catalog JSON file.
    #[arg(long, default_value = "catalog.json")]
    out: PathBuf,
}

// ==============================================================================
// Command Handlers
// ==============================================================================

async fn handle_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = configuration::load_config()?;
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(data) = args.data {
        config.catalog.data_file = Some(data);
    }

    let store = match &config.catalog.data_file {
        Some(path) => CatalogStore::from_data(load_catalog(path)?),
        None => {
            tracing::info!("No catalog file configured; serving the demo catalog");
            CatalogStore::from_data(demo_catalog())
        }
    };

    let addr = config.bind_addr()?;
    web_server::run_server(addr, store).await
}

async fn handle_seed(args: SeedArgs) -> anyhow::Result<()> {
    let data = demo_catalog();
    save_catalog(&args.out, &data)?;

    // Print each demo instructor's id with the summary a client should see,
    // so the seeded catalog can be verified against the running API.
    let store = CatalogStore::from_data(data);
    let engine = SummaryEngine::new();
    for instructor_id in [demo_instructor_jane(), demo_instructor_alice()] {
        let summary = engine
            .instructor_summary(&store, &instructor_id.to_string())
            .await?;
        tracing::info!(
            instructor = %instructor_id,
            url = format!("http://localhost:3000/api/v1/analytics/instructor-summary/{instructor_id}"),
            "Expected summary:\n{}",
            serde_json::to_string_pretty(&summary)?
        );
    }
    Ok(())
}
