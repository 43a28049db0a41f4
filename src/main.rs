use analytics::select_top_assets;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use market_data::{InMemoryMarketData, MarketData};
use tracing_subscriber::EnvFilter;

/// The main entry point for the Skyra dashboard application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => handle_serve(args).await,
        Commands::TopAssets(args) => handle_top_assets(args).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// The backend for the Skyra sustainable-investing dashboard.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard web server.
    Serve(ServeArgs),
    /// Print the current top-assets ranking to the terminal.
    TopAssets(TopAssetsArgs),
}

#[derive(Parser)]
struct ServeArgs {
    /// Override the configured bind host.
    #[arg(long)]
    host: Option<String>,

    /// Override the configured port.
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Parser)]
struct TopAssetsArgs {
    /// How many assets to rank.
    #[arg(long, default_value_t = 8)]
    limit: usize,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Loads the configuration, applies CLI overrides, and starts the server.
async fn handle_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = configuration::load_config()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "Starting dashboard server"
    );
    web_server::run_server(config).await
}

/// Fetches the catalog, ranks it, and prints the result as a table.
async fn handle_top_assets(args: TopAssetsArgs) -> anyhow::Result<()> {
    let provider = InMemoryMarketData::new();
    let assets = provider.all_assets().await?;
    let top = select_top_assets(assets, args.limit)?;

    let mut table = Table::new();
    table.set_header(vec![
        "Rank", "Symbol", "Name", "Class", "Price", "24h %", "ESG", "1y ROI %",
    ]);
    for (rank, asset) in top.iter().enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            asset.symbol.clone(),
            asset.name.clone(),
            asset.asset_class.to_string(),
            format!("{:.2}", asset.current_price),
            format!("{:.2}", asset.price_change_24h),
            format!("{:.1}", asset.esg_score),
            format!("{:.2}", asset.roi_1y),
        ]);
    }
    println!("{table}");

    Ok(())
}
