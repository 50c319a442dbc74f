// main.rs only boots the router and server

mod handlers;
mod logging;
mod router;
mod state;
mod templates;

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use state::AppState;

#[derive(Parser)]
#[command(name = "atlas-web")]
#[command(about = "Serves the hydrogen and steel facility maps")]
#[command(version)]
struct Cli {
    /// Workbook to serve (overrides ATLAS_DATA)
    #[arg(long)]
    data: Option<PathBuf>,
    /// Port to bind (overrides PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    logging::init_logging();

    let data_path = cli
        .data
        .or_else(|| env::var("ATLAS_DATA").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("data/data_final.xlsx"));
    let port = cli
        .port
        .or_else(|| env::var("PORT").ok().and_then(|s| s.parse().ok()))
        .unwrap_or(3000);

    let app_state = AppState {
        data_path: data_path.clone(),
    };
    let app = router::app_router(app_state);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!(%bind_addr, data = %data_path.display(), "atlas web server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
