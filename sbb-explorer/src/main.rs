use std::process::ExitCode;

use sbb_explorer::config::Config;
use sbb_explorer::opendata::OpenDataClient;
use sbb_explorer::web::{AppState, ROUTES, RouteTarget, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    config.log_startup();

    let opendata = OpenDataClient::new(config.opendata())?;
    let app = create_router(AppState::new(opendata), &config.static_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("SBB Explorer listening on http://{addr}");

    info!("Pages:");
    for entry in ROUTES {
        match entry.target {
            RouteTarget::View(view) => info!("  {:<14} {view:?}", entry.path),
            RouteTarget::Redirect(to) => info!("  {:<14} -> {to}", entry.path),
        }
    }
    info!("API Endpoints:");
    info!("  GET  /health                       - Health check");
    info!("  GET  /api/datasets/{{name}}          - Raw dataset");
    info!("  GET  /api/places/{{place}}/coordinates - Geocoding");
    info!("  GET  /api/places/{{place}}/language    - Language region");

    axum::serve(listener, app).await?;
    Ok(())
}
