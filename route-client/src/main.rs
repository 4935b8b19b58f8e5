use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use route_client::backend::RoutingClient;
use route_client::config::ClientConfig;
use route_client::planner::RoutePlanner;
use route_client::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let client = match RoutingClient::new(config.backend.clone()) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to create routing backend client");
            return ExitCode::FAILURE;
        }
    };

    // Stops are fetched on every page load, not here.
    let planner = RoutePlanner::new(client, config.ordering);

    let app = create_router(AppState::new(planner));

    let listener = match tokio::net::TcpListener::bind(config.listen_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, addr = %config.listen_addr, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    let addr = config.listen_addr;
    println!("Transit Route Finder listening on http://{addr}");
    println!("Routing backend: {}", config.backend.base_url);
    println!("Response ordering: {}", config.ordering);
    println!();
    println!("Open http://{addr} in your browser.");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
