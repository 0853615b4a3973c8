use diagram_server::config::ServerConfig;
use diagram_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid server configuration");
    let addr = config.addr;
    info!(
        %addr,
        max_trips = config.max_trips,
        max_stops_per_trip = config.max_stops_per_trip,
        "starting diagram layout server"
    );

    // Build app state
    let state = AppState::new(config);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    println!("Diagram layout server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health  - Health check");
    println!("  POST /layout  - Lay out stations for a set of trips");

    axum::serve(listener, app).await.expect("Server error");
}
