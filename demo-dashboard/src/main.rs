use std::env;

use tower_http::cors::CorsLayer;
use user_dashboard_axum::{AppState, UserStore, dashboard_router};

mod server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    server::init_tracing("demo_dashboard");

    // Connects once at startup; the pool is released when the process
    // exits.
    let users = UserStore::connect().await?;
    let state = AppState::new(users);

    // The dashboard page is fetched from browsers on any origin, so
    // keep CORS wide open like the original deployment.
    let app = dashboard_router(state).layer(CorsLayer::permissive());

    let port = match env::var("PORT") {
        Ok(port) => port.parse::<u16>()?,
        Err(_) => 3000,
    };

    let http_server = server::spawn_http_server(port, app);
    http_server.await?;

    Ok(())
}
