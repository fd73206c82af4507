use axum::{
    http::{header, Method},
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::graph::generators::depot_network;
use crate::graph::io::{from_json_file, Network};
use crate::graph::Graph;
use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    pub enable_cors: bool,
    /// JSON adjacency document to serve; the depot network when unset
    pub network_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            static_dir: "web".to_string(),
            enable_cors: true,
            network_file: None,
        }
    }
}

impl ServerConfig {
    /// Loads the network this configuration points at
    pub fn load_network(&self) -> crate::Result<Network> {
        match &self.network_file {
            Some(path) => from_json_file(path),
            None => Ok(depot_network()),
        }
    }
}

/// Build the application router for a configuration and network
pub fn build_app(config: &ServerConfig, network: Network) -> Router {
    let app_state = AppState::new(network);

    let mut app = Router::new()
        // API routes
        .merge(create_router())
        // Static file serving for a renderer frontend
        .fallback_service(ServeDir::new(&config.static_dir))
        .with_state(app_state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]);

        app = app.layer(ServiceBuilder::new().layer(cors).into_inner());
    }

    app
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let network = config.load_network()?;
    log::info!(
        "Serving network with {} locations and {} routes",
        network.vertex_count(),
        network.edge_count()
    );

    let app = build_app(&config, network);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    log::info!("Route server starting on http://{}", addr);
    log::info!("Serving static files from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
