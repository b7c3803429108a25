pub mod dashboards;
pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;
pub mod usecases;

use std::sync::Arc;

use axum::http::{header, Method};
use axum::middleware;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use shared::app_context::{self, AppContext};
use shared::remote::client::ScriptServiceClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let catalog = app_context::load_status_catalog(&config.status_catalog)?;

    if !config.remote.is_configured() {
        tracing::warn!("Remote script URL is not configured, data calls will fail until it is set");
    }
    let remote = ScriptServiceClient::new(&config.remote)
        .map_err(|e| anyhow::anyhow!("remote client init failed: {e}"))?;

    let addr = config.server.socket_addr()?;
    app_context::initialize(AppContext::new(config, catalog, Arc::new(remote)))?;

    // Стартуем и с пустым снимком, если внешний сервис недоступен
    match domain::a001_document::service::refresh(app_context::get()).await {
        Ok(snapshot) => tracing::info!(
            "Initial data loaded: {} documents, {} staff",
            snapshot.documents.len(),
            snapshot.staff.len()
        ),
        Err(e) => tracing::warn!("Initial data load failed, starting empty: {}", e),
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes()
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors);

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
