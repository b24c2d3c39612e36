use crate::config::{ExtractionConfig, ServiceConfig};
use crate::error::ExtractError;
use crate::fetchers::RequestFetcher;
use axum::routing::get;
use axum::Router;
use log::info;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

mod handlers;

pub use handlers::parse_target_url;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<RequestFetcher>,
    pub options: ExtractionConfig,
}

impl AppState {
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ExtractError> {
        let fetcher = RequestFetcher::new(
            Some(Duration::from_secs(config.timeout.max(1))),
            Some(&config.user_agent),
        )?;
        Ok(Self {
            fetcher: Arc::new(fetcher),
            options: config.extraction,
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::extract).fallback(handlers::method_not_allowed),
        )
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl-C.
pub async fn serve(config: &ServiceConfig) -> Result<(), ExtractError> {
    let state = AppState::from_config(config)?;
    let listener = TcpListener::bind(config.bind.as_str()).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}
