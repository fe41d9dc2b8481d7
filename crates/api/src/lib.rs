//! HTTP API for the seller service.
//!
//! Exposes seller creation, lookup and listing over REST, with structured
//! logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use application::SellerService;
use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use seller_store::SellerRepository;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use config::{Config, LogFormat};
use routes::sellers::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<R: SellerRepository + Clone + 'static>(
    state: Arc<AppState<R>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::system::metrics))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::system::health))
        .route(
            "/api/sellers",
            get(routes::sellers::list::<R>).post(routes::sellers::create::<R>),
        )
        .route("/api/sellers/{seller_id}", get(routes::sellers::show::<R>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state over the given repository.
pub fn create_default_state<R: SellerRepository + Clone + 'static>(
    repository: R,
) -> Arc<AppState<R>> {
    Arc::new(AppState {
        seller_service: SellerService::new(repository),
    })
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `config.log_level` when it parses.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}
