// Web server: Axum-based JSON API.
//
// Everything lives under /api/v1. Collection routes also answer with a
// trailing slash so clients written against either form work.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::analysis::AnalysisService;
use crate::config::Config;

pub mod error;
pub mod handlers;

pub use error::{api_error, ApiError};

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AnalysisService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(service: AnalysisService, config: Config) -> Self {
        Self {
            service: Arc::new(service),
            config: Arc::new(config),
        }
    }
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: Config, service: AnalysisService) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let app = build_router(AppState::new(service, config));

    info!("Quarry API listening on http://{addr}/api/v1");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    use handlers::{analysis, health, search};

    let api = Router::new()
        .route(
            "/analysis",
            get(analysis::list_analyses).post(analysis::create_analyses),
        )
        .route(
            "/analysis/",
            get(analysis::list_analyses).post(analysis::create_analyses),
        )
        .route("/analysis/{id}", get(analysis::get_analysis))
        .route("/search", get(search::search_analyses))
        .route("/search/", get(search::search_analyses))
        .route("/health", get(health::health))
        .route("/health/", get(health::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
