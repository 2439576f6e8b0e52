use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod api;
pub mod browser_support;
pub mod formats;
pub mod serve;
pub mod startup_checks;

pub use browser_support::{supports_avif, supports_webp};
pub use formats::{OutputFormat, determine_output_format};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub app: AppConfig,
    pub images: ImagesConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub name: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImagesConfig {
    pub directory: PathBuf,
    #[serde(default = "default_cache_max_age_seconds")]
    pub cache_max_age_seconds: u64,
}

fn default_cache_max_age_seconds() -> u64 {
    86400
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            app: AppConfig {
                name: "Modern Image Support".to_string(),
                log_level: "info".to_string(),
            },
            images: ImagesConfig {
                directory: PathBuf::from("images"),
                cache_max_age_seconds: default_cache_max_age_seconds(),
            },
        }
    }
}

use axum::{
    Router,
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub images: serve::ImageLibrary,
    pub config: Config,
}

async fn image_handler(
    State(app_state): State<AppState>,
    Path(path): Path<String>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let user_agent = serve::user_agent_from_headers(&headers);
    app_state.images.serve_image(&path, user_agent).await
}

pub async fn create_app(config: Config) -> Router {
    let images = serve::ImageLibrary::new(config.images.clone());

    let app_state = AppState {
        images,
        config: config.clone(),
    };

    Router::new()
        .route("/images/{*path}", axum::routing::get(image_handler))
        .route("/api/support", axum::routing::get(api::support_handler))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    let method = request.method();
                    let uri = request.uri();
                    let matched_path = request
                        .extensions()
                        .get::<axum::extract::MatchedPath>()
                        .map(|matched_path| matched_path.as_str());

                    tracing::info_span!(
                        "http_request",
                        method = %method,
                        uri = %uri,
                        matched_path,
                    )
                })
                .on_request(|request: &axum::http::Request<_>, _span: &tracing::Span| {
                    let method = request.method();
                    let uri = request.uri();
                    let headers = request.headers();
                    let user_agent = headers
                        .get("user-agent")
                        .and_then(|h| h.to_str().ok())
                        .unwrap_or("-");
                    let referer = headers
                        .get("referer")
                        .and_then(|h| h.to_str().ok())
                        .unwrap_or("-");

                    tracing::info!(
                        target: "access_log",
                        method = %method,
                        path = %uri.path(),
                        query = ?uri.query(),
                        user_agent = %user_agent,
                        referer = %referer,
                        "request"
                    );
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        let status = response.status();
                        let size = response
                            .headers()
                            .get("content-length")
                            .and_then(|h| h.to_str().ok())
                            .unwrap_or("-");

                        tracing::info!(
                            target: "access_log",
                            status = %status,
                            size = %size,
                            latency_ms = %latency.as_millis(),
                            "response"
                        );
                    },
                ),
        )
        .with_state(app_state)
}
