use crate::browser_support::{supports_avif, supports_webp};
use crate::formats::determine_output_format;
use crate::serve::user_agent_from_headers;
use axum::{
    http::HeaderMap,
    response::{IntoResponse, Json},
};
use serde::Serialize;

#[derive(Serialize)]
pub struct SupportResponse {
    pub user_agent: Option<String>,
    pub webp: bool,
    pub avif: bool,
    pub preferred: &'static str,
}

/// Handler for GET /api/support
///
/// Reports which modern image formats the calling browser supports, based
/// on its User-Agent header.
pub async fn support_handler(headers: HeaderMap) -> impl IntoResponse {
    let user_agent = user_agent_from_headers(&headers);

    let response = SupportResponse {
        user_agent: user_agent.map(|ua| ua.to_string()),
        webp: supports_webp(user_agent),
        avif: supports_avif(user_agent),
        preferred: determine_output_format(user_agent).extension(),
    };

    Json(response)
}
