use crate::ImagesConfig;
use crate::formats::format_preference;
use axum::{
    body::Body,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs::File;
use tokio_util::io::ReaderStream;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid path")]
    InvalidPath,

    #[error("Not found")]
    NotFound,
}

/// Serves images out of a directory of pre-generated format variants.
///
/// A request for `photos/cat.jpg` is answered with `photos/cat.avif` or
/// `photos/cat.webp` when the client's browser supports the format and the
/// variant file exists, falling back to the original file otherwise.
#[derive(Clone)]
pub struct ImageLibrary {
    pub config: ImagesConfig,
}

impl ImageLibrary {
    pub fn new(config: ImagesConfig) -> Self {
        Self { config }
    }

    /// Main entry point for serving images
    pub async fn serve_image(&self, relative_path: &str, user_agent: Option<&str>) -> Response {
        let full_path = match self.resolve(relative_path) {
            Ok(path) => path,
            Err(ServeError::InvalidPath) => {
                return (StatusCode::FORBIDDEN, "Forbidden").into_response();
            }
            Err(_) => {
                error!("Image file not found: {}", relative_path);
                return (StatusCode::NOT_FOUND, "Image not found").into_response();
            }
        };

        for format in format_preference(user_agent) {
            let variant_path = full_path.with_extension(format.extension());
            if variant_path.is_file() {
                debug!(
                    "Serving {} as {} for user agent {:?}",
                    relative_path,
                    format.extension(),
                    user_agent
                );
                return self.serve_file(&variant_path, format.mime_type()).await;
            }
        }

        // No supported variant on disk, serve the original as-is
        let mime_type = mime_guess::from_path(&full_path)
            .first_or_octet_stream()
            .to_string();
        debug!("Serving {} unchanged", relative_path);
        self.serve_file(&full_path, &mime_type).await
    }

    /// Resolve a request path against the images directory, rejecting
    /// traversal outside of it.
    fn resolve(&self, relative_path: &str) -> Result<PathBuf, ServeError> {
        if relative_path
            .split(['/', '\\'])
            .any(|component| component == "..")
        {
            return Err(ServeError::InvalidPath);
        }

        let full_path = self.config.directory.join(relative_path);
        if !full_path.starts_with(&self.config.directory) {
            return Err(ServeError::InvalidPath);
        }
        if !full_path.is_file() {
            return Err(ServeError::NotFound);
        }

        Ok(full_path)
    }

    async fn serve_file(&self, path: &Path, content_type: &str) -> Response {
        match File::open(path).await {
            Ok(file) => {
                let metadata = match file.metadata().await {
                    Ok(m) => m,
                    Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR).into_response(),
                };

                let stream = ReaderStream::new(file);
                let body = Body::from_stream(stream);

                let mut headers = HeaderMap::new();
                match content_type.parse() {
                    Ok(value) => {
                        headers.insert(header::CONTENT_TYPE, value);
                    }
                    Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR).into_response(),
                }
                if let Ok(value) = metadata.len().to_string().parse() {
                    headers.insert(header::CONTENT_LENGTH, value);
                }

                let cache_control = format!("public, max-age={}", self.config.cache_max_age_seconds);
                if let Ok(value) = cache_control.parse() {
                    headers.insert(header::CACHE_CONTROL, value);
                }

                // The chosen representation depends on the client's browser
                if let Ok(value) = "User-Agent".parse() {
                    headers.insert(header::VARY, value);
                }

                (StatusCode::OK, headers, body).into_response()
            }
            Err(e) => {
                error!("Failed to open file: {:?}, error: {}", path, e);
                (StatusCode::NOT_FOUND).into_response()
            }
        }
    }
}

/// Extract the User-Agent header as a string, if present and valid UTF-8.
pub fn user_agent_from_headers(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
}
