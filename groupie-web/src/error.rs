//! Error types for groupie-web
//!
//! Every request failure ends up here and is turned into a status code plus a
//! rendered error page by [`crate::presenter::Presenter::fail`].

use axum::http::StatusCode;
use groupie_common::FetchError;
use thiserror::Error;

use crate::views::RenderError;

/// Per-request failure
#[derive(Debug, Error)]
pub enum PageError {
    /// Bad or missing request input (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Unknown route or missing static file (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Wrong HTTP method (405)
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Remote fetch or decode failure while building a page (500)
    #[error("Upstream error: {0}")]
    Upstream(#[from] FetchError),

    /// Template lookup (404) or execution (500) failure
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Local file read failure other than not-found (500)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PageError {
    pub fn status(&self) -> StatusCode {
        match self {
            PageError::BadRequest(_) => StatusCode::BAD_REQUEST,
            PageError::NotFound(_) => StatusCode::NOT_FOUND,
            PageError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            PageError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PageError::Render(err) => err.status(),
            PageError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Fixed human-readable phrase for an error status
pub fn status_phrase(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad Request",
        StatusCode::FORBIDDEN => "Forbidden",
        StatusCode::NOT_FOUND => "Not Found",
        StatusCode::METHOD_NOT_ALLOWED => "Method Not Allowed",
        _ => "Internal Server Error",
    }
}
