//! Turns view models and errors into HTTP responses

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{error, warn};

use crate::error::{status_phrase, PageError};
use crate::views::{ErrorView, TemplateName, TemplateRegistry, ViewModel};

/// Page and error-page renderer shared by all handlers
#[derive(Debug, Clone)]
pub struct Presenter {
    templates: Arc<TemplateRegistry>,
}

impl Presenter {
    pub fn new(templates: TemplateRegistry) -> Self {
        Self {
            templates: Arc::new(templates),
        }
    }

    /// Render `name` with `model` as a 200 page, or the matching error page
    pub fn page(&self, name: TemplateName, model: &ViewModel<'_>) -> Response {
        match self.templates.render(name, model) {
            Ok(html) => Html(html).into_response(),
            Err(err) => self.fail(&PageError::Render(err)),
        }
    }

    /// Log a request failure and render its error page
    pub fn fail(&self, err: &PageError) -> Response {
        let status = err.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), "{}", err);
        } else {
            warn!(status = status.as_u16(), "{}", err);
        }
        self.error(status)
    }

    /// Error page for `status`
    ///
    /// Falls back to a plain-text "<code> - <phrase>" body if the error
    /// template is unavailable, so some error is always observable.
    pub fn error(&self, status: StatusCode) -> Response {
        let message = status_phrase(status);
        let model = ViewModel::Error(ErrorView {
            status: status.as_u16(),
            message,
        });

        match self.templates.render(TemplateName::Errors, &model) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                error!("Error template failed: {}", err);
                (
                    status,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    format!("{} - {}", status.as_u16(), message),
                )
                    .into_response()
            }
        }
    }
}
