//! Responses for requests no page handler accepts

use axum::{
    extract::State,
    http::{Method, Uri},
    response::Response,
};

use crate::error::PageError;
use crate::AppState;

/// Known path, method other than GET
pub async fn method_not_allowed(State(state): State<AppState>, method: Method) -> Response {
    state
        .presenter
        .fail(&PageError::MethodNotAllowed(method.to_string()))
}

/// Unknown path
///
/// The method is checked first: a non-GET request is 405 whatever the path.
pub async fn not_found_or_wrong_method(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Response {
    if method != Method::GET {
        return state
            .presenter
            .fail(&PageError::MethodNotAllowed(method.to_string()));
    }
    state.presenter.fail(&PageError::NotFound(uri.path().to_string()))
}
