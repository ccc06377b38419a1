//! Page handlers: artist list, artist detail, search

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Response,
};
use tracing::debug;

use crate::aggregator::aggregate;
use crate::error::PageError;
use crate::search::{search, SearchResult};
use crate::validate;
use crate::views::{TemplateName, ViewModel};
use crate::AppState;

/// Decoded query string, in request order
///
/// Repeated keys are kept; handlers read the first occurrence.
pub type QueryPairs = Vec<(String, String)>;

/// First value given for `key`, if any
pub fn first_value(pairs: QueryPairs, key: &str) -> Option<String> {
    pairs.into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

/// GET /
///
/// Lists every artist in the catalog
pub async fn index_page(State(state): State<AppState>) -> Response {
    let model = ViewModel::Index {
        artists: state.catalog.entries().collect(),
    };
    state.presenter.page(TemplateName::Index, &model)
}

/// GET /artists/?id=N
///
/// Detail page for the artist at 1-based position N
pub async fn artist_page(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Response {
    match artist_view(&state, query).await {
        Ok(response) => response,
        Err(err) => state.presenter.fail(&err),
    }
}

async fn artist_view(
    state: &AppState,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Response, PageError> {
    let Query(pairs) = query.map_err(|e| PageError::BadRequest(e.body_text()))?;
    let id = first_value(pairs, "id");
    let ordinal = validate::artist_id(id.as_deref(), state.catalog.len())?;

    let artist = state
        .catalog
        .get(ordinal)
        .ok_or_else(|| PageError::BadRequest(format!("artist id {} not in catalog", ordinal)))?;

    let view = aggregate(&state.client, artist).await?;
    debug!(ordinal, name = %view.artist.name, "Rendering artist detail");

    Ok(state
        .presenter
        .page(TemplateName::Details, &ViewModel::Details(view)))
}

/// GET /search/?q=text
///
/// Case-insensitive name search; no matches is still a 200 page
pub async fn search_page(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Response {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(e) => return state.presenter.fail(&PageError::BadRequest(e.body_text())),
    };
    let q = match validate::search_query(first_value(pairs, "q")) {
        Ok(q) => q,
        Err(err) => return state.presenter.fail(&err),
    };

    let matches = search(&q, &state.catalog);
    debug!(query = %q, matches = matches.len(), "Search");

    let model = ViewModel::Search(SearchResult::new(q, matches));
    state.presenter.page(TemplateName::Search, &model)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_value_wins() {
        let query = pairs(&[("id", "1"), ("id", "2")]);
        assert_eq!(first_value(query, "id").as_deref(), Some("1"));
    }

    #[test]
    fn test_first_value_skips_other_keys() {
        let query = pairs(&[("page", "3"), ("q", "queen")]);
        assert_eq!(first_value(query, "q").as_deref(), Some("queen"));
    }

    #[test]
    fn test_first_value_missing() {
        assert_eq!(first_value(pairs(&[("x", "1")]), "id"), None);
        assert_eq!(first_value(Vec::new(), "id"), None);
    }

    #[test]
    fn test_empty_first_value_is_kept() {
        // "q=&q=x" must still be a missing query, as the first value is empty
        let query = pairs(&[("q", ""), ("q", "x")]);
        assert_eq!(first_value(query, "q").as_deref(), Some(""));
    }
}
