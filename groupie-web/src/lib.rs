//! groupie-web library - Groupie Tracker web front-end
//!
//! Read-only HTML front-end over the artist API: artist list, per-artist
//! detail pages and name search.

use axum::{
    handler::Handler,
    routing::{get, MethodRouter},
    Router,
};
use groupie_common::ApiClient;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod aggregator;
pub mod api;
pub mod catalog;
pub mod error;
pub mod presenter;
pub mod search;
pub mod settings;
pub mod validate;
pub mod views;

use catalog::Catalog;
use presenter::Presenter;
use settings::Settings;
use views::TemplateRegistry;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Artist list, loaded once before serving
    pub catalog: Arc<Catalog>,
    /// Client for the dependent per-artist resources
    pub client: ApiClient,
    /// Page and error-page rendering
    pub presenter: Presenter,
    /// Root directory for /static/
    pub static_root: Arc<PathBuf>,
}

impl AppState {
    /// Create new application state with the built-in templates
    pub fn new(catalog: Catalog, client: ApiClient, static_root: PathBuf) -> Self {
        Self {
            catalog: Arc::new(catalog),
            client,
            presenter: Presenter::new(TemplateRegistry::builtin()),
            static_root: Arc::new(static_root),
        }
    }

    /// Replace the template registry
    pub fn with_templates(mut self, templates: TemplateRegistry) -> Self {
        self.presenter = Presenter::new(templates);
        self
    }
}

/// GET route that answers every other method (HEAD included) with 405
fn get_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    get(handler)
        .head(api::method_not_allowed)
        .fallback(api::method_not_allowed)
}

/// Build application router
///
/// Paths match exactly: `/artists` and `/artists/x` are 404, not the
/// detail page.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get_only(api::index_page))
        .route("/artists/", get_only(api::artist_page))
        .route("/search/", get_only(api::search_page))
        .route("/static/*path", get_only(api::serve_static))
        .route("/health", get_only(api::health_check))
        .fallback(api::not_found_or_wrong_method)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Load the catalog, then bind the listener
///
/// The catalog must be in place before any request is accepted: if it cannot
/// be fetched or decoded the error is returned and nothing is bound.
pub async fn prepare(
    settings: &Settings,
    client: ApiClient,
) -> groupie_common::Result<(TcpListener, Router)> {
    let catalog = Catalog::load(&client, &settings.api_url).await?;
    info!("✓ Loaded {} artists", catalog.len());

    let state = AppState::new(catalog, client, settings.static_dir.clone());
    let listener = TcpListener::bind(settings.listen_addr()).await?;
    info!("groupie-web listening on http://{}", listener.local_addr()?);

    Ok((listener, build_router(state)))
}
