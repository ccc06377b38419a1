//! Shared test helpers: a fake artist API and a router wired to it

#![allow(dead_code)]

use axum::{
    body::Body,
    extract::{Path, State},
    http::{Request, Response},
    routing::get,
    Json, Router,
};
use groupie_common::{ApiClient, Artist};
use groupie_web::catalog::Catalog;
use groupie_web::{build_router, AppState};
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Fake upstream API bound on an ephemeral port
pub struct Upstream {
    pub base: String,
    pub hits: Arc<AtomicUsize>,
}

impl Upstream {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn locations(State(hits): State<Arc<AtomicUsize>>, Path(id): Path<u32>) -> Json<serde_json::Value> {
    hits.fetch_add(1, Ordering::SeqCst);
    Json(json!({"id": id, "locations": ["london-uk", "osaka-japan"], "dates": "unused"}))
}

async fn dates(State(hits): State<Arc<AtomicUsize>>, Path(id): Path<u32>) -> Json<serde_json::Value> {
    hits.fetch_add(1, Ordering::SeqCst);
    Json(json!({"id": id, "dates": ["*01-02-2020", "03-04-2021"]}))
}

async fn relation(State(hits): State<Arc<AtomicUsize>>, Path(id): Path<u32>) -> Json<serde_json::Value> {
    hits.fetch_add(1, Ordering::SeqCst);
    Json(json!({
        "id": id,
        "datesLocations": {
            "osaka-japan": ["03-04-2021"],
            "london-uk": ["01-02-2020"]
        }
    }))
}

async fn artists() -> Json<Vec<Artist>> {
    Json(vec![
        artist(1, "Test Artist", "http://upstream.invalid"),
        artist(2, "Another Artist", "http://upstream.invalid"),
    ])
}

async fn broken(State(hits): State<Arc<AtomicUsize>>) -> &'static str {
    hits.fetch_add(1, Ordering::SeqCst);
    "<html>upstream exploded</html>"
}

pub async fn spawn_upstream() -> Upstream {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/api/artists", get(artists))
        .route("/api/locations/:id", get(locations))
        .route("/api/dates/:id", get(dates))
        .route("/api/relation/:id", get(relation))
        .route("/broken", get(broken))
        .with_state(hits.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Should bind ephemeral port");
    let addr = listener.local_addr().expect("Should have local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Upstream server failed");
    });

    Upstream {
        base: format!("http://{}", addr),
        hits,
    }
}

pub fn artist(id: u32, name: &str, base: &str) -> Artist {
    Artist {
        id,
        image: format!("{}/images/{}.jpeg", base, id),
        name: name.to_string(),
        members: vec![format!("{} Singer", name), format!("{} Drummer", name)],
        creation_year: 1990 + id as i32,
        first_album: "05-06-1995".to_string(),
        locations_url: format!("{}/api/locations/{}", base, id),
        concert_dates_url: format!("{}/api/dates/{}", base, id),
        relations_url: format!("{}/api/relation/{}", base, id),
    }
}

/// Catalog of five artists; 3, 4 and 5 each have one broken dependent URL
pub fn test_catalog(base: &str) -> Catalog {
    let broken = format!("{}/broken", base);

    let mut bad_locations = artist(3, "Broken Locations", base);
    bad_locations.locations_url = broken.clone();
    let mut bad_dates = artist(4, "Broken Dates", base);
    bad_dates.concert_dates_url = broken.clone();
    let mut bad_relations = artist(5, "Broken Relations", base);
    bad_relations.relations_url = broken;

    Catalog::from_artists(vec![
        artist(1, "Test Artist", base),
        artist(2, "Another Artist", base),
        bad_locations,
        bad_dates,
        bad_relations,
    ])
}

/// Client that never routes loopback traffic through a proxy
pub fn test_client() -> ApiClient {
    ApiClient::from_client(
        reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("Should build client"),
    )
}

pub fn test_state(base: &str, static_root: PathBuf) -> AppState {
    AppState::new(test_catalog(base), test_client(), static_root)
}

/// Router over [`test_catalog`] with the crate's own static directory
pub async fn setup_app() -> (Router, Upstream) {
    let upstream = spawn_upstream().await;
    let state = test_state(&upstream.base, groupie_web::settings::default_static_dir());
    (build_router(state), upstream)
}

pub fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body")
        .to_vec()
}

pub async fn body_string(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).expect("Body should be UTF-8")
}
