//! HTTP handlers for groupie-web

pub mod fallback;
pub mod health;
pub mod pages;
pub mod static_files;

pub use fallback::{method_not_allowed, not_found_or_wrong_method};
pub use health::health_check;
pub use pages::{artist_page, index_page, search_page};
pub use static_files::serve_static;
