//! # Groupie Common Library
//!
//! Shared code for the Groupie Tracker services:
//! - Artist API record shapes
//! - Remote data client for the artist API
//! - Bootstrap configuration (TOML)
//! - Error types

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::{Error, FetchError, Result};
pub use models::{Artist, DateSet, LocationSet, RelationMap};
