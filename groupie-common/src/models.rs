//! Record shapes returned by the artist API
//!
//! Field names on the wire are camelCase; the Rust side uses descriptive names
//! and maps them with `serde(rename)`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One artist (band or solo act) from the artist list endpoint
///
/// `id` is a 1-based ordinal assigned by the remote source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: u32,
    pub image: String,
    pub name: String,
    pub members: Vec<String>,
    #[serde(rename = "creationDate")]
    pub creation_year: i32,
    #[serde(rename = "firstAlbum")]
    pub first_album: String,
    /// URL of this artist's [`LocationSet`]
    #[serde(rename = "locations")]
    pub locations_url: String,
    /// URL of this artist's [`DateSet`]
    #[serde(rename = "concertDates")]
    pub concert_dates_url: String,
    /// URL of this artist's [`RelationMap`]
    #[serde(rename = "relations")]
    pub relations_url: String,
}

/// Venues associated with one artist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSet {
    pub locations: Vec<String>,
}

/// Concert dates for one artist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSet {
    pub dates: Vec<String>,
}

/// Location name -> dates played there
///
/// Kept ordered by location so that rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationMap {
    #[serde(rename = "datesLocations")]
    pub by_location: BTreeMap<String, Vec<String>>,
}
