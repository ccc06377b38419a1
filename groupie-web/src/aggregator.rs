//! Artist detail aggregation
//!
//! Resolves one catalog artist and fetches its three dependent resources
//! concurrently. All three must succeed: the first failure is returned and
//! no partial view is ever built.

use groupie_common::{ApiClient, Artist, DateSet, FetchError, LocationSet, RelationMap};
use tracing::debug;

/// Composite model for one artist detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistDetailView {
    pub artist: Artist,
    pub locations: LocationSet,
    pub dates: DateSet,
    pub relations: RelationMap,
}

/// Fetch locations, dates and relations for `artist`
///
/// Runs the three GETs as a join; the first error wins and the remaining
/// in-flight fetches are dropped.
pub async fn aggregate(client: &ApiClient, artist: &Artist) -> Result<ArtistDetailView, FetchError> {
    debug!(id = artist.id, name = %artist.name, "Aggregating artist detail");

    let (locations, dates, relations) = tokio::try_join!(
        client.fetch_locations(&artist.locations_url),
        client.fetch_dates(&artist.concert_dates_url),
        client.fetch_relations(&artist.relations_url),
    )?;

    Ok(ArtistDetailView {
        artist: artist.clone(),
        locations,
        dates,
        relations,
    })
}
