//! In-memory artist catalog
//!
//! Loaded once before the listener is bound and never mutated afterwards, so
//! handlers read it through a shared `Arc` without locking.
//!
//! Artists are addressed by their 1-based position in the list ("ordinal").
//! The remote API numbers its artists the same way; [`Catalog::from_artists`]
//! logs any record where the two disagree.

use groupie_common::{ApiClient, Artist, Result};
use tracing::{info, warn};

/// Immutable snapshot of the artist list
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    artists: Vec<Artist>,
}

/// An artist together with its 1-based catalog position
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    pub ordinal: usize,
    pub artist: &'a Artist,
}

impl Catalog {
    /// Fetch the artist list from `url`
    pub async fn load(client: &ApiClient, url: &str) -> Result<Self> {
        let artists = client.fetch_artists(url).await?;
        info!(url = %url, artists = artists.len(), "Catalog loaded");
        Ok(Self::from_artists(artists))
    }

    pub fn from_artists(artists: Vec<Artist>) -> Self {
        for (index, artist) in artists.iter().enumerate() {
            if artist.id as usize != index + 1 {
                warn!(
                    position = index + 1,
                    id = artist.id,
                    name = %artist.name,
                    "Artist id does not match its catalog position; detail links use the position"
                );
            }
        }
        Self { artists }
    }

    pub fn all(&self) -> &[Artist] {
        &self.artists
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Artist at 1-based `ordinal`
    pub fn get(&self, ordinal: usize) -> Option<&Artist> {
        ordinal.checked_sub(1).and_then(|index| self.artists.get(index))
    }

    /// All artists in catalog order with their ordinals
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.artists.iter().enumerate().map(|(index, artist)| Entry {
            ordinal: index + 1,
            artist,
        })
    }
}
