//! # Artist Repository
//!
//! Deleting an artist leaves its concerts in place; their `artist_id`
//! then dangles and joined views show no artist.

use tracing::debug;

use tiket_core::{Artist, ArtistPatch, Id, NewArtist, DEFAULT_FEATURED_ARTISTS};

use crate::store::SharedState;

/// Repository for artist operations.
#[derive(Debug, Clone)]
pub struct ArtistRepository {
    state: SharedState,
}

impl ArtistRepository {
    /// Creates a new ArtistRepository.
    pub(crate) fn new(state: SharedState) -> Self {
        ArtistRepository { state }
    }

    /// Gets an artist by ID.
    pub async fn get_by_id(&self, id: Id) -> Option<Artist> {
        self.state.read().await.artists.get(id)
    }

    /// Lists all artists in creation order.
    pub async fn list(&self) -> Vec<Artist> {
        self.state.read().await.artists.all()
    }

    /// Artists for the home page's featured row.
    ///
    /// There is no popularity signal: this is the first `limit` artists in
    /// creation order (4 when `None`).
    pub async fn featured(&self, limit: Option<usize>) -> Vec<Artist> {
        let limit = limit.unwrap_or(DEFAULT_FEATURED_ARTISTS);
        self.state.read().await.artists.first(limit)
    }

    /// Creates an artist.
    pub async fn insert(&self, new: NewArtist) -> Artist {
        let mut state = self.state.write().await;
        let artist = state.artists.insert_with(|id| new.into_record(id));
        debug!(id = artist.id, name = %artist.name, "Inserted artist");
        artist
    }

    /// Merges `patch` over an existing artist. `None` if the ID is unknown.
    pub async fn update(&self, id: Id, patch: ArtistPatch) -> Option<Artist> {
        debug!(id, "Updating artist");
        self.state.write().await.artists.update(id, patch)
    }

    /// Deletes an artist. Returns whether a record was removed.
    pub async fn delete(&self, id: Id) -> bool {
        let removed = self.state.write().await.artists.remove(id);
        debug!(id, removed, "Deleted artist");
        removed
    }
}
