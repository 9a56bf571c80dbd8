//! # Venue Repository

use tracing::debug;

use tiket_core::{Id, NewVenue, Venue, VenuePatch, DEFAULT_TOP_VENUES};

use crate::store::SharedState;

/// Repository for venue operations.
#[derive(Debug, Clone)]
pub struct VenueRepository {
    state: SharedState,
}

impl VenueRepository {
    /// Creates a new VenueRepository.
    pub(crate) fn new(state: SharedState) -> Self {
        VenueRepository { state }
    }

    /// Gets a venue by ID.
    pub async fn get_by_id(&self, id: Id) -> Option<Venue> {
        self.state.read().await.venues.get(id)
    }

    /// Lists all venues in creation order.
    pub async fn list(&self) -> Vec<Venue> {
        self.state.read().await.venues.all()
    }

    /// Venues for the home page, the first `limit` in creation order
    /// (3 when `None`). Not ranked by capacity or ticket sales.
    pub async fn top(&self, limit: Option<usize>) -> Vec<Venue> {
        let limit = limit.unwrap_or(DEFAULT_TOP_VENUES);
        self.state.read().await.venues.first(limit)
    }

    /// Creates a venue.
    pub async fn insert(&self, new: NewVenue) -> Venue {
        let mut state = self.state.write().await;
        let venue = state.venues.insert_with(|id| new.into_record(id));
        debug!(id = venue.id, name = %venue.name, "Inserted venue");
        venue
    }

    /// Merges `patch` over an existing venue. `None` if the ID is unknown.
    pub async fn update(&self, id: Id, patch: VenuePatch) -> Option<Venue> {
        debug!(id, "Updating venue");
        self.state.write().await.venues.update(id, patch)
    }

    /// Deletes a venue. Concerts held there are not touched.
    pub async fn delete(&self, id: Id) -> bool {
        let removed = self.state.write().await.venues.remove(id);
        debug!(id, removed, "Deleted venue");
        removed
    }
}

#[cfg(test)]
mod tests {
    use crate::{Storage, StoreConfig};
    use tiket_core::{NewVenue, VenuePatch};

    fn new_venue(name: &str, capacity: u32) -> NewVenue {
        NewVenue {
            name: name.to_string(),
            address: "Somewhere".to_string(),
            location: "Manila".to_string(),
            capacity,
            image_url: Some(String::new()),
        }
    }

    #[tokio::test]
    async fn test_top_is_insertion_prefix_not_capacity() {
        let storage = Storage::new(StoreConfig::empty());
        let venues = storage.venues();
        venues.insert(new_venue("Small", 100)).await;
        venues.insert(new_venue("Huge", 50000)).await;
        venues.insert(new_venue("Medium", 5000)).await;
        venues.insert(new_venue("Large", 20000)).await;

        let top: Vec<String> = venues.top(None).await.into_iter().map(|v| v.name).collect();
        assert_eq!(top, vec!["Small", "Huge", "Medium"]);
        assert_eq!(venues.list().await.len(), 4);
    }

    #[tokio::test]
    async fn test_crud() {
        let storage = Storage::new(StoreConfig::empty());
        let venues = storage.venues();

        let venue = venues.insert(new_venue("Music Museum", 800)).await;
        assert_eq!(venue.image_url, None);

        let updated = venues
            .update(
                venue.id,
                VenuePatch {
                    capacity: Some(900),
                    image_url: Some(Some("https://img/mm.jpg".to_string())),
                    ..VenuePatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.capacity, 900);
        assert_eq!(updated.name, "Music Museum");
        assert_eq!(updated.image_url.as_deref(), Some("https://img/mm.jpg"));

        assert!(venues.delete(venue.id).await);
        assert!(!venues.delete(venue.id).await);
        assert_eq!(venues.get_by_id(venue.id).await, None);
    }
}
