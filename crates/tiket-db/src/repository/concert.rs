//! # Concert Repository
//!
//! CRUD for concerts plus the joined views the web pages render.
//!
//! ## Listings
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Featured vs. Upcoming                                │
//! │                                                                         │
//! │  featured(limit = 3)                                                   │
//! │    filter is_featured ──► first N by creation order ──► enrich         │
//! │                                                                         │
//! │  upcoming(limit = 6)                                                   │
//! │    filter status == "upcoming" ──► sort by date ASC ──► first N        │
//! │    ──► enrich                     (Some(0) means "no limit")           │
//! │                                                                         │
//! │  enrich: + venue (if it still exists)                                  │
//! │          + artist (if it still exists)                                 │
//! │          + minPrice / maxPrice over the concert's ticket types         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Deleting a concert does not delete its ticket types.

use tracing::debug;

use tiket_core::{
    Concert, ConcertDetails, ConcertListing, ConcertPatch, Id, NewConcert, PriceRange,
    DEFAULT_FEATURED_CONCERTS, DEFAULT_UPCOMING_CONCERTS,
};

use crate::store::{SharedState, StoreState};

/// Repository for concert operations.
#[derive(Debug, Clone)]
pub struct ConcertRepository {
    state: SharedState,
}

impl ConcertRepository {
    /// Creates a new ConcertRepository.
    pub(crate) fn new(state: SharedState) -> Self {
        ConcertRepository { state }
    }

    /// Gets a concert by ID.
    pub async fn get_by_id(&self, id: Id) -> Option<Concert> {
        self.state.read().await.concerts.get(id)
    }

    /// Gets a concert joined with its venue, artist and ticket types.
    ///
    /// ## Returns
    /// * `Some(ConcertDetails)` - Concert found; `venue` / `artist` are
    ///   `None` if the referenced record was deleted
    /// * `None` - No concert with this ID
    pub async fn get_with_details(&self, id: Id) -> Option<ConcertDetails> {
        let state = self.state.read().await;
        let concert = state.concerts.get(id)?;

        let details = ConcertDetails {
            venue: state.venues.get(concert.venue_id),
            artist: state.artists.get(concert.artist_id),
            ticket_types: state.ticket_types.filter(|t| t.concert_id == id),
            concert,
        };

        debug!(
            id,
            ticket_types = details.ticket_types.len(),
            venue_found = details.venue.is_some(),
            artist_found = details.artist.is_some(),
            "Loaded concert details"
        );
        Some(details)
    }

    /// Lists all concerts in creation order.
    pub async fn list(&self) -> Vec<Concert> {
        self.state.read().await.concerts.all()
    }

    /// Featured concerts for the home page carousel.
    ///
    /// The first `limit` concerts flagged featured, in creation order
    /// (3 when `None`). No recency sort is applied.
    pub async fn featured(&self, limit: Option<usize>) -> Vec<ConcertListing> {
        let limit = limit.unwrap_or(DEFAULT_FEATURED_CONCERTS);
        let state = self.state.read().await;

        let listings: Vec<ConcertListing> = state
            .concerts
            .filter(|c| c.is_featured)
            .into_iter()
            .take(limit)
            .map(|c| listing(&state, c))
            .collect();

        debug!(limit, count = listings.len(), "Featured concerts");
        listings
    }

    /// Upcoming concerts, soonest first.
    ///
    /// ## Arguments
    /// * `limit` - Maximum results; `None` means 6, `Some(0)` means all
    ///
    /// Concerts on the same date keep their creation order.
    pub async fn upcoming(&self, limit: Option<usize>) -> Vec<ConcertListing> {
        let limit = limit.unwrap_or(DEFAULT_UPCOMING_CONCERTS);
        let state = self.state.read().await;

        let mut concerts = state.concerts.filter(Concert::is_upcoming);
        concerts.sort_by_key(|c| c.date);
        if limit > 0 {
            concerts.truncate(limit);
        }

        let listings: Vec<ConcertListing> =
            concerts.into_iter().map(|c| listing(&state, c)).collect();

        debug!(limit, count = listings.len(), "Upcoming concerts");
        listings
    }

    /// Concerts by one artist, in creation order.
    pub async fn by_artist(&self, artist_id: Id) -> Vec<Concert> {
        self.state
            .read()
            .await
            .concerts
            .filter(|c| c.artist_id == artist_id)
    }

    /// Concerts at one venue, in creation order.
    pub async fn by_venue(&self, venue_id: Id) -> Vec<Concert> {
        self.state
            .read()
            .await
            .concerts
            .filter(|c| c.venue_id == venue_id)
    }

    /// Creates a concert.
    ///
    /// The venue and artist IDs are stored as given, without checking they
    /// exist.
    pub async fn insert(&self, new: NewConcert) -> Concert {
        let mut state = self.state.write().await;
        let concert = state.concerts.insert_with(|id| new.into_record(id));
        debug!(id = concert.id, title = %concert.title, "Inserted concert");
        concert
    }

    /// Merges `patch` over an existing concert. `None` if the ID is unknown.
    pub async fn update(&self, id: Id, patch: ConcertPatch) -> Option<Concert> {
        debug!(id, "Updating concert");
        self.state.write().await.concerts.update(id, patch)
    }

    /// Deletes a concert. Its ticket types stay in the store.
    pub async fn delete(&self, id: Id) -> bool {
        let removed = self.state.write().await.concerts.remove(id);
        debug!(id, removed, "Deleted concert");
        removed
    }
}

/// Attaches venue, artist and price range to a concert.
fn listing(state: &StoreState, concert: Concert) -> ConcertListing {
    let tiers = state.ticket_types.filter(|t| t.concert_id == concert.id);

    ConcertListing {
        venue: state.venues.get(concert.venue_id),
        artist: state.artists.get(concert.artist_id),
        price_range: PriceRange::from_ticket_types(&tiers),
        concert,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use crate::{Storage, StoreConfig};
    use tiket_core::{
        ConcertPatch, NewArtist, NewConcert, NewTicketType, NewVenue, VenuePatch,
    };

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap()
    }

    fn new_concert(title: &str, days: i64) -> NewConcert {
        NewConcert {
            title: title.to_string(),
            date: anchor() + Duration::days(days),
            description: format!("{title} live"),
            venue_id: 1,
            artist_id: 1,
            status: None,
            is_featured: None,
            image_url: None,
        }
    }

    fn tier(concert_id: u32, name: &str, price: i64) -> NewTicketType {
        NewTicketType {
            concert_id,
            name: name.to_string(),
            price,
            quantity: 100,
            description: String::new(),
        }
    }

    async fn store_with_venue_and_artist() -> Storage {
        let storage = Storage::new(StoreConfig::empty());
        storage
            .venues()
            .insert(NewVenue {
                name: "Araneta Coliseum".to_string(),
                address: "Cubao".to_string(),
                location: "Quezon City".to_string(),
                capacity: 15000,
                image_url: None,
            })
            .await;
        storage
            .artists()
            .insert(NewArtist {
                name: "Sarah Geronimo".to_string(),
                genre: "Pop".to_string(),
                bio: None,
                image_url: None,
            })
            .await;
        storage
    }

    #[tokio::test]
    async fn test_featured_price_range_scenario() {
        let storage = store_with_venue_and_artist().await;
        let concerts = storage.concerts();

        let concert = concerts.insert(new_concert("Pop Explosion", 30)).await;
        assert!(!concert.is_featured);
        assert!(concerts.featured(None).await.is_empty());

        for (name, price) in [("VIP", 5000), ("Gold", 3500), ("Silver", 2000), ("GA", 1000)] {
            storage.ticket_types().insert(tier(concert.id, name, price)).await;
        }

        concerts
            .update(
                concert.id,
                ConcertPatch {
                    is_featured: Some(true),
                    ..ConcertPatch::default()
                },
            )
            .await
            .unwrap();

        let featured = concerts.featured(None).await;
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].concert.id, concert.id);
        assert_eq!(featured[0].min_price(), 1000);
        assert_eq!(featured[0].max_price(), 5000);
        assert_eq!(featured[0].venue.as_ref().map(|v| v.id), Some(1));
        assert_eq!(featured[0].artist.as_ref().map(|a| a.id), Some(1));
    }

    #[tokio::test]
    async fn test_featured_without_tiers_is_zero_priced() {
        let storage = store_with_venue_and_artist().await;
        storage
            .concerts()
            .insert(NewConcert {
                is_featured: Some(true),
                ..new_concert("Acoustic Night", 10)
            })
            .await;

        let featured = storage.concerts().featured(None).await;
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].min_price(), 0);
        assert_eq!(featured[0].max_price(), 0);
    }

    #[tokio::test]
    async fn test_featured_keeps_creation_order_and_limit() {
        let storage = store_with_venue_and_artist().await;
        let concerts = storage.concerts();
        for (title, days, featured) in [
            ("Late", 90, true),
            ("Hidden", 5, false),
            ("Early", 1, true),
            ("Middle", 45, true),
            ("Extra", 60, true),
        ] {
            concerts
                .insert(NewConcert {
                    is_featured: Some(featured),
                    ..new_concert(title, days)
                })
                .await;
        }

        let titles: Vec<String> = concerts
            .featured(None)
            .await
            .into_iter()
            .map(|l| l.concert.title)
            .collect();
        assert_eq!(titles, vec!["Late", "Early", "Middle"]);

        assert!(concerts.featured(Some(0)).await.is_empty());
        assert_eq!(concerts.featured(Some(10)).await.len(), 4);
        assert!(concerts.featured(Some(10)).await.iter().all(|l| l.concert.is_featured));
    }

    #[tokio::test]
    async fn test_upcoming_sorted_by_date_and_filtered() {
        let storage = store_with_venue_and_artist().await;
        let concerts = storage.concerts();
        concerts.insert(new_concert("Third", 30)).await;
        concerts.insert(new_concert("First", 1)).await;
        concerts
            .insert(NewConcert {
                status: Some("completed".to_string()),
                ..new_concert("Past", -10)
            })
            .await;
        concerts.insert(new_concert("Second", 15)).await;

        let upcoming = concerts.upcoming(None).await;
        let titles: Vec<&str> = upcoming.iter().map(|l| l.concert.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);

        assert!(upcoming.windows(2).all(|w| w[0].concert.date <= w[1].concert.date));
        assert!(upcoming.iter().all(|l| l.concert.status == "upcoming"));
    }

    #[tokio::test]
    async fn test_upcoming_limits() {
        let storage = store_with_venue_and_artist().await;
        let concerts = storage.concerts();
        for day in 0..8 {
            concerts.insert(new_concert(&format!("Show {day}"), 20 - day)).await;
        }

        assert_eq!(concerts.upcoming(None).await.len(), 6);
        assert_eq!(concerts.upcoming(Some(2)).await.len(), 2);
        assert_eq!(concerts.upcoming(Some(0)).await.len(), 8);

        let soonest = &concerts.upcoming(Some(1)).await[0];
        assert_eq!(soonest.concert.title, "Show 7");
    }

    #[tokio::test]
    async fn test_upcoming_ties_keep_creation_order() {
        let storage = store_with_venue_and_artist().await;
        let concerts = storage.concerts();
        concerts.insert(new_concert("Night A", 7)).await;
        concerts.insert(new_concert("Night B", 7)).await;
        concerts.insert(new_concert("Night C", 7)).await;

        let titles: Vec<String> = concerts
            .upcoming(Some(0))
            .await
            .into_iter()
            .map(|l| l.concert.title)
            .collect();
        assert_eq!(titles, vec!["Night A", "Night B", "Night C"]);
    }

    #[tokio::test]
    async fn test_details_with_deleted_venue() {
        let storage = store_with_venue_and_artist().await;
        let concert = storage.concerts().insert(new_concert("Pop Explosion", 30)).await;
        storage.ticket_types().insert(tier(concert.id, "VIP", 5000)).await;
        storage.ticket_types().insert(tier(concert.id, "GA", 1000)).await;

        assert!(storage.venues().delete(concert.venue_id).await);

        let details = storage.concerts().get_with_details(concert.id).await.unwrap();
        assert_eq!(details.concert, concert);
        assert_eq!(details.venue, None);
        assert_eq!(details.artist.map(|a| a.name).as_deref(), Some("Sarah Geronimo"));
        assert_eq!(details.ticket_types.len(), 2);

        let json = serde_json::to_value(
            storage.concerts().get_with_details(concert.id).await.unwrap(),
        )
        .unwrap();
        assert_eq!(json["title"], "Pop Explosion");
        assert!(json["venue"].is_null());
        assert_eq!(json["ticketTypes"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_details_missing_concert() {
        let storage = store_with_venue_and_artist().await;
        assert!(storage.concerts().get_with_details(42).await.is_none());
    }

    #[tokio::test]
    async fn test_listing_reflects_venue_updates() {
        let storage = store_with_venue_and_artist().await;
        storage.concerts().insert(new_concert("Pop Explosion", 30)).await;
        storage
            .venues()
            .update(
                1,
                VenuePatch {
                    name: Some("Smart Araneta Coliseum".to_string()),
                    ..VenuePatch::default()
                },
            )
            .await;

        let upcoming = storage.concerts().upcoming(None).await;
        assert_eq!(
            upcoming[0].venue.as_ref().map(|v| v.name.as_str()),
            Some("Smart Araneta Coliseum")
        );
    }

    #[tokio::test]
    async fn test_by_artist_and_venue() {
        let storage = store_with_venue_and_artist().await;
        let concerts = storage.concerts();
        concerts.insert(new_concert("One", 1)).await;
        concerts
            .insert(NewConcert {
                artist_id: 2,
                venue_id: 2,
                ..new_concert("Two", 2)
            })
            .await;
        concerts
            .insert(NewConcert {
                venue_id: 2,
                ..new_concert("Three", 3)
            })
            .await;

        let by_artist: Vec<u32> = concerts.by_artist(1).await.iter().map(|c| c.id).collect();
        assert_eq!(by_artist, vec![1, 3]);

        let by_venue: Vec<u32> = concerts.by_venue(2).await.iter().map(|c| c.id).collect();
        assert_eq!(by_venue, vec![2, 3]);

        assert!(concerts.by_artist(99).await.is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let storage = store_with_venue_and_artist().await;
        let concerts = storage.concerts();
        let concert = concerts.insert(new_concert("Pop Explosion", 30)).await;
        storage.ticket_types().insert(tier(concert.id, "VIP", 5000)).await;

        let moved = concerts
            .update(
                concert.id,
                ConcertPatch {
                    date: Some(anchor() + Duration::days(60)),
                    status: Some("postponed".to_string()),
                    ..ConcertPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(moved.title, concert.title);
        assert_eq!(moved.status, "postponed");
        assert!(concerts.upcoming(None).await.is_empty());

        assert!(concerts.delete(concert.id).await);
        assert_eq!(concerts.get_by_id(concert.id).await, None);
        assert!(!concerts.delete(concert.id).await);
        assert_eq!(concerts.update(concert.id, ConcertPatch::default()).await, None);

        // Tiers of a deleted concert are left behind.
        assert_eq!(storage.ticket_types().by_concert(concert.id).await.len(), 1);
    }

    #[tokio::test]
    async fn test_seeded_listings() {
        let storage = Storage::new(StoreConfig::new().seed_anchor(anchor()));
        let concerts = storage.concerts();

        let featured = concerts.featured(None).await;
        let titles: Vec<&str> = featured.iter().map(|l| l.concert.title.as_str()).collect();
        assert_eq!(titles, vec!["Pop Explosion", "Rock Legends"]);
        assert!(featured.iter().all(|l| l.min_price() == 1000 && l.max_price() == 5000));

        let upcoming = concerts.upcoming(None).await;
        assert_eq!(upcoming.len(), 3);
        assert_eq!(
            upcoming[0].concert.date,
            Utc.with_ymd_and_hms(2026, 11, 16, 0, 0, 0).unwrap()
        );
        assert_eq!(upcoming[2].concert.title, "Folk Tales");
        assert_eq!(upcoming[2].venue.as_ref().map(|v| v.name.as_str()), Some("Music Museum"));
    }
}
