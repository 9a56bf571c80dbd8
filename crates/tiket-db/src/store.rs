//! # Storage Handle
//!
//! The in-memory store and its construction.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Storage Handle                                 │
//! │                                                                         │
//! │  Server Startup                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::from_env() ← seed flag, seed anchor                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Storage::new(config) ← build tables + load seed catalog               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │      Arc<RwLock<StoreState>>            │                           │
//! │  │  users  artists  venues  concerts       │                           │
//! │  │  ticket_types  orders  order_items      │                           │
//! │  │  categories                             │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       │ storage.concerts(), storage.orders(), ...                       │
//! │       ▼                                                                 │
//! │  Repository handles share the same state                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store lives for one server instance. Nothing is written to disk.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;

use tiket_core::{Artist, Category, Concert, Order, OrderItem, TicketType, User, Venue};

use crate::config::StoreConfig;
use crate::repository::artist::ArtistRepository;
use crate::repository::category::CategoryRepository;
use crate::repository::concert::ConcertRepository;
use crate::repository::order::{OrderItemRepository, OrderRepository};
use crate::repository::ticket::TicketTypeRepository;
use crate::repository::user::UserRepository;
use crate::repository::venue::VenueRepository;
use crate::seed;
use crate::table::Table;

// =============================================================================
// State
// =============================================================================

/// Every collection of the store.
#[derive(Debug, Default)]
pub(crate) struct StoreState {
    pub(crate) users: Table<User>,
    pub(crate) artists: Table<Artist>,
    pub(crate) venues: Table<Venue>,
    pub(crate) concerts: Table<Concert>,
    pub(crate) ticket_types: Table<TicketType>,
    pub(crate) orders: Table<Order>,
    pub(crate) order_items: Table<OrderItem>,
    pub(crate) categories: Table<Category>,
}

/// State shared by the storage handle and its repositories.
pub(crate) type SharedState = Arc<RwLock<StoreState>>;

/// Row count of every collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub users: usize,
    pub artists: usize,
    pub venues: usize,
    pub concerts: usize,
    pub ticket_types: usize,
    pub orders: usize,
    pub order_items: usize,
    pub categories: usize,
}

// =============================================================================
// Storage
// =============================================================================

/// Main storage handle providing repository access.
///
/// Cloning is cheap: clones share the same tables.
///
/// ## Usage in Request Handlers
/// ```rust,ignore
/// async fn home(storage: Storage) -> HomePage {
///     HomePage {
///         featured: storage.concerts().featured(None).await,
///         upcoming: storage.concerts().upcoming(None).await,
///         artists: storage.artists().featured(None).await,
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Storage {
    state: SharedState,
}

impl Storage {
    /// Creates a new store.
    ///
    /// ## What This Does
    /// 1. Creates eight empty collections, each counting ids from 1
    /// 2. Loads the seed catalog (if enabled), dated from the configured
    ///    anchor or from now
    ///
    /// ## Example
    /// ```rust
    /// use tiket_db::{Storage, StoreConfig};
    ///
    /// let storage = Storage::new(StoreConfig::empty());
    /// ```
    pub fn new(config: StoreConfig) -> Self {
        info!(seed_catalog = config.seed_catalog, "Initializing storage");

        let mut state = StoreState::default();

        if config.seed_catalog {
            let anchor = config.seed_anchor.unwrap_or_else(Utc::now);
            seed::load_catalog(&mut state, anchor);
        }

        Storage {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns the user repository.
    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.state.clone())
    }

    /// Returns the artist repository.
    pub fn artists(&self) -> ArtistRepository {
        ArtistRepository::new(self.state.clone())
    }

    /// Returns the venue repository.
    pub fn venues(&self) -> VenueRepository {
        VenueRepository::new(self.state.clone())
    }

    /// Returns the concert repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let listing = storage.concerts().upcoming(None).await;
    /// ```
    pub fn concerts(&self) -> ConcertRepository {
        ConcertRepository::new(self.state.clone())
    }

    /// Returns the ticket type repository.
    pub fn ticket_types(&self) -> TicketTypeRepository {
        TicketTypeRepository::new(self.state.clone())
    }

    /// Returns the order repository.
    pub fn orders(&self) -> OrderRepository {
        OrderRepository::new(self.state.clone())
    }

    /// Returns the order item repository.
    pub fn order_items(&self) -> OrderItemRepository {
        OrderItemRepository::new(self.state.clone())
    }

    /// Returns the category repository.
    pub fn categories(&self) -> CategoryRepository {
        CategoryRepository::new(self.state.clone())
    }

    /// Counts the rows of every collection (for diagnostics).
    pub async fn stats(&self) -> StoreStats {
        let state = self.state.read().await;
        StoreStats {
            users: state.users.len(),
            artists: state.artists.len(),
            venues: state.venues.len(),
            concerts: state.concerts.len(),
            ticket_types: state.ticket_types.len(),
            orders: state.orders.len(),
            order_items: state.order_items.len(),
            categories: state.categories.len(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[tokio::test]
    async fn test_empty_store() {
        let storage = Storage::new(StoreConfig::empty());
        assert_eq!(storage.stats().await, StoreStats::default());
    }

    #[tokio::test]
    async fn test_seeded_store() {
        let anchor = Utc.with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap();
        let storage = Storage::new(StoreConfig::new().seed_anchor(anchor));

        let stats = storage.stats().await;
        assert_eq!(stats.categories, 6);
        assert_eq!(stats.artists, 4);
        assert_eq!(stats.venues, 3);
        assert_eq!(stats.concerts, 3);
        assert_eq!(stats.ticket_types, 12);
        assert_eq!(stats.users, 0);
        assert_eq!(stats.orders, 0);
        assert_eq!(stats.order_items, 0);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let storage = Storage::new(StoreConfig::empty());
        let other = storage.clone();

        other
            .categories()
            .insert(tiket_core::NewCategory {
                name: "Jazz".to_string(),
                icon_class: "fas fa-saxophone".to_string(),
            })
            .await;

        assert_eq!(storage.categories().list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_separate_stores_are_isolated() {
        let a = Storage::new(StoreConfig::empty());
        let b = Storage::new(StoreConfig::new());
        assert_eq!(a.stats().await.concerts, 0);
        assert_eq!(b.stats().await.concerts, 3);
    }
}
