//! # tiket-db: Storage Layer for Tiket
//!
//! This crate holds the catalog, accounts and orders of the ticketing site
//! in process memory. Every server start begins from an empty store plus
//! the seed catalog.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tiket Data Flow                                  │
//! │                                                                         │
//! │  Route Handler (home page, concert page, checkout)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     tiket-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Storage     │    │  Repositories │    │  Seed        │  │   │
//! │  │   │  (store.rs)   │    │ (concert.rs)  │    │  (seed.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ Arc<RwLock<   │◄───│ ConcertRepo   │    │ categories   │  │   │
//! │  │   │  StoreState>> │    │ OrderRepo     │    │ artists      │  │   │
//! │  │   │               │    │ ...           │    │ concerts     │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  tiket-core records (Concert, TicketType, ...) returned by value       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The storage handle and repository accessors
//! - [`config`] - Store configuration (seed flag and anchor date)
//! - [`error`] - Storage error types
//! - [`repository`] - Repository implementations (concert, order, etc.)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tiket_db::{Storage, StoreConfig};
//!
//! // Seeded store, configured from the environment
//! let storage = Storage::new(StoreConfig::from_env()?);
//!
//! // Use repositories
//! let featured = storage.concerts().featured(None).await;
//! let details = storage.concerts().get_with_details(1).await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod repository;
mod seed;
pub mod store;
mod table;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use error::{found, StoreError, StoreResult};
pub use store::{Storage, StoreStats};

// Repository re-exports for convenience
pub use repository::artist::ArtistRepository;
pub use repository::category::CategoryRepository;
pub use repository::concert::ConcertRepository;
pub use repository::order::{OrderItemRepository, OrderRepository};
pub use repository::ticket::TicketTypeRepository;
pub use repository::user::UserRepository;
pub use repository::venue::VenueRepository;
