//! # Repository Module
//!
//! Per-collection access to the in-memory store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Route Handler                                                         │
//! │       │                                                                 │
//! │       │  storage.concerts().upcoming(None)                             │
//! │       ▼                                                                 │
//! │  ConcertRepository                                                     │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── get_with_details(&self, id)                                       │
//! │  ├── featured(&self, limit) / upcoming(&self, limit)                   │
//! │  ├── insert(&self, new)                                                │
//! │  └── update(&self, id, patch) / delete(&self, id)                      │
//! │       │                                                                 │
//! │       │  read / write lock                                              │
//! │       ▼                                                                 │
//! │  StoreState (one Table per collection)                                 │
//! │                                                                         │
//! │  Every call takes the lock once, so a joined view never mixes two      │
//! │  versions of the store.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reads return clones; callers never hold a reference into the store.
//!
//! ## Available Repositories
//!
//! - [`UserRepository`](user::UserRepository) - Accounts and login lookup
//! - [`ArtistRepository`](artist::ArtistRepository) - Artists and the featured row
//! - [`VenueRepository`](venue::VenueRepository) - Venues and the top row
//! - [`ConcertRepository`](concert::ConcertRepository) - Concerts and joined listings
//! - [`TicketTypeRepository`](ticket::TicketTypeRepository) - Ticket tiers
//! - [`OrderRepository`](order::OrderRepository) / [`OrderItemRepository`](order::OrderItemRepository) - Orders
//! - [`CategoryRepository`](category::CategoryRepository) - Genre categories

pub mod artist;
pub mod category;
pub mod concert;
pub mod order;
pub mod ticket;
pub mod user;
pub mod venue;
