//! # tiket-core: Pure Domain Types for Tiket
//!
//! This crate holds the domain model of the concert ticketing application:
//! the records the store keeps, the payloads used to create them, the patches
//! used to update them, and the read views the store assembles.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tiket Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web layer (out of repo)                      │   │
//! │  │    Home page ──► Concert page ──► Checkout ──► Order history    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain async calls                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    tiket-db (Storage)                           │   │
//! │  │        users, artists, venues, concerts, tickets, orders        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tiket-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   patch   │  │  pricing  │  │   views   │  │   │
//! │  │   │  Concert  │  │ ConcertP. │  │PriceRange │  │ Listing   │  │   │
//! │  │   │  NewOrder │  │ VenuePatch│  │           │  │ Details   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO LOCKS • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity records and their insert payloads
//! - [`patch`] - Partial updates, one patch struct per updatable entity
//! - [`pricing`] - Min/max price derivation over ticket tiers
//! - [`views`] - Joined read models (concert + venue + artist)
//!
//! ## Example Usage
//!
//! ```rust
//! use tiket_core::{NewArtist, Patch, ArtistPatch};
//!
//! let mut artist = NewArtist {
//!     name: "Bamboo".to_string(),
//!     genre: "Rock".to_string(),
//!     bio: None,
//!     image_url: None,
//! }
//! .into_record(1);
//! assert_eq!(artist.bio, None);
//!
//! ArtistPatch {
//!     genre: Some("Alternative".to_string()),
//!     ..ArtistPatch::default()
//! }
//! .apply_to(&mut artist);
//! assert_eq!(artist.genre, "Alternative");
//! assert_eq!(artist.name, "Bamboo");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod patch;
pub mod pricing;
pub mod types;
pub mod views;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use patch::*;
pub use pricing::PriceRange;
pub use types::*;
pub use views::{ConcertDetails, ConcertListing};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Status a concert gets when created without one.
///
/// Statuses are opaque strings compared by equality; only this one has a
/// meaning to the store (it drives the upcoming listing).
pub const CONCERT_STATUS_UPCOMING: &str = "upcoming";

/// Status an order gets when created without one.
pub const ORDER_STATUS_COMPLETED: &str = "completed";

/// Number of artists shown in the home page's featured row.
pub const DEFAULT_FEATURED_ARTISTS: usize = 4;

/// Number of venues shown in the home page's venue row.
pub const DEFAULT_TOP_VENUES: usize = 3;

/// Number of concerts in the home page's featured carousel.
pub const DEFAULT_FEATURED_CONCERTS: usize = 3;

/// Number of concerts in the upcoming listing.
pub const DEFAULT_UPCOMING_CONCERTS: usize = 6;
