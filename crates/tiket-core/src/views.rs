//! # Read Views
//!
//! Concert records joined with the records they reference. The concert's
//! own fields are flattened, so a view serializes as the concert object
//! with a few extra keys:
//!
//! ```text
//! { "id": 1, "title": "Pop Explosion", ..., "venue": {..}, "artist": {..},
//!   "minPrice": 1000, "maxPrice": 5000 }
//! ```
//!
//! `venue` and `artist` are `None` when the referenced record no longer
//! exists; a dangling reference is never an error.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::pricing::PriceRange;
use crate::types::{Artist, Concert, TicketType, Venue};

/// A concert with its venue, artist and every ticket tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ConcertDetails {
    #[serde(flatten)]
    pub concert: Concert,
    pub venue: Option<Venue>,
    pub artist: Option<Artist>,
    pub ticket_types: Vec<TicketType>,
}

/// A concert as shown in the featured and upcoming listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ConcertListing {
    #[serde(flatten)]
    pub concert: Concert,
    pub venue: Option<Venue>,
    pub artist: Option<Artist>,
    #[serde(flatten)]
    pub price_range: PriceRange,
}

impl ConcertListing {
    #[inline]
    pub fn min_price(&self) -> i64 {
        self.price_range.min_price
    }

    #[inline]
    pub fn max_price(&self) -> i64 {
        self.price_range.max_price
    }
}
