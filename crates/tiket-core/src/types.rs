//! # Domain Types
//!
//! Records kept by the store and the payloads used to create them.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────┐      ┌─────────────────┐      ┌─────────────┐         │
//! │  │   Artist    │◄─────│     Concert     │─────►│    Venue    │         │
//! │  └─────────────┘      │  status         │      └─────────────┘         │
//! │                       │  is_featured    │                               │
//! │                       └────────┬────────┘                               │
//! │                                │ 1..n                                   │
//! │                       ┌────────▼────────┐                               │
//! │                       │   TicketType    │◄──────────┐                   │
//! │                       └─────────────────┘           │                   │
//! │                                                     │                   │
//! │  ┌─────────────┐      ┌─────────────────┐      ┌────┴────────┐         │
//! │  │    User     │◄─────│      Order      │◄─────│  OrderItem  │         │
//! │  └─────────────┘      └─────────────────┘      └─────────────┘         │
//! │                                                                         │
//! │  ┌─────────────┐                                                        │
//! │  │  Category   │  (standalone)                                          │
//! │  └─────────────┘                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Payload → Record
//! Every `New*` payload turns into its record through `into_record`, which
//! is the single place the default-value policy lives. References between
//! records are plain ids; nothing here checks that the target exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{CONCERT_STATUS_UPCOMING, ORDER_STATUS_COMPLETED};

/// Identifier of a record within its collection (starts at 1, never reused).
pub type Id = u32;

/// A record stored in one of the store's collections.
pub trait Record: Clone {
    /// Entity name used in log lines and not-found errors.
    const ENTITY: &'static str;

    /// The record's identifier.
    fn id(&self) -> Id;
}

macro_rules! impl_record {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Record for $ty {
                const ENTITY: &'static str = $name;

                #[inline]
                fn id(&self) -> Id {
                    self.id
                }
            }
        )*
    };
}

impl_record! {
    User => "User",
    Artist => "Artist",
    Venue => "Venue",
    Concert => "Concert",
    TicketType => "TicketType",
    Order => "Order",
    OrderItem => "OrderItem",
    Category => "Category",
}

/// Treats an empty string the same as an omitted value.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// =============================================================================
// User
// =============================================================================

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    pub username: String,
    /// Stored as given; hashing is the auth layer's job.
    pub password: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_admin: bool,
}

/// Payload for creating a user.
///
/// There is deliberately no admin flag here: new accounts are never admins.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl NewUser {
    /// Builds the stored user, applying creation defaults.
    pub fn into_record(self, id: Id) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
            name: self.name,
            email: self.email,
            phone: non_empty(self.phone),
            address: non_empty(self.address),
            is_admin: false,
        }
    }
}

// =============================================================================
// Artist
// =============================================================================

/// A performer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: Id,
    pub name: String,
    pub genre: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
}

/// Payload for creating an artist.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewArtist {
    pub name: String,
    pub genre: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
}

impl NewArtist {
    pub fn into_record(self, id: Id) -> Artist {
        Artist {
            id,
            name: self.name,
            genre: self.genre,
            bio: non_empty(self.bio),
            image_url: non_empty(self.image_url),
        }
    }
}

// =============================================================================
// Venue
// =============================================================================

/// A place concerts are held at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: Id,
    pub name: String,
    pub address: String,
    /// City or district shown in listings.
    pub location: String,
    pub capacity: u32,
    pub image_url: Option<String>,
}

/// Payload for creating a venue.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewVenue {
    pub name: String,
    pub address: String,
    pub location: String,
    pub capacity: u32,
    pub image_url: Option<String>,
}

impl NewVenue {
    pub fn into_record(self, id: Id) -> Venue {
        Venue {
            id,
            name: self.name,
            address: self.address,
            location: self.location,
            capacity: self.capacity,
            image_url: non_empty(self.image_url),
        }
    }
}

// =============================================================================
// Concert
// =============================================================================

/// A scheduled show of one artist at one venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Concert {
    pub id: Id,
    pub title: String,
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
    pub description: String,
    pub venue_id: Id,
    pub artist_id: Id,
    /// Opaque status string; "upcoming" is the only value the store reads.
    pub status: String,
    pub is_featured: bool,
    pub image_url: Option<String>,
}

/// Payload for creating a concert.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewConcert {
    pub title: String,
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
    pub description: String,
    pub venue_id: Id,
    pub artist_id: Id,
    pub status: Option<String>,
    pub is_featured: Option<bool>,
    pub image_url: Option<String>,
}

impl NewConcert {
    /// Builds the stored concert.
    ///
    /// ## Defaults
    /// - `status`: "upcoming"
    /// - `is_featured`: false
    /// - `image_url`: none
    pub fn into_record(self, id: Id) -> Concert {
        Concert {
            id,
            title: self.title,
            date: self.date,
            description: self.description,
            venue_id: self.venue_id,
            artist_id: self.artist_id,
            status: non_empty(self.status).unwrap_or_else(|| CONCERT_STATUS_UPCOMING.to_string()),
            is_featured: self.is_featured.unwrap_or(false),
            image_url: non_empty(self.image_url),
        }
    }
}

impl Concert {
    /// Whether the concert shows up in the upcoming listing.
    #[inline]
    pub fn is_upcoming(&self) -> bool {
        self.status == CONCERT_STATUS_UPCOMING
    }
}

// =============================================================================
// Ticket Type
// =============================================================================

/// A ticket tier on sale for one concert (VIP, Gold, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    pub id: Id,
    pub concert_id: Id,
    pub name: String,
    /// Whole currency units.
    pub price: i64,
    pub quantity: u32,
    pub description: String,
}

/// Payload for creating a ticket type.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewTicketType {
    pub concert_id: Id,
    pub name: String,
    pub price: i64,
    pub quantity: u32,
    pub description: String,
}

impl NewTicketType {
    pub fn into_record(self, id: Id) -> TicketType {
        TicketType {
            id,
            concert_id: self.concert_id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            description: self.description,
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A purchase made by a user. Line items live in [`OrderItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Id,
    pub user_id: Id,
    #[ts(as = "String")]
    pub order_date: DateTime<Utc>,
    pub status: String,
}

/// Payload for creating an order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub user_id: Id,
    pub status: Option<String>,
}

impl NewOrder {
    /// Builds the stored order, stamped with `order_date`.
    ///
    /// The store passes its own clock reading; this crate never reads one.
    pub fn into_record(self, id: Id, order_date: DateTime<Utc>) -> Order {
        Order {
            id,
            user_id: self.user_id,
            order_date,
            status: non_empty(self.status).unwrap_or_else(|| ORDER_STATUS_COMPLETED.to_string()),
        }
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// One line of an order: a quantity of a single ticket type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: Id,
    pub order_id: Id,
    pub ticket_type_id: Id,
    pub quantity: u32,
}

/// Payload for creating an order item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderItem {
    pub order_id: Id,
    pub ticket_type_id: Id,
    pub quantity: u32,
}

impl NewOrderItem {
    pub fn into_record(self, id: Id) -> OrderItem {
        OrderItem {
            id,
            order_id: self.order_id,
            ticket_type_id: self.ticket_type_id,
            quantity: self.quantity,
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// A browse category shown on the home page (Pop, Rock, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Id,
    pub name: String,
    /// Icon font class, e.g. "fas fa-music".
    pub icon_class: String,
}

/// Payload for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub icon_class: String,
}

impl NewCategory {
    pub fn into_record(self, id: Id) -> Category {
        Category {
            id,
            name: self.name,
            icon_class: self.icon_class,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
