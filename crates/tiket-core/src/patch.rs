//! # Partial Updates
//!
//! One patch struct per updatable entity. Every field is optional and only
//! the fields present in a patch are written; the rest of the record is
//! kept as it was.
//!
//! ## Absent vs. Null
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Nullable fields (bio, imageUrl, phone, ...) use Option<Option<T>>      │
//! │                                                                         │
//! │  JSON                       Patch field          Effect                │
//! │  ─────────────────────────  ───────────────────  ───────────────────   │
//! │  { }                        None                 unchanged             │
//! │  { "bio": null }            Some(None)           cleared               │
//! │  { "bio": "New bio" }       Some(Some(..))       replaced              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids are not patchable: a record keeps the id it was created with.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{Artist, Concert, Id, TicketType, User, Venue};

/// A set of field changes for records of type `T`.
pub trait Patch<T> {
    /// Writes every present field onto `target`.
    fn apply_to(self, target: &mut T);
}

/// Keeps `null` distinguishable from a missing key.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Assigns `$field` for each field present in the patch.
macro_rules! merge {
    ($patch:ident => $target:ident: $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )+
    };
}

// =============================================================================
// User
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub address: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

impl Patch<User> for UserPatch {
    fn apply_to(self, target: &mut User) {
        let patch = self;
        merge!(patch => target: username, password, name, email, phone, address, is_admin);
    }
}

// =============================================================================
// Artist
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
}

impl Patch<Artist> for ArtistPatch {
    fn apply_to(self, target: &mut Artist) {
        let patch = self;
        merge!(patch => target: name, genre, bio, image_url);
    }
}

// =============================================================================
// Venue
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenuePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
}

impl Patch<Venue> for VenuePatch {
    fn apply_to(self, target: &mut Venue) {
        let patch = self;
        merge!(patch => target: name, address, location, capacity, image_url);
    }
}

// =============================================================================
// Concert
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcertPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
}

impl Patch<Concert> for ConcertPatch {
    fn apply_to(self, target: &mut Concert) {
        let patch = self;
        merge!(patch => target:
            title, date, description, venue_id, artist_id, status, is_featured, image_url
        );
    }
}

// =============================================================================
// Ticket Type
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concert_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Patch<TicketType> for TicketTypePatch {
    fn apply_to(self, target: &mut TicketType) {
        let patch = self;
        merge!(patch => target: concert_id, name, price, quantity, description);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
