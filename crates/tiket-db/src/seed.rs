//! # Seed Catalog
//!
//! Demo data loaded into a fresh store so the home page has something to
//! show: six categories, four artists, three venues and three concerts,
//! each concert with four ticket tiers.
//!
//! ## Concert Schedule
//! ```text
//! anchor day (midnight UTC)
//!   ├── +1 month  Pop Explosion   featured
//!   ├── +2 months Rock Legends    featured
//!   └── +3 months Folk Tales      not featured
//! ```
//! A day-of-month past the end of the target month clamps to its last day
//! (Jan 31 + 1 month = Feb 28).

use chrono::{DateTime, Months, NaiveTime, Utc};
use tracing::info;

use tiket_core::{NewArtist, NewCategory, NewConcert, NewTicketType, NewVenue};

use crate::store::StoreState;

const CATEGORIES: &[(&str, &str)] = &[
    ("Pop", "fas fa-music"),
    ("Rock", "fas fa-guitar"),
    ("Folk", "fas fa-drum"),
    ("Hip-Hop", "fas fa-microphone-alt"),
    ("Electronic", "fas fa-compact-disc"),
    ("Festivals", "fas fa-theater-masks"),
];

/// (name, genre, bio, image)
const ARTISTS: &[(&str, &str, &str, &str)] = &[
    (
        "Sarah Geronimo",
        "Pop",
        "Sarah Geronimo is a Filipino singer, actress and television personality. She began her career with the release of her debut album in 2003.",
        "https://i.imgur.com/X0xNoXu.jpg",
    ),
    (
        "Bamboo",
        "Rock",
        "Bamboo is one of the most influential rock musicians in the Philippines, known as the vocalist of bands such as Bamboo and Rivermaya.",
        "https://i.imgur.com/aVnJnuC.jpg",
    ),
    (
        "Ben&Ben",
        "Folk",
        "Ben&Ben is a nine-piece Filipino folk-pop band known for their heartfelt lyrics and unique sound that combines traditional Filipino folk with contemporary elements.",
        "https://i.imgur.com/9VX12CQ.jpg",
    ),
    (
        "Gloc-9",
        "Hip-Hop",
        "Gloc-9 is a Filipino rapper, songwriter, and record producer. He is considered one of the most successful and respected Filipino rappers.",
        "https://i.imgur.com/jzuVkIM.jpg",
    ),
];

const VENUE_IMAGE: &str = "https://i.imgur.com/Y4jhrWn.jpg";

/// (name, address, location, capacity)
const VENUES: &[(&str, &str, &str, u32)] = &[
    ("Araneta Coliseum", "Araneta City, Cubao, Quezon City", "Quezon City", 15000),
    ("Mall of Asia Arena", "Mall of Asia Complex, Pasay City", "Pasay City", 20000),
    ("Music Museum", "Greenhills Shopping Center, San Juan City", "San Juan", 800),
];

const CONCERT_IMAGE: &str = "https://i.imgur.com/0kIb4Kh.jpg";

/// (title, description, months after anchor, venue, artist, featured)
const CONCERTS: &[(&str, &str, u32, u32, u32, bool)] = &[
    (
        "Pop Explosion",
        "Sarah Geronimo's biggest concert of the year featuring her latest hits and classic favorites.",
        1,
        1,
        1,
        true,
    ),
    (
        "Rock Legends",
        "Bamboo returns with a powerful rock concert showcasing timeless hits and new material.",
        2,
        2,
        2,
        true,
    ),
    (
        "Folk Tales",
        "Ben&Ben presents an intimate acoustic evening of folk music and storytelling.",
        3,
        3,
        3,
        false,
    ),
];

/// (name, price, quantity, description), attached to every seeded concert.
const TICKET_TIERS: &[(&str, i64, u32, &str)] = &[
    ("VIP", 5000, 100, "Best seats with meet & greet"),
    ("Gold", 3500, 500, "Premium seating close to stage"),
    ("Silver", 2000, 1000, "Good view of the stage"),
    ("General Admission", 1000, 2000, "Standing area"),
];

/// Loads the demo catalog into `state`.
///
/// Runs before the state is shared, so it writes the tables directly.
pub(crate) fn load_catalog(state: &mut StoreState, anchor: DateTime<Utc>) {
    for (name, icon_class) in CATEGORIES {
        let new = NewCategory {
            name: name.to_string(),
            icon_class: icon_class.to_string(),
        };
        state.categories.insert_with(|id| new.into_record(id));
    }

    for (name, genre, bio, image) in ARTISTS {
        let new = NewArtist {
            name: name.to_string(),
            genre: genre.to_string(),
            bio: Some(bio.to_string()),
            image_url: Some(image.to_string()),
        };
        state.artists.insert_with(|id| new.into_record(id));
    }

    for (name, address, location, capacity) in VENUES {
        let new = NewVenue {
            name: name.to_string(),
            address: address.to_string(),
            location: location.to_string(),
            capacity: *capacity,
            image_url: Some(VENUE_IMAGE.to_string()),
        };
        state.venues.insert_with(|id| new.into_record(id));
    }

    for (title, description, months, venue_id, artist_id, featured) in CONCERTS {
        let new = NewConcert {
            title: title.to_string(),
            date: months_after(anchor, *months),
            description: description.to_string(),
            venue_id: *venue_id,
            artist_id: *artist_id,
            status: Some(tiket_core::CONCERT_STATUS_UPCOMING.to_string()),
            is_featured: Some(*featured),
            image_url: Some(CONCERT_IMAGE.to_string()),
        };
        let concert = state.concerts.insert_with(|id| new.into_record(id));

        for (name, price, quantity, description) in TICKET_TIERS {
            let tier = NewTicketType {
                concert_id: concert.id,
                name: name.to_string(),
                price: *price,
                quantity: *quantity,
                description: description.to_string(),
            };
            state.ticket_types.insert_with(|id| tier.into_record(id));
        }
    }

    info!(
        categories = state.categories.len(),
        artists = state.artists.len(),
        venues = state.venues.len(),
        concerts = state.concerts.len(),
        ticket_types = state.ticket_types.len(),
        "Seed catalog loaded"
    );
}

/// Midnight UTC of the anchor day, `months` calendar months later.
fn months_after(anchor: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    let day = anchor.date_naive();
    day.checked_add_months(Months::new(months))
        .unwrap_or(day)
        .and_time(NaiveTime::MIN)
        .and_utc()
}
