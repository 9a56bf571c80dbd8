//! # Catalog Dump
//!
//! Builds a store the way the server does and prints what the site would
//! render, as JSON.
//!
//! ## Usage
//! ```bash
//! # Home page data (categories, featured rows, upcoming concerts)
//! cargo run -p tiket-db --bin catalog
//!
//! # One concert page
//! cargo run -p tiket-db --bin catalog -- --concert 2 --pretty
//!
//! # Fixed seed dates and debug logs
//! TIKET_SEED_ANCHOR=2026-10-16T00:00:00Z RUST_LOG=tiket_db=debug \
//!     cargo run -p tiket-db --bin catalog
//! ```

use std::env;

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use tiket_core::{Artist, Category, ConcertListing, Id, Venue};
use tiket_db::{Storage, StoreConfig, StoreError, StoreStats};

/// Everything the home page shows.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HomePage {
    categories: Vec<Category>,
    featured_artists: Vec<Artist>,
    top_venues: Vec<Venue>,
    featured_concerts: Vec<ConcertListing>,
    upcoming_concerts: Vec<ConcertListing>,
    stats: StoreStats,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,tiket_db=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut concert_id: Option<Id> = None;
    let mut pretty = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--concert" | "-c" => {
                if i + 1 < args.len() {
                    concert_id = Some(args[i + 1].parse()?);
                    i += 1;
                }
            }
            "--pretty" | "-p" => pretty = true,
            "--help" | "-h" => {
                println!("Tiket Catalog Dump");
                println!();
                println!("Usage: catalog [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --concert <ID>  Print one concert with venue, artist and tickets");
                println!("  -p, --pretty        Pretty-print the JSON output");
                println!("  -h, --help          Show this help message");
                println!();
                println!("Environment:");
                println!("  TIKET_SEED_CATALOG  Load the demo catalog (default: true)");
                println!("  TIKET_SEED_ANCHOR   RFC 3339 date the seed schedule counts from");
                return Ok(());
            }
            other => eprintln!("Ignoring unknown argument: {}", other),
        }
        i += 1;
    }

    let storage = Storage::new(StoreConfig::from_env()?);

    let json = match concert_id {
        Some(id) => {
            let details = storage
                .concerts()
                .get_with_details(id)
                .await
                .ok_or_else(|| StoreError::not_found("Concert", id))?;
            to_json(&details, pretty)?
        }
        None => {
            let home = home_page(&storage).await;
            to_json(&home, pretty)?
        }
    };

    println!("{}", json);
    Ok(())
}

async fn home_page(storage: &Storage) -> HomePage {
    HomePage {
        categories: storage.categories().list().await,
        featured_artists: storage.artists().featured(None).await,
        top_venues: storage.venues().top(None).await,
        featured_concerts: storage.concerts().featured(None).await,
        upcoming_concerts: storage.concerts().upcoming(None).await,
        stats: storage.stats().await,
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
