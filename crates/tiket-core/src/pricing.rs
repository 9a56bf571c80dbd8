//! # Pricing
//!
//! Price range of a concert, derived from its ticket tiers. Prices are
//! integers in whole currency units, so no rounding is ever involved.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::TicketType;

/// Cheapest and most expensive tier of a concert.
///
/// A concert without tiers has the range `0..=0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min_price: i64,
    pub max_price: i64,
}

impl PriceRange {
    /// Computes the range over the given tiers.
    ///
    /// ## Example
    /// ```rust
    /// use tiket_core::PriceRange;
    ///
    /// let none: [tiket_core::TicketType; 0] = [];
    /// assert_eq!(PriceRange::from_ticket_types(&none), PriceRange::default());
    /// ```
    pub fn from_ticket_types<'a, I>(ticket_types: I) -> Self
    where
        I: IntoIterator<Item = &'a TicketType>,
    {
        ticket_types
            .into_iter()
            .map(|t| t.price)
            .fold(None, |range: Option<PriceRange>, price| {
                Some(match range {
                    None => PriceRange {
                        min_price: price,
                        max_price: price,
                    },
                    Some(r) => PriceRange {
                        min_price: r.min_price.min(price),
                        max_price: r.max_price.max(price),
                    },
                })
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(id: u32, price: i64) -> TicketType {
        TicketType {
            id,
            concert_id: 1,
            name: format!("Tier {id}"),
            price,
            quantity: 10,
            description: String::new(),
        }
    }

    #[test]
    fn test_range_over_seed_tiers() {
        let tiers = vec![tier(1, 5000), tier(2, 3500), tier(3, 2000), tier(4, 1000)];
        let range = PriceRange::from_ticket_types(&tiers);
        assert_eq!(range.min_price, 1000);
        assert_eq!(range.max_price, 5000);
    }

    #[test]
    fn test_single_tier() {
        let tiers = vec![tier(1, 750)];
        let range = PriceRange::from_ticket_types(&tiers);
        assert_eq!(range, PriceRange { min_price: 750, max_price: 750 });
    }

    #[test]
    fn test_no_tiers_is_zero() {
        let range = PriceRange::from_ticket_types(&Vec::<TicketType>::new());
        assert_eq!(range, PriceRange { min_price: 0, max_price: 0 });
    }
}
