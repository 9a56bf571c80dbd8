//! # Storage Configuration
//!
//! Settings read once when the store is built.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TIKET_*`), via [`StoreConfig::from_env`]
//! 2. Builder calls in code
//! 3. Defaults (this file)
//!
//! ## Environment Variables
//! - `TIKET_SEED_CATALOG`: load the demo catalog (`true`/`false`, `1`/`0`, `yes`/`no`)
//! - `TIKET_SEED_ANCHOR`: RFC 3339 timestamp seeded concert dates are counted from

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

const ENV_SEED_CATALOG: &str = "TIKET_SEED_CATALOG";
const ENV_SEED_ANCHOR: &str = "TIKET_SEED_ANCHOR";

/// Storage configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StoreConfig::new().seed_anchor(Utc::now());
/// let storage = Storage::new(config);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Whether to load the demo catalog (categories, artists, venues,
    /// concerts, ticket tiers) at construction.
    /// Default: true
    pub seed_catalog: bool,

    /// Moment seeded concert dates are computed from.
    /// Default: none (construction time)
    pub seed_anchor: Option<DateTime<Utc>>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            seed_catalog: true,
            seed_anchor: None,
        }
    }
}

impl StoreConfig {
    /// Creates the default configuration (seeded catalog, anchored now).
    pub fn new() -> Self {
        StoreConfig::default()
    }

    /// Creates a configuration for an empty store (for testing).
    pub fn empty() -> Self {
        StoreConfig {
            seed_catalog: false,
            seed_anchor: None,
        }
    }

    /// Sets whether the demo catalog is loaded.
    pub fn seed_catalog(mut self, seed: bool) -> Self {
        self.seed_catalog = seed;
        self
    }

    /// Pins the moment seeded concert dates are computed from.
    pub fn seed_anchor(mut self, anchor: DateTime<Utc>) -> Self {
        self.seed_anchor = Some(anchor);
        self
    }

    /// Builds a configuration from `TIKET_*` environment variables.
    ///
    /// Unset variables keep their defaults; set but unparseable ones fail.
    pub fn from_env() -> StoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> StoreResult<Self> {
        let mut config = StoreConfig::default();

        if let Some(value) = lookup(ENV_SEED_CATALOG) {
            config.seed_catalog = parse_flag(&value)
                .ok_or_else(|| StoreError::invalid_config(ENV_SEED_CATALOG, &value))?;
        }

        if let Some(value) = lookup(ENV_SEED_ANCHOR) {
            let anchor = DateTime::parse_from_rfc3339(value.trim())
                .map_err(|_| StoreError::invalid_config(ENV_SEED_ANCHOR, &value))?;
            config.seed_anchor = Some(anchor.with_timezone(&Utc));
        }

        debug!(?config, "Storage configuration loaded");
        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert!(config.seed_catalog);
        assert_eq!(config.seed_anchor, None);
        assert!(!StoreConfig::empty().seed_catalog);
    }

    #[test]
    fn test_builder() {
        let anchor = Utc.with_ymd_and_hms(2026, 1, 31, 8, 0, 0).unwrap();
        let config = StoreConfig::new().seed_catalog(false).seed_anchor(anchor);
        assert!(!config.seed_catalog);
        assert_eq!(config.seed_anchor, Some(anchor));
    }

    #[test]
    fn test_from_lookup_reads_variables() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            ("TIKET_SEED_CATALOG", "no"),
            ("TIKET_SEED_ANCHOR", "2026-03-01T00:00:00+08:00"),
        ]))
        .unwrap();

        assert!(!config.seed_catalog);
        assert_eq!(
            config.seed_anchor,
            Some(Utc.with_ymd_and_hms(2026, 2, 28, 16, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_from_lookup_unset_keeps_defaults() {
        let config = StoreConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_from_lookup_rejects_garbage() {
        let err = StoreConfig::from_lookup(lookup_from(&[("TIKET_SEED_CATALOG", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidConfig { ref key, .. } if key == "TIKET_SEED_CATALOG"));

        let err = StoreConfig::from_lookup(lookup_from(&[("TIKET_SEED_ANCHOR", "next week")]))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidConfig { ref key, .. } if key == "TIKET_SEED_ANCHOR"));
    }
}
