//! # Storage Error Types
//!
//! Error types for the storage layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Repository lookup → Option<T>  (absent is not a failure)              │
//! │       │                                                                 │
//! │       ▼  found(value, id)                                              │
//! │  StoreError::NotFound  ← Caller decides an absent record is fatal      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Web layer maps it to a 404                                            │
//! │                                                                         │
//! │  StoreConfig::from_env → StoreError::InvalidConfig                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use tiket_core::{Id, Record};

/// Storage errors.
///
/// Repository methods never return these themselves: a missing id is
/// reported as `None` or `false`. The variants exist for callers that need
/// a typed failure and for configuration loading.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record not found.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: Id },

    /// An environment variable held a value that could not be parsed.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidConfig { key: String, value: String },
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: Id) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id,
        }
    }

    /// Creates an InvalidConfig error.
    pub fn invalid_config(key: impl Into<String>, value: impl Into<String>) -> Self {
        StoreError::InvalidConfig {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Turns an absent lookup result into [`StoreError::NotFound`].
///
/// ## Example
/// ```rust,ignore
/// let concert = found(storage.concerts().get_by_id(id).await, id)?;
/// ```
pub fn found<T: Record>(value: Option<T>, id: Id) -> StoreResult<T> {
    value.ok_or_else(|| StoreError::not_found(T::ENTITY, id))
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
