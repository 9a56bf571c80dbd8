//! # Category Repository

use tracing::debug;

use tiket_core::{Category, Id, NewCategory};

use crate::store::SharedState;

/// Repository for category operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    state: SharedState,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub(crate) fn new(state: SharedState) -> Self {
        CategoryRepository { state }
    }

    /// Gets a category by ID.
    pub async fn get_by_id(&self, id: Id) -> Option<Category> {
        self.state.read().await.categories.get(id)
    }

    /// Lists all categories in creation order.
    pub async fn list(&self) -> Vec<Category> {
        self.state.read().await.categories.all()
    }

    /// Creates a category.
    pub async fn insert(&self, new: NewCategory) -> Category {
        let mut state = self.state.write().await;
        let category = state.categories.insert_with(|id| new.into_record(id));
        debug!(id = category.id, name = %category.name, "Inserted category");
        category
    }
}
