//! # Ticket Type Repository
//!
//! Ticket tiers belong to a concert through `concert_id`. The concert is
//! not checked on insert and its deletion does not cascade here.

use tracing::debug;

use tiket_core::{Id, NewTicketType, TicketType, TicketTypePatch};

use crate::store::SharedState;

/// Repository for ticket type operations.
#[derive(Debug, Clone)]
pub struct TicketTypeRepository {
    state: SharedState,
}

impl TicketTypeRepository {
    /// Creates a new TicketTypeRepository.
    pub(crate) fn new(state: SharedState) -> Self {
        TicketTypeRepository { state }
    }

    /// Gets a ticket type by ID.
    pub async fn get_by_id(&self, id: Id) -> Option<TicketType> {
        self.state.read().await.ticket_types.get(id)
    }

    /// Lists all ticket types in creation order.
    pub async fn list(&self) -> Vec<TicketType> {
        self.state.read().await.ticket_types.all()
    }

    /// Ticket types of one concert, in creation order.
    pub async fn by_concert(&self, concert_id: Id) -> Vec<TicketType> {
        self.state
            .read()
            .await
            .ticket_types
            .filter(|t| t.concert_id == concert_id)
    }

    /// Creates a ticket type.
    pub async fn insert(&self, new: NewTicketType) -> TicketType {
        let mut state = self.state.write().await;
        let ticket_type = state.ticket_types.insert_with(|id| new.into_record(id));
        debug!(
            id = ticket_type.id,
            concert_id = ticket_type.concert_id,
            price = ticket_type.price,
            "Inserted ticket type"
        );
        ticket_type
    }

    /// Merges `patch` over an existing ticket type. `None` if the ID is unknown.
    pub async fn update(&self, id: Id, patch: TicketTypePatch) -> Option<TicketType> {
        debug!(id, "Updating ticket type");
        self.state.write().await.ticket_types.update(id, patch)
    }

    /// Deletes a ticket type. Order items pointing at it are kept.
    pub async fn delete(&self, id: Id) -> bool {
        let removed = self.state.write().await.ticket_types.remove(id);
        debug!(id, removed, "Deleted ticket type");
        removed
    }
}
