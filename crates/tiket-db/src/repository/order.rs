//! # Order Repository
//!
//! Orders and their line items.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Order Creation                                  │
//! │                                                                         │
//! │  1. orders().insert(NewOrder { user_id, status })                      │
//! │        │  order_date = now, status defaults to "completed"             │
//! │        ▼                                                                │
//! │  2. order_items().insert(NewOrderItem { order_id, ticket_type_id, .. })│
//! │        │  one call per ticket line                                      │
//! │        ▼                                                                │
//! │  3. orders().by_user(user_id) for the account page                     │
//! │     order_items().by_order(order_id) for the receipt                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Orders and items have no update or delete. Stock (`quantity` on the
//! ticket type) is not decremented here.

use chrono::Utc;
use tracing::debug;

use tiket_core::{Id, NewOrder, NewOrderItem, Order, OrderItem};

use crate::store::SharedState;

// =============================================================================
// Orders
// =============================================================================

/// Repository for order operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    state: SharedState,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub(crate) fn new(state: SharedState) -> Self {
        OrderRepository { state }
    }

    /// Gets an order by ID.
    pub async fn get_by_id(&self, id: Id) -> Option<Order> {
        self.state.read().await.orders.get(id)
    }

    /// Lists all orders in creation order.
    pub async fn list(&self) -> Vec<Order> {
        self.state.read().await.orders.all()
    }

    /// Orders placed by one user, oldest first.
    pub async fn by_user(&self, user_id: Id) -> Vec<Order> {
        self.state
            .read()
            .await
            .orders
            .filter(|o| o.user_id == user_id)
    }

    /// Creates an order stamped with the current time.
    pub async fn insert(&self, new: NewOrder) -> Order {
        let order_date = Utc::now();
        let mut state = self.state.write().await;
        let order = state.orders.insert_with(|id| new.into_record(id, order_date));
        debug!(
            id = order.id,
            user_id = order.user_id,
            status = %order.status,
            "Inserted order"
        );
        order
    }
}

// =============================================================================
// Order Items
// =============================================================================

/// Repository for order line items.
#[derive(Debug, Clone)]
pub struct OrderItemRepository {
    state: SharedState,
}

impl OrderItemRepository {
    /// Creates a new OrderItemRepository.
    pub(crate) fn new(state: SharedState) -> Self {
        OrderItemRepository { state }
    }

    /// Gets an order item by ID.
    pub async fn get_by_id(&self, id: Id) -> Option<OrderItem> {
        self.state.read().await.order_items.get(id)
    }

    /// Lists all order items in creation order.
    pub async fn list(&self) -> Vec<OrderItem> {
        self.state.read().await.order_items.all()
    }

    /// Items of one order, in creation order.
    pub async fn by_order(&self, order_id: Id) -> Vec<OrderItem> {
        self.state
            .read()
            .await
            .order_items
            .filter(|i| i.order_id == order_id)
    }

    /// Adds a line item. Neither the order nor the ticket type is checked.
    pub async fn insert(&self, new: NewOrderItem) -> OrderItem {
        let mut state = self.state.write().await;
        let item = state.order_items.insert_with(|id| new.into_record(id));
        debug!(
            id = item.id,
            order_id = item.order_id,
            ticket_type_id = item.ticket_type_id,
            quantity = item.quantity,
            "Inserted order item"
        );
        item
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
