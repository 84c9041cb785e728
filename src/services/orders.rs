//! Order service
//!
//! Orders are searchable by id, customer name, and customer email, and
//! sortable on any visible column. After creation only the status may change.

use crate::core::entity::IdSequence;
use crate::core::error::{AdminError, AdminResult};
use crate::core::query::{ListQuery, PageResponse, run_query};
use crate::entities::{Order, OrderDraft, OrderStatus};
use crate::storage::EntityStore;
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

/// Service over the order store
#[derive(Clone)]
pub struct OrderService {
    orders: Arc<dyn EntityStore<Order>>,
    order_numbers: Arc<IdSequence>,
}

impl OrderService {
    pub fn new(orders: Arc<dyn EntityStore<Order>>, order_numbers: Arc<IdSequence>) -> Self {
        OrderService {
            orders,
            order_numbers,
        }
    }

    /// List orders: search → sort → paginate
    pub async fn list_orders(&self, query: &ListQuery) -> AdminResult<PageResponse<Order>> {
        Ok(run_query(self.orders.list().await?, query))
    }

    /// Fetch a single order
    pub async fn get_order(&self, id: &str) -> AdminResult<Order> {
        self.orders
            .get(&id.to_string())
            .await?
            .ok_or_else(|| AdminError::not_found("Order", id))
    }

    /// Record a new order; the id and total are assigned here
    pub async fn create_order(&self, draft: OrderDraft) -> AdminResult<Order> {
        draft.validate()?;
        let id = format!("ORD-{}", self.order_numbers.next_id());
        let order = draft.into_order(id, Utc::now());
        debug!(id = %order.id, total = order.total_amount, "recording order");
        self.orders.insert(order).await
    }

    /// Move an order to a new status; every other field is immutable
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> AdminResult<Order> {
        let mut order = self.get_order(id).await?;
        debug!(id = %order.id, from = order.status.as_str(), to = status.as_str(), "updating order status");
        order.status = status;
        self.orders.update(&id.to_string(), order).await
    }
}
