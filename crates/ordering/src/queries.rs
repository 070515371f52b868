//! Read-side queries over orders.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shoplite_core::{OrderId, StoreResult};

use crate::order::Order;
use crate::repository::OrderRepository;

/// Request: all orders placed by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetOrdersListQuery {
    pub user_name: String,
}

/// Read-only order projection handed to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdersVm {
    pub id: OrderId,
    pub user_name: String,
    pub total_price: Decimal,
    pub email_address: String,
    pub order_placed: DateTime<Utc>,
}

impl OrdersVm {
    /// Explicit field-by-field projection from the entity.
    pub fn from_order(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            user_name: order.user_name.clone(),
            total_price: order.total_price,
            email_address: order.email_address.clone(),
            order_placed: order.order_placed,
        }
    }
}

/// Handler for [`GetOrdersListQuery`].
///
/// Fetches the user's orders and returns the projection unmodified; store
/// failures propagate to the caller.
pub struct GetOrdersListQueryHandler {
    repository: Arc<dyn OrderRepository>,
}

impl GetOrdersListQueryHandler {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: &GetOrdersListQuery) -> StoreResult<Vec<OrdersVm>> {
        let orders = self
            .repository
            .get_orders_by_user_name(&query.user_name)
            .await?;
        Ok(orders.iter().map(OrdersVm::from_order).collect())
    }
}
