use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shoplite_core::{Entity, OrderId};

/// A placed order.
///
/// Orders are looked up by `user_name`; the list projection handed to readers
/// is [`crate::queries::OrdersVm`], not this entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_name: String,
    pub total_price: Decimal,

    // Buyer
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,

    // Shipping
    pub address_line: String,
    pub country: String,
    pub zip_code: String,

    pub order_placed: DateTime<Utc>,
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
