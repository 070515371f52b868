use rust_decimal::Decimal;
use serde::Deserialize;

use shoplite_catalog::Product;
use shoplite_ordering::{CheckoutOrderCommand, OrdersVm};

// -------------------------
// Request DTOs
// -------------------------

/// Create request: the store assigns the id.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub category: String,
    pub summary: String,
    pub description: String,
    pub image_file: String,
    pub price: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutOrderRequest {
    pub user_name: String,
    pub total_price: Decimal,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub address_line: String,
    pub country: String,
    pub zip_code: String,
}

impl CheckoutOrderRequest {
    pub fn into_command(self) -> CheckoutOrderCommand {
        CheckoutOrderCommand {
            user_name: self.user_name,
            total_price: self.total_price,
            first_name: self.first_name,
            last_name: self.last_name,
            email_address: self.email_address,
            address_line: self.address_line,
            country: self.country,
            zip_code: self.zip_code,
        }
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(p: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": p.id.as_str(),
        "name": p.name,
        "category": p.category,
        "summary": p.summary,
        "description": p.description,
        "image_file": p.image_file,
        "price": p.price,
    })
}

pub fn orders_vm_to_json(vm: &OrdersVm) -> serde_json::Value {
    serde_json::json!({
        "id": vm.id.as_str(),
        "user_name": vm.user_name,
        "total_price": vm.total_price,
        "email_address": vm.email_address,
        "order_placed": vm.order_placed.to_rfc3339(),
    })
}
