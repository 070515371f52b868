//! Checkout: persist a new order, then notify the buyer.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shoplite_core::{OrderId, StoreResult};

use crate::email::{Email, EmailService};
use crate::order::Order;
use crate::repository::OrderRepository;

/// Request: place an order for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutOrderCommand {
    pub user_name: String,
    pub total_price: Decimal,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub address_line: String,
    pub country: String,
    pub zip_code: String,
}

/// Handler for [`CheckoutOrderCommand`].
///
/// Assigns the order id, persists exactly one order per call, then sends one
/// confirmation email. A refused email does not fail the checkout.
pub struct CheckoutOrderCommandHandler {
    repository: Arc<dyn OrderRepository>,
    email_service: Arc<dyn EmailService>,
}

impl CheckoutOrderCommandHandler {
    pub fn new(repository: Arc<dyn OrderRepository>, email_service: Arc<dyn EmailService>) -> Self {
        Self {
            repository,
            email_service,
        }
    }

    pub async fn handle(&self, command: CheckoutOrderCommand) -> StoreResult<OrderId> {
        let order = Order {
            id: OrderId::generate(),
            user_name: command.user_name,
            total_price: command.total_price,
            first_name: command.first_name,
            last_name: command.last_name,
            email_address: command.email_address,
            address_line: command.address_line,
            country: command.country,
            zip_code: command.zip_code,
            order_placed: Utc::now(),
        };

        self.repository.create_order(&order).await?;
        tracing::info!(order_id = %order.id, user_name = %order.user_name, "order created");

        let email = Email {
            to: order.email_address.clone(),
            subject: "Order Confirmation".to_string(),
            body: format!("Order {} was created.", order.id),
        };
        if !self.email_service.send_email(&email).await {
            tracing::warn!(order_id = %order.id, "order confirmation email was not accepted");
        }

        Ok(order.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryOrderRepository;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records sent emails; refuses them when `accept` is false.
    #[derive(Default)]
    struct RecordingEmailService {
        accept: bool,
        sent: Mutex<Vec<Email>>,
    }

    impl RecordingEmailService {
        fn accepting() -> Self {
            Self {
                accept: true,
                sent: Mutex::new(Vec::new()),
            }
        }

        fn refusing() -> Self {
            Self {
                accept: false,
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl EmailService for RecordingEmailService {
        async fn send_email(&self, email: &Email) -> bool {
            self.sent.lock().unwrap().push(email.clone());
            self.accept
        }
    }

    fn sample_command() -> CheckoutOrderCommand {
        CheckoutOrderCommand {
            user_name: "ada".to_string(),
            total_price: Decimal::new(95000, 2),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email_address: "ada@example.com".to_string(),
            address_line: "1 Analytical Way".to_string(),
            country: "UK".to_string(),
            zip_code: "E1 6AN".to_string(),
        }
    }

    #[tokio::test]
    async fn checkout_persists_one_order_and_sends_one_email() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let email = Arc::new(RecordingEmailService::accepting());
        let handler = CheckoutOrderCommandHandler::new(repo.clone(), email.clone());

        let id = handler.handle(sample_command()).await.unwrap();

        let orders = repo.get_orders_by_user_name("ada").await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, id);
        assert_eq!(orders[0].total_price, Decimal::new(95000, 2));

        let sent = email.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "ada@example.com");
        assert_eq!(sent[0].subject, "Order Confirmation");
    }

    #[tokio::test]
    async fn refused_email_does_not_fail_the_checkout() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let email = Arc::new(RecordingEmailService::refusing());
        let handler = CheckoutOrderCommandHandler::new(repo.clone(), email.clone());

        let id = handler.handle(sample_command()).await.unwrap();

        let orders = repo.get_orders_by_user_name("ada").await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, id);
        assert_eq!(email.sent.lock().unwrap().len(), 1);
    }
}
