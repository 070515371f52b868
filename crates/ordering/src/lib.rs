//! `shoplite-ordering` — order domain.
//!
//! The `Order` entity and its repository abstraction, the orders-by-user query
//! handler with its `OrdersVm` projection, the checkout command handler, and
//! the email-notification contract.

pub mod checkout;
pub mod email;
pub mod order;
pub mod queries;
pub mod repository;

pub use checkout::{CheckoutOrderCommand, CheckoutOrderCommandHandler};
pub use email::{Email, EmailService, TracingEmailService};
pub use order::Order;
pub use queries::{GetOrdersListQuery, GetOrdersListQueryHandler, OrdersVm};
pub use repository::{InMemoryOrderRepository, OrderRepository};
