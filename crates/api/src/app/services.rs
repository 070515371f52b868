use std::sync::Arc;

use shoplite_catalog::{demo_catalog, InMemoryProductRepository, ProductRepository};
use shoplite_ordering::{
    CheckoutOrderCommandHandler, EmailService, GetOrdersListQueryHandler, InMemoryOrderRepository,
    OrderRepository, TracingEmailService,
};

use crate::app::AppConfig;

/// Constructor-supplied collaborators shared by every request handler.
pub struct AppServices {
    pub products: Arc<dyn ProductRepository>,
    pub orders_query: GetOrdersListQueryHandler,
    pub checkout: CheckoutOrderCommandHandler,
}

impl AppServices {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        orders: Arc<dyn OrderRepository>,
        email: Arc<dyn EmailService>,
    ) -> Self {
        Self {
            products,
            orders_query: GetOrdersListQueryHandler::new(orders.clone()),
            checkout: CheckoutOrderCommandHandler::new(orders, email),
        }
    }
}

/// In-memory wiring (dev/test): repositories + tracing email transport.
pub fn build_services(config: AppConfig) -> AppServices {
    let products: Arc<dyn ProductRepository> = if config.seed_demo_data {
        tracing::info!("seeding demo catalog");
        Arc::new(InMemoryProductRepository::with_products(demo_catalog()))
    } else {
        Arc::new(InMemoryProductRepository::new())
    };

    AppServices::new(
        products,
        Arc::new(InMemoryOrderRepository::new()),
        Arc::new(TracingEmailService::new()),
    )
}
