//! `shoplite-catalog` — product catalog domain.
//!
//! `Product` entity, the `ProductRepository` abstraction the HTTP layer talks
//! to, and the in-memory repository used for dev/test wiring.

pub mod product;
pub mod repository;
pub mod seed;

pub use product::Product;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use seed::demo_catalog;
