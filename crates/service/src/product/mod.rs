//! Product catalog backed by the `products` table.

pub mod repository;
pub mod service;

pub use repository::{MemoryProductRepository, ProductRepository, SeaOrmProductRepository};
pub use service::ProductService;
