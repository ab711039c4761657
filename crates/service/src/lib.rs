//! Service layer sitting between the HTTP handlers and the stores.
//! - `todo`: the process-owned, lock-guarded todo collection.
//! - `product`: repository abstraction over the `products` table and the
//!   best-effort service the product API is built on.

pub mod errors;
pub mod todo;
pub mod product;
#[cfg(test)]
pub mod test_support;
