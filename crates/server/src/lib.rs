pub mod body;
pub mod errors;
pub mod launch;
pub mod openapi;
pub mod responses;
pub mod routes;
pub mod startup;

pub use startup::{run_product, run_todo, serve_product, serve_todo};
