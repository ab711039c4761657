pub mod errors;
pub mod db;
pub mod product;
pub mod todo;
pub mod wire;

#[cfg(test)]
mod tests;
