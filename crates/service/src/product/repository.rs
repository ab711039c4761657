use async_trait::async_trait;
use models::product::{self, ProductInput};
use sea_orm::DatabaseConnection;
use tokio::sync::RwLock;

use crate::errors::ServiceError;

/// Storage seam for products. `find` reports absence as `None`; callers decide
/// what an absent row means.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<product::Model>, ServiceError>;
    async fn create(&self, input: ProductInput) -> Result<product::Model, ServiceError>;
    async fn find(&self, id: i32) -> Result<Option<product::Model>, ServiceError>;
    async fn update(&self, existing: &product::Model, changes: &ProductInput) -> Result<product::Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn list(&self) -> Result<Vec<product::Model>, ServiceError> {
        Ok(product::list(&self.db).await?)
    }

    async fn create(&self, input: ProductInput) -> Result<product::Model, ServiceError> {
        Ok(product::create(&self.db, input).await?)
    }

    async fn find(&self, id: i32) -> Result<Option<product::Model>, ServiceError> {
        Ok(product::find(&self.db, id).await?)
    }

    async fn update(&self, existing: &product::Model, changes: &ProductInput) -> Result<product::Model, ServiceError> {
        Ok(product::update_partial(&self.db, existing, changes).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(product::delete(&self.db, id).await?)
    }
}

#[derive(Default)]
struct MemoryRows {
    last_id: i32,
    rows: Vec<product::Model>,
}

/// Volatile repository with serial ids; nothing survives the process.
#[derive(Default)]
pub struct MemoryProductRepository {
    inner: RwLock<MemoryRows>,
}

impl MemoryProductRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn list(&self) -> Result<Vec<product::Model>, ServiceError> {
        Ok(self.inner.read().await.rows.clone())
    }

    async fn create(&self, input: ProductInput) -> Result<product::Model, ServiceError> {
        let mut state = self.inner.write().await;
        state.last_id += 1;
        let row = product::Model { id: state.last_id, code: input.code, name: input.name, price: input.price };
        state.rows.push(row.clone());
        Ok(row)
    }

    async fn find(&self, id: i32) -> Result<Option<product::Model>, ServiceError> {
        Ok(self.inner.read().await.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn update(&self, existing: &product::Model, changes: &ProductInput) -> Result<product::Model, ServiceError> {
        let mut state = self.inner.write().await;
        let row = state
            .rows
            .iter_mut()
            .find(|p| p.id == existing.id)
            .ok_or_else(|| ServiceError::NotFound("product"))?;
        changes.merge_into(row);
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let mut state = self.inner.write().await;
        let before = state.rows.len();
        state.rows.retain(|p| p.id != id);
        Ok(state.rows.len() != before)
    }
}
