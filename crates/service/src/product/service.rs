use std::sync::Arc;

use models::product::{self, ProductInput};
use tracing::{error, info, instrument};

use crate::product::repository::ProductRepository;

/// Best-effort product operations.
///
/// Store failures never surface to the caller: they are logged and replaced by
/// the value an empty store would have produced (no rows, or the zero-valued record).
#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Vec<product::Model> {
        match self.repo.list().await {
            Ok(list) => {
                info!(count = list.len(), "list products");
                list
            }
            Err(e) => {
                error!(err = %e, "list products failed");
                Vec::new()
            }
        }
    }

    /// Insert a new row. If the insert fails the unsaved record (id 0) is returned.
    #[instrument(skip(self, input), fields(code = %input.code))]
    pub async fn create(&self, input: ProductInput) -> product::Model {
        match self.repo.create(input.clone()).await {
            Ok(m) => {
                info!(id = m.id, "created product");
                m
            }
            Err(e) => {
                error!(err = %e, "create product failed");
                product::Model { id: 0, code: input.code, name: input.name, price: input.price }
            }
        }
    }

    /// Raw lookup: `None` when no row carries `id`.
    pub async fn lookup(&self, id: i32) -> Option<product::Model> {
        match self.repo.find(id).await {
            Ok(found) => found,
            Err(e) => {
                error!(id, err = %e, "find product failed");
                None
            }
        }
    }

    /// Fetch by id. A miss yields the zero-valued record rather than an error;
    /// clients of this API have always received `{"id":0,...}` for unknown ids.
    pub async fn get(&self, id: i32) -> product::Model {
        self.lookup(id).await.unwrap_or_default()
    }

    /// Merge the non-zero fields of `changes` into the stored row.
    ///
    /// Returns the row as it was read *before* the merge. Nothing is written when
    /// the row is absent or `changes` carries no non-zero field.
    #[instrument(skip(self, changes))]
    pub async fn update(&self, id: i32, changes: ProductInput) -> product::Model {
        let Some(existing) = self.lookup(id).await else {
            return product::Model::default();
        };
        if !changes.is_noop() {
            match self.repo.update(&existing, &changes).await {
                Ok(_) => info!(id, "updated product"),
                Err(e) => error!(id, err = %e, "update product failed"),
            }
        }
        existing
    }

    /// Delete by id. The delete is only issued for a row that was found;
    /// either way the caller sees success.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) {
        if self.lookup(id).await.is_none() {
            return;
        }
        match self.repo.delete(id).await {
            Ok(removed) => info!(id, removed, "deleted product"),
            Err(e) => error!(id, err = %e, "delete product failed"),
        }
    }
}
