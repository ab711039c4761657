use rust_decimal::Decimal;
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::wire::null_as_default;

/// A row of `products`. `Default` is the zero-valued record returned for lookups that miss.
#[derive(Clone, Debug, Default, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub code: String,
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Client payload for create and update. Every field is optional on the wire;
/// absent or `null` ones decode to zero values and any `id` is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductInput {
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: Decimal,
}

impl ProductInput {
    /// True when no field would overwrite a column in a partial update.
    pub fn is_noop(&self) -> bool {
        self.code.is_empty() && self.name.is_empty() && self.price.is_zero()
    }

    /// Copy every non-zero field onto `model`.
    pub fn merge_into(&self, model: &mut Model) {
        if !self.code.is_empty() {
            model.code = self.code.clone();
        }
        if !self.name.is_empty() {
            model.name = self.name.clone();
        }
        if !self.price.is_zero() {
            model.price = self.price;
        }
    }

    /// Same rule as [`merge_into`](Self::merge_into), expressed as changed columns.
    pub fn apply(&self, am: &mut ActiveModel) {
        if !self.code.is_empty() {
            am.code = Set(self.code.clone());
        }
        if !self.name.is_empty() {
            am.name = Set(self.name.clone());
        }
        if !self.price.is_zero() {
            am.price = Set(self.price);
        }
    }

    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            code: Set(self.code),
            name: Set(self.name),
            price: Set(self.price),
        }
    }
}

pub async fn create(db: &DatabaseConnection, input: ProductInput) -> Result<Model, ModelError> {
    input.into_active_model().insert(db).await.map_err(ModelError::from)
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find().all(db).await.map_err(ModelError::from)
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(ModelError::from)
}

/// Write the non-zero fields of `input` onto the row identified by `existing`.
pub async fn update_partial(
    db: &DatabaseConnection,
    existing: &Model,
    input: &ProductInput,
) -> Result<Model, ModelError> {
    let mut am: ActiveModel = existing.clone().into();
    input.apply(&mut am);
    am.update(db).await.map_err(ModelError::from)
}

/// Returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
