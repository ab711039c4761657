use axum::{
    body::Bytes,
    extract::{Path, State},
};
use configs::BodyPolicy;
use models::product::{self, ProductInput};
use service::product::ProductService;

use crate::{body, errors::JsonApiError, responses::Envelope};

// Wording is part of the public contract; update intentionally reuses the create message.
const MSG_CREATED: &str = "Success create product";
const MSG_FETCHED: &str = "Success get products";
const MSG_UPDATED: &str = "Success create product";
const MSG_DELETED: &str = "Success delete product";

#[derive(Clone)]
pub struct ProductState {
    pub products: ProductService,
    pub body_policy: BodyPolicy,
}

/// Path ids that are not integers address no row.
fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

pub async fn home() -> &'static str {
    "Welcome"
}

#[utoipa::path(
    get, path = "/api/products", tag = "products",
    responses((status = 200, description = "Envelope with every product"))
)]
pub async fn list_products(State(state): State<ProductState>) -> Envelope<Vec<product::Model>> {
    Envelope::ok(state.products.list().await, MSG_FETCHED)
}

#[utoipa::path(
    post, path = "/api/products", tag = "products",
    request_body = crate::openapi::ProductInputDoc,
    responses(
        (status = 200, description = "Envelope with the inserted product"),
        (status = 400, description = "Malformed body (strict policy only)")
    )
)]
pub async fn create_product(
    State(state): State<ProductState>,
    raw: Bytes,
) -> Result<Envelope<product::Model>, JsonApiError> {
    let input: ProductInput = body::decode_or_default(state.body_policy, &raw)?;
    let created = state.products.create(input).await;
    Ok(Envelope::ok(created, MSG_CREATED))
}

#[utoipa::path(
    get, path = "/api/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses((status = 200, description = "Envelope with the product, zero-valued when absent"))
)]
pub async fn get_product(State(state): State<ProductState>, Path(raw_id): Path<String>) -> Envelope<product::Model> {
    let found = match parse_id(&raw_id) {
        Some(id) => state.products.get(id).await,
        None => product::Model::default(),
    };
    Envelope::ok(found, MSG_FETCHED)
}

#[utoipa::path(
    put, path = "/api/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = crate::openapi::ProductInputDoc,
    responses(
        (status = 200, description = "Envelope with the product as read before the update"),
        (status = 400, description = "Malformed body (strict policy only)")
    )
)]
pub async fn update_product(
    State(state): State<ProductState>,
    Path(raw_id): Path<String>,
    raw: Bytes,
) -> Result<Envelope<product::Model>, JsonApiError> {
    let changes: ProductInput = body::decode_or_default(state.body_policy, &raw)?;
    let before = match parse_id(&raw_id) {
        Some(id) => state.products.update(id, changes).await,
        None => product::Model::default(),
    };
    Ok(Envelope::ok(before, MSG_UPDATED))
}

#[utoipa::path(
    delete, path = "/api/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses((status = 200, description = "Envelope with message only, whether or not the row existed"))
)]
pub async fn delete_product(State(state): State<ProductState>, Path(raw_id): Path<String>) -> Envelope<()> {
    if let Some(id) = parse_id(&raw_id) {
        state.products.delete(id).await;
    }
    Envelope::message_only(MSG_DELETED)
}
