use axum::Json;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct ProductDoc {
    pub id: i32,
    pub code: String,
    pub name: String,
    /// Decimal encoded as a string, e.g. `"12.50"`
    pub price: String,
}

/// Create/update payload; absent fields are zero values and never overwrite on update.
#[derive(ToSchema)]
pub struct ProductInputDoc {
    pub code: Option<String>,
    pub name: Option<String>,
    pub price: Option<String>,
}

#[derive(ToSchema)]
pub struct EnvelopeDoc {
    pub code: u16,
    pub data: Option<ProductDoc>,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::products::list_products,
        crate::routes::products::create_product,
        crate::routes::products::get_product,
        crate::routes::products::update_product,
        crate::routes::products::delete_product,
    ),
    components(schemas(ProductDoc, ProductInputDoc, EnvelopeDoc)),
    tags((name = "products", description = "Product catalog CRUD"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
