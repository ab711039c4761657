pub mod products;
pub mod todos;

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use self::{products::ProductState, todos::TodoState};

/// Router for the in-memory todo API.
pub fn build_todo_router(state: TodoState, cors: CorsLayer) -> Router {
    let router = Router::new()
        .route("/todos", get(todos::list_todos).post(todos::add_todo))
        .route("/todos/:id", get(todos::get_todo).patch(todos::toggle_todo_status))
        .with_state(state);
    with_http_layers(router, cors)
}

/// Router for the database-backed product API.
pub fn build_product_router(state: ProductState, cors: CorsLayer) -> Router {
    let router = Router::new()
        .route("/", any(products::home))
        .route("/api/products", get(products::list_products).post(products::create_product))
        .route(
            "/api/products/:id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route("/api-docs/openapi.json", get(crate::openapi::openapi_json))
        .with_state(state);
    with_http_layers(router, cors)
}

fn with_http_layers(router: Router, cors: CorsLayer) -> Router {
    router.layer(cors).layer(
        TraceLayer::new_for_http()
            // one INFO span per request
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            // status and latency on response
            .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
            // 5xx at ERROR
            .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
    )
}
