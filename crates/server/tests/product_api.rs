use std::net::SocketAddr;
use std::sync::Arc;

use configs::BodyPolicy;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use server::routes::{self, products::ProductState};
use service::product::{MemoryProductRepository, ProductService};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

struct TestApp {
    base_url: String,
    products: ProductService,
}

async fn start_server(body_policy: BodyPolicy) -> anyhow::Result<TestApp> {
    let products = ProductService::new(Arc::new(MemoryProductRepository::new()));
    let state = ProductState { products: products.clone(), body_policy };
    let app = routes::build_product_router(state, CorsLayer::very_permissive());

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url: format!("http://{}", addr), products })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

async fn create(app: &TestApp, body: Value) -> anyhow::Result<Value> {
    let res = client().post(format!("{}/api/products", app.base_url)).json(&body).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(res.json().await?)
}

#[tokio::test]
async fn home_says_welcome() -> anyhow::Result<()> {
    let app = start_server(BodyPolicy::Lenient).await?;
    let res = client().get(format!("{}/", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.text().await?, "Welcome");
    Ok(())
}

#[tokio::test]
async fn create_then_get_round_trip() -> anyhow::Result<()> {
    let app = start_server(BodyPolicy::Lenient).await?;
    let created = create(&app, json!({"code": "A1", "name": "Apple", "price": "1.25"})).await?;
    assert_eq!(created["code"], 200);
    assert_eq!(created["message"], "Success create product");
    let id = created["data"]["id"].as_i64().expect("store-assigned id");

    let res = client().get(format!("{}/api/products/{}", app.base_url, id)).send().await?;
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Success get products");
    assert_eq!(body["data"]["code"], "A1");
    assert_eq!(body["data"]["name"], "Apple");
    assert_eq!(body["data"]["price"], "1.25");
    Ok(())
}

#[tokio::test]
async fn list_wraps_all_rows() -> anyhow::Result<()> {
    let app = start_server(BodyPolicy::Lenient).await?;
    create(&app, json!({"code": "A", "name": "a", "price": 1})).await?;
    create(&app, json!({"code": "B", "name": "b", "price": 2})).await?;

    let res = client().get(format!("{}/api/products", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["code"], 200);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[tokio::test]
async fn unknown_or_non_numeric_id_yields_zero_record() -> anyhow::Result<()> {
    let app = start_server(BodyPolicy::Lenient).await?;
    for id in ["77", "abc"] {
        let res = client().get(format!("{}/api/products/{}", app.base_url, id)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::OK);
        let body: Value = res.json().await?;
        assert_eq!(body["data"], json!({"id": 0, "code": "", "name": "", "price": "0"}));
    }
    Ok(())
}

#[tokio::test]
async fn update_returns_record_read_before_merge() -> anyhow::Result<()> {
    let app = start_server(BodyPolicy::Lenient).await?;
    let created = create(&app, json!({"code": "A1", "name": "Apple", "price": "1.25"})).await?;
    let id = created["data"]["id"].as_i64().unwrap();

    let res = client()
        .put(format!("{}/api/products/{}", app.base_url, id))
        .json(&json!({"name": "Green Apple"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Success create product");
    assert_eq!(body["data"]["name"], "Apple");

    let stored = app.products.get(id as i32).await;
    assert_eq!(stored.name, "Green Apple");
    assert_eq!(stored.code, "A1");
    Ok(())
}

#[tokio::test]
async fn update_with_null_price_and_cased_keys_keeps_other_columns() -> anyhow::Result<()> {
    let app = start_server(BodyPolicy::Strict).await?;
    let created = create(&app, json!({"code": "A1", "name": "Apple", "price": "1.25"})).await?;
    let id = created["data"]["id"].as_i64().unwrap();

    let res = client()
        .put(format!("{}/api/products/{}", app.base_url, id))
        .body(r#"{"Code": "A2", "price": null}"#)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let stored = app.products.get(id as i32).await;
    assert_eq!(stored.code, "A2");
    assert_eq!(stored.name, "Apple");
    assert_eq!(stored.price.to_string(), "1.25");
    Ok(())
}

#[tokio::test]
async fn delete_always_succeeds() -> anyhow::Result<()> {
    let app = start_server(BodyPolicy::Lenient).await?;
    let created = create(&app, json!({"code": "D", "name": "Doomed", "price": 3})).await?;
    let id = created["data"]["id"].as_i64().unwrap();

    for target in [id.to_string(), "9999".to_string()] {
        let res = client().delete(format!("{}/api/products/{}", app.base_url, target)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::OK);
        let body: Value = res.json().await?;
        assert_eq!(body, json!({"code": 200, "data": null, "message": "Success delete product"}));
    }
    assert!(app.products.list().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn malformed_create_inserts_zero_record_when_lenient() -> anyhow::Result<()> {
    let app = start_server(BodyPolicy::Lenient).await?;
    let res = client().post(format!("{}/api/products", app.base_url)).body("{{{").send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["code"], "");
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(app.products.list().await.len(), 1);
    Ok(())
}

#[tokio::test]
async fn malformed_body_rejected_when_strict() -> anyhow::Result<()> {
    let app = start_server(BodyPolicy::Strict).await?;
    let res = client().post(format!("{}/api/products", app.base_url)).body("{{{").send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert!(app.products.list().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn openapi_document_is_served() -> anyhow::Result<()> {
    let app = start_server(BodyPolicy::Lenient).await?;
    let res = client().get(format!("{}/api-docs/openapi.json", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let doc: Value = res.json().await?;
    assert!(doc["paths"]["/api/products"].is_object());
    Ok(())
}
