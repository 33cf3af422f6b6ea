//! `LarekClient` against a stub Larek API.
//!
//! The stub is an `axum` router bound to an ephemeral port on localhost, so
//! these tests need no network access.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use larek_core::{Category, Order, PaymentMethod, Price, ProductId};
use larek_storefront::{LarekApi, LarekClient, NetworkError, StorefrontConfig};
use serde_json::{Value, json};

const CDN: &str = "https://cdn.larek.example/content/weblarek";

fn product_json(id: &str, price: Value) -> Value {
    json!({
        "id": id,
        "description": "Если планируете решать задачи в тренажёре, берите два.",
        "image": format!("/{id}.svg"),
        "title": format!("Товар {id}"),
        "category": "софт-скил",
        "price": price,
    })
}

async fn product_list() -> Json<Value> {
    Json(json!({
        "total": 2,
        "items": [product_json("a", json!(100)), product_json("b", Value::Null)],
    }))
}

async fn product_item(Path(id): Path<String>) -> Response {
    if id == "a" {
        Json(product_json("a", json!(100))).into_response()
    } else {
        (StatusCode::NOT_FOUND, Json(json!({ "error": "NotFound" }))).into_response()
    }
}

async fn order(Json(body): Json<Value>) -> Response {
    let expected = json!({
        "payment": "Онлайн",
        "email": "a@b.c",
        "phone": "+7 900 000 00 00",
        "address": "Москва",
        "total": 100,
        "items": ["a"],
    });
    if body == expected {
        Json(json!({ "id": "28c57cb4", "total": 100 })).into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Неверная сумма заказа" })),
        )
            .into_response()
    }
}

async fn mixed_categories() -> Json<Value> {
    let mut novelty = product_json("n", json!(5));
    novelty["category"] = json!("новинка");
    Json(json!({ "total": 2, "items": [product_json("a", json!(100)), novelty] }))
}

async fn bad_gateway() -> Response {
    (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").into_response()
}

async fn garbled() -> &'static str {
    "{\"items\": 42}"
}

/// Start the stub and return its origin.
async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/api/weblarek/product", get(product_list))
        .route("/api/weblarek/product/{id}", get(product_item))
        .route("/api/weblarek/order", post(order))
        .route("/api/mixed/product", get(mixed_categories))
        .route("/api/broken/product", get(bad_gateway))
        .route("/api/garbled/product", get(garbled));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(origin: &str, api_path: &str) -> LarekClient {
    LarekClient::new(&StorefrontConfig::new(format!("{origin}{api_path}"), CDN))
}

fn order_draft(total: u64) -> Order {
    Order {
        payment: Some(PaymentMethod::Online),
        email: "a@b.c".to_string(),
        phone: "+7 900 000 00 00".to_string(),
        address: "Москва".to_string(),
        total: Price::from_units(total),
        items: vec![ProductId::new("a")],
    }
}

#[tokio::test]
async fn test_product_list_prefixes_images() {
    let origin = spawn_stub().await;
    let products = client(&origin, "/api/weblarek")
        .get_product_list()
        .await
        .unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].image, format!("{CDN}/a.svg"));
    assert_eq!(products[0].category, Category::SoftSkill);
    assert_eq!(products[0].price, Some(Price::from_units(100)));
    assert_eq!(products[1].price, None);
    assert!(!products[1].is_purchasable());
}

#[tokio::test]
async fn test_unknown_category_does_not_drop_catalog() {
    let origin = spawn_stub().await;
    let products = client(&origin, "/api/mixed")
        .get_product_list()
        .await
        .unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].category, Category::SoftSkill);
    assert_eq!(products[1].category, Category::Unknown("новинка".to_string()));
    assert_eq!(products[1].category.label(), "новинка");
}

#[tokio::test]
async fn test_product_item() {
    let origin = spawn_stub().await;
    let api = client(&origin, "/api/weblarek");

    let product = api.get_product_item(&ProductId::new("a")).await.unwrap();
    assert_eq!(product.title, "Товар a");
    assert_eq!(product.image, format!("{CDN}/a.svg"));

    let err = api
        .get_product_item(&ProductId::new("missing"))
        .await
        .unwrap_err();
    assert!(
        matches!(&err, NetworkError::Api { status: 404, message } if message == "NotFound"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_order_products() {
    let origin = spawn_stub().await;
    let api = client(&origin, "/api/weblarek");

    let result = api.order_products(&order_draft(100)).await.unwrap();
    assert_eq!(result.id.as_str(), "28c57cb4");
    assert_eq!(result.total, Price::from_units(100));

    let err = api.order_products(&order_draft(99)).await.unwrap_err();
    assert_eq!(err.to_string(), "API error: 400 - Неверная сумма заказа");
}

#[tokio::test]
async fn test_error_without_body_message_uses_status_reason() {
    let origin = spawn_stub().await;
    let err = client(&origin, "/api/broken")
        .get_product_list()
        .await
        .unwrap_err();
    assert!(
        matches!(&err, NetworkError::Api { status: 502, message } if message == "Bad Gateway"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_undecodable_body() {
    let origin = spawn_stub().await;
    let err = client(&origin, "/api/garbled")
        .get_product_list()
        .await
        .unwrap_err();
    assert!(matches!(err, NetworkError::Parse(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_transport_failure() {
    // Reserve a port, then free it so nothing listens there
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let err = client(&format!("http://{addr}"), "/api/weblarek")
        .get_product_list()
        .await
        .unwrap_err();
    assert!(matches!(err, NetworkError::Http(_)), "unexpected error: {err:?}");
}
