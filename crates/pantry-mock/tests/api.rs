//! In-process tests of the mock backend router.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn unknown_resources_are_not_found() {
    let app = pantry_mock::app();
    let (status, _) = send(&app, "GET", "/api/inventory", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "GET", "/api/inventory/count", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "GET", "/api/inventory/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_stamps_the_backend_id_key() {
    let app = pantry_mock::app();

    let (status, product) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({"name": "Milk", "category": "Dairy", "stock": 10, "price": 3.5})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(product["P_id"], "1");
    assert_eq!(product["name"], "Milk");

    let (status, invoice) = send(
        &app,
        "POST",
        "/api/invoices",
        Some(json!({"date": "2024-05-01", "amount": 20.0, "paymentMethod": "card"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    // Ids are serial across the whole store, stamped under each kind's key.
    assert_eq!(invoice["Lid"], "2");

    let (_, po) = send(
        &app,
        "POST",
        "/api/purchase-orders",
        Some(json!({"date": "2024-05-02", "amount": 120.0})),
    )
    .await;
    assert_eq!(po["Purchase_id"], "3");
}

#[tokio::test]
async fn counts_are_per_resource() {
    let app = pantry_mock::app();

    for name in ["Milk", "Bread"] {
        send(
            &app,
            "POST",
            "/api/products",
            Some(json!({"name": name, "category": "x", "stock": 1, "price": 1.0})),
        )
        .await;
    }

    let (status, body) = send(&app, "GET", "/api/products/count", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"count": 2}));

    let (_, body) = send(&app, "GET", "/api/customers/count", None).await;
    assert_eq!(body, json!({"count": 0}));
}

#[tokio::test]
async fn fetch_update_delete_lifecycle() {
    let app = pantry_mock::app();

    let (_, created) = send(
        &app,
        "POST",
        "/api/employees",
        Some(json!({"name": "Sam", "role": "Cashier", "phone": ["555-1111"]})),
    )
    .await;
    let id = created["E_id"].as_str().unwrap().to_string();

    let (status, fetched) = send(&app, "GET", &format!("/api/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/employees/{id}"),
        Some(json!({"name": "Sam", "role": "Manager", "phone": ["555-1111"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["role"], "Manager");
    // The id key survives a full-body replace.
    assert_eq!(updated["E_id"], id);

    let (status, body) = send(&app, "DELETE", &format!("/api/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    // Deletes answer with a JSON body; clients parse every 2xx body.
    assert!(body["message"].is_string());

    let (status, _) = send(&app, "GET", &format!("/api/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &format!("/api/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn customers_keep_their_nested_name() {
    let app = pantry_mock::app();

    let (_, created) = send(
        &app,
        "POST",
        "/api/customers",
        Some(json!({
            "name": {"firstName": "Ada", "secondName": "Lovelace"},
            "email": "ada@example.com",
            "phone": ["555-1111", "555-2222"],
            "address": "12 Analytical St"
        })),
    )
    .await;

    assert_eq!(created["C_id"], "1");
    assert_eq!(created["name"]["firstName"], "Ada");

    let (_, rows) = send(&app, "GET", "/api/customers", None).await;
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["name"]["secondName"], "Lovelace");
}

#[tokio::test]
async fn info_routes_answer() {
    let app = pantry_mock::app();
    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (status, body) = send(&app, "GET", "/api", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resources"].as_array().unwrap().len(), 7);
}
