//! In-memory mock of the grocery backend.
//!
//! Serves the same REST contract as the real backend (list/create under
//! `/api/{resource}`, fetch/update/delete under `/api/{resource}/{id}`,
//! and `/api/{resource}/count`), backed by per-resource tables in memory.
//! Records are stored in the backend's own field naming (`C_id`, `Lid`,
//! `Purchase_id`, `Order_Id`, nested customer `name`) so a panel pointed
//! here exercises the same fallback chains it would against production.
//!
//! Every success response carries a JSON body, including deletes; the
//! panel's client parses the body of every 2xx response.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

/// The seven resource tables, keyed by URL path segment, each with the id
/// field the real backend stamps onto records of that kind.
const TABLES: [(&str, &str); 7] = [
    ("customers", "C_id"),
    ("products", "P_id"),
    ("suppliers", "S_id"),
    ("employees", "E_id"),
    ("invoices", "Lid"),
    ("purchase-orders", "Purchase_id"),
    ("order-details", "Order_Id"),
];

/// Resolve a request path segment to its static `(segment, id_key)` pair.
fn table_for(segment: &str) -> Option<(&'static str, &'static str)> {
    TABLES.iter().copied().find(|(seg, _)| *seg == segment)
}

fn id_key_for(segment: &str) -> Option<&'static str> {
    table_for(segment).map(|(_, id_key)| id_key)
}

#[derive(Default)]
struct StoreInner {
    next_id: u64,
    tables: HashMap<&'static str, BTreeMap<u64, Value>>,
}

type Store = Arc<RwLock<StoreInner>>;

/// Build the mock backend router with an empty store.
pub fn app() -> Router {
    let store: Store = Arc::new(RwLock::new(StoreInner::default()));
    Router::new()
        .route("/", get(root))
        .route("/api", get(api_root))
        .route("/api/{resource}", get(list).post(create))
        .route("/api/{resource}/count", get(count))
        .route(
            "/api/{resource}/{id}",
            get(fetch).put(update).delete(remove),
        )
        .with_state(store)
}

/// Serve the mock backend on the given listener.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn root() -> Json<Value> {
    Json(json!({"message": "Pantry mock backend is running"}))
}

async fn api_root() -> Json<Value> {
    Json(json!({"message": "Pantry mock API", "resources": TABLES.map(|(seg, _)| seg)}))
}

async fn list(
    State(store): State<Store>,
    Path(resource): Path<String>,
) -> Result<Json<Vec<Value>>, StatusCode> {
    id_key_for(&resource).ok_or(StatusCode::NOT_FOUND)?;
    let store = store.read().await;
    let rows = store
        .tables
        .get(resource.as_str())
        .map(|table| table.values().cloned().collect())
        .unwrap_or_default();
    Ok(Json(rows))
}

async fn count(
    State(store): State<Store>,
    Path(resource): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    id_key_for(&resource).ok_or(StatusCode::NOT_FOUND)?;
    let store = store.read().await;
    let count = store
        .tables
        .get(resource.as_str())
        .map(BTreeMap::len)
        .unwrap_or(0);
    Ok(Json(json!({"count": count})))
}

async fn create(
    State(store): State<Store>,
    Path(resource): Path<String>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    let (segment, id_key) = table_for(&resource).ok_or(StatusCode::NOT_FOUND)?;
    let mut record = match body {
        Value::Object(map) => Value::Object(map),
        _ => return Err(StatusCode::UNPROCESSABLE_ENTITY),
    };

    let mut store = store.write().await;
    store.next_id += 1;
    let id = store.next_id;
    record[id_key] = Value::String(id.to_string());
    store
        .tables
        .entry(segment)
        .or_default()
        .insert(id, record.clone());

    Ok((StatusCode::CREATED, Json(record)))
}

async fn fetch(
    State(store): State<Store>,
    Path((resource, id)): Path<(String, String)>,
) -> Result<Json<Value>, StatusCode> {
    id_key_for(&resource).ok_or(StatusCode::NOT_FOUND)?;
    let id: u64 = id.parse().map_err(|_| StatusCode::NOT_FOUND)?;
    let store = store.read().await;
    store
        .tables
        .get(resource.as_str())
        .and_then(|table| table.get(&id))
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update(
    State(store): State<Store>,
    Path((resource, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let id_key = id_key_for(&resource).ok_or(StatusCode::NOT_FOUND)?;
    let id: u64 = id.parse().map_err(|_| StatusCode::NOT_FOUND)?;
    let mut record = match body {
        Value::Object(map) => Value::Object(map),
        _ => return Err(StatusCode::UNPROCESSABLE_ENTITY),
    };
    record[id_key] = Value::String(id.to_string());

    let mut store = store.write().await;
    let table = store
        .tables
        .get_mut(resource.as_str())
        .ok_or(StatusCode::NOT_FOUND)?;
    let slot = table.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    *slot = record.clone();
    Ok(Json(record))
}

async fn remove(
    State(store): State<Store>,
    Path((resource, id)): Path<(String, String)>,
) -> Result<Json<Value>, StatusCode> {
    id_key_for(&resource).ok_or(StatusCode::NOT_FOUND)?;
    let id: u64 = id.parse().map_err(|_| StatusCode::NOT_FOUND)?;
    let mut store = store.write().await;
    let removed = store
        .tables
        .get_mut(resource.as_str())
        .and_then(|table| table.remove(&id));
    match removed {
        Some(_) => Ok(Json(json!({"message": "deleted successfully"}))),
        None => Err(StatusCode::NOT_FOUND),
    }
}
