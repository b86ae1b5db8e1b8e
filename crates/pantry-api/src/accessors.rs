//! Per-resource CRUD accessors.
//!
//! One [`ResourceClient`] per kind, each a thin dispatch over the shared
//! [`HttpClient`] and [`Endpoints`] table. The [`Accessors`] bundle is
//! built once at startup from the configuration and passed explicitly to
//! the panel; there is no shared global client state.

use pantry_core::config::ApiConfig;
use pantry_core::{Envelope, ResourceKind};
use serde_json::Value;

use crate::client::HttpClient;
use crate::endpoints::Endpoints;
use crate::error::ClientError;

/// The six operations for one resource kind. No retries, no request
/// deduplication, no optimistic concurrency.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    kind: ResourceKind,
    http: HttpClient,
    endpoints: Endpoints,
}

impl ResourceClient {
    pub fn new(kind: ResourceKind, http: HttpClient, endpoints: Endpoints) -> Self {
        Self {
            kind,
            http,
            endpoints,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Fetch the whole collection.
    pub async fn get_all(&self) -> Envelope {
        self.http.get(&self.endpoints.collection(self.kind)).await
    }

    /// Fetch a single record by id.
    pub async fn get_by_id(&self, id: &str) -> Envelope {
        self.http.get(&self.endpoints.detail(self.kind, id)).await
    }

    /// Create a record from a JSON body.
    pub async fn create(&self, body: &Value) -> Envelope {
        self.http
            .post(&self.endpoints.collection(self.kind), body)
            .await
    }

    /// Replace the record with the given id.
    pub async fn update(&self, id: &str, body: &Value) -> Envelope {
        self.http
            .put(&self.endpoints.detail(self.kind, id), body)
            .await
    }

    /// Delete the record with the given id.
    pub async fn remove(&self, id: &str) -> Envelope {
        self.http.delete(&self.endpoints.detail(self.kind, id)).await
    }

    /// Fetch the collection size: `{"count": n}`.
    pub async fn get_count(&self) -> Envelope {
        self.http.get(&self.endpoints.count(self.kind)).await
    }
}

/// One accessor per resource kind.
#[derive(Debug, Clone)]
pub struct Accessors {
    pub customers: ResourceClient,
    pub products: ResourceClient,
    pub suppliers: ResourceClient,
    pub employees: ResourceClient,
    pub invoices: ResourceClient,
    pub purchase_orders: ResourceClient,
    pub order_details: ResourceClient,
}

impl Accessors {
    /// Build all seven accessors over one shared HTTP client.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let http = HttpClient::new(config)?;
        let endpoints = Endpoints::new(&config.base_url);
        let client =
            |kind| ResourceClient::new(kind, http.clone(), endpoints.clone());

        Ok(Self {
            customers: client(ResourceKind::Customers),
            products: client(ResourceKind::Products),
            suppliers: client(ResourceKind::Suppliers),
            employees: client(ResourceKind::Employees),
            invoices: client(ResourceKind::Invoices),
            purchase_orders: client(ResourceKind::PurchaseOrders),
            order_details: client(ResourceKind::OrderDetails),
        })
    }

    pub fn for_kind(&self, kind: ResourceKind) -> &ResourceClient {
        match kind {
            ResourceKind::Customers => &self.customers,
            ResourceKind::Products => &self.products,
            ResourceKind::Suppliers => &self.suppliers,
            ResourceKind::Employees => &self.employees,
            ResourceKind::Invoices => &self.invoices,
            ResourceKind::PurchaseOrders => &self.purchase_orders,
            ResourceKind::OrderDetails => &self.order_details,
        }
    }
}

/// Pull the list of records out of a successful list body.
///
/// Backends return either a bare array or an object wrapping the array
/// under the kind's collection key (`{"purchaseOrders": [...]}`); anything
/// else is treated as an empty collection.
pub fn extract_rows(kind: ResourceKind, data: &Value) -> Vec<Value> {
    match data {
        Value::Array(rows) => rows.clone(),
        Value::Object(map) => map
            .get(kind.collection_key())
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}
