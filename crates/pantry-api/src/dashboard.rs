//! Dashboard count aggregation.
//!
//! Issues the six count requests concurrently and joins them. Each kind
//! settles on its own: a failed request or a body without a `count` field
//! contributes 0 for that kind and a diagnostic log entry, without
//! touching the other five.

use pantry_core::{Envelope, ResourceKind};
use serde_json::Value;

use crate::accessors::Accessors;

/// Counts shown on the dashboard, one tile per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub customers: u64,
    pub products: u64,
    pub suppliers: u64,
    pub employees: u64,
    pub invoices: u64,
    pub purchase_orders: u64,
}

impl DashboardCounts {
    pub fn get(&self, kind: ResourceKind) -> u64 {
        match kind {
            ResourceKind::Customers => self.customers,
            ResourceKind::Products => self.products,
            ResourceKind::Suppliers => self.suppliers,
            ResourceKind::Employees => self.employees,
            ResourceKind::Invoices => self.invoices,
            ResourceKind::PurchaseOrders => self.purchase_orders,
            ResourceKind::OrderDetails => 0,
        }
    }
}

/// Fetch all six dashboard counts concurrently.
pub async fn load_counts(accessors: &Accessors) -> DashboardCounts {
    let (customers, products, suppliers, employees, invoices, purchase_orders) = futures::join!(
        accessors.customers.get_count(),
        accessors.products.get_count(),
        accessors.suppliers.get_count(),
        accessors.employees.get_count(),
        accessors.invoices.get_count(),
        accessors.purchase_orders.get_count(),
    );

    DashboardCounts {
        customers: count_from(&customers, ResourceKind::Customers),
        products: count_from(&products, ResourceKind::Products),
        suppliers: count_from(&suppliers, ResourceKind::Suppliers),
        employees: count_from(&employees, ResourceKind::Employees),
        invoices: count_from(&invoices, ResourceKind::Invoices),
        purchase_orders: count_from(&purchase_orders, ResourceKind::PurchaseOrders),
    }
}

/// Extract a count from one kind's envelope, defaulting to 0 on any
/// failure or malformed body.
fn count_from(envelope: &Envelope, kind: ResourceKind) -> u64 {
    match envelope {
        Envelope::Failure(error) => {
            tracing::warn!(kind = kind.path_segment(), %error, "count request failed");
            0
        }
        Envelope::Success(data) => match data.get("count").and_then(Value::as_u64) {
            Some(count) => count,
            None => {
                tracing::warn!(
                    kind = kind.path_segment(),
                    "count response has no count field"
                );
                0
            }
        },
    }
}
