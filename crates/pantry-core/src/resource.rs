//! The seven managed resource kinds and their wire naming.

use crate::fields::keys;

/// One of the seven entity types managed by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Customers,
    Products,
    Suppliers,
    Employees,
    Invoices,
    PurchaseOrders,
    OrderDetails,
}

impl ResourceKind {
    /// Every kind, in navigation order.
    pub const ALL: [ResourceKind; 7] = [
        ResourceKind::Customers,
        ResourceKind::Products,
        ResourceKind::Suppliers,
        ResourceKind::Employees,
        ResourceKind::Invoices,
        ResourceKind::PurchaseOrders,
        ResourceKind::OrderDetails,
    ];

    /// The kinds counted on the dashboard. Order details has a count
    /// endpoint but no dashboard tile.
    pub const DASHBOARD: [ResourceKind; 6] = [
        ResourceKind::Customers,
        ResourceKind::Products,
        ResourceKind::Suppliers,
        ResourceKind::Employees,
        ResourceKind::Invoices,
        ResourceKind::PurchaseOrders,
    ];

    /// URL path segment under the API base.
    pub fn path_segment(&self) -> &'static str {
        match self {
            ResourceKind::Customers => "customers",
            ResourceKind::Products => "products",
            ResourceKind::Suppliers => "suppliers",
            ResourceKind::Employees => "employees",
            ResourceKind::Invoices => "invoices",
            ResourceKind::PurchaseOrders => "purchase-orders",
            ResourceKind::OrderDetails => "order-details",
        }
    }

    /// Parse a path segment back into a kind.
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.path_segment() == segment)
    }

    /// Key under which some backends wrap the list body, e.g.
    /// `{"purchaseOrders": [...]}` instead of a bare array.
    pub fn collection_key(&self) -> &'static str {
        match self {
            ResourceKind::Customers => "customers",
            ResourceKind::Products => "products",
            ResourceKind::Suppliers => "suppliers",
            ResourceKind::Employees => "employees",
            ResourceKind::Invoices => "invoices",
            ResourceKind::PurchaseOrders => "purchaseOrders",
            ResourceKind::OrderDetails => "orderDetails",
        }
    }

    /// Page heading, title case.
    pub fn title(&self) -> &'static str {
        match self {
            ResourceKind::Customers => "Customers",
            ResourceKind::Products => "Products",
            ResourceKind::Suppliers => "Suppliers",
            ResourceKind::Employees => "Employees",
            ResourceKind::Invoices => "Invoices",
            ResourceKind::PurchaseOrders => "Purchase Orders",
            ResourceKind::OrderDetails => "Order Details",
        }
    }

    /// Singular noun for modal titles, title case ("Add Purchase Order").
    pub fn modal_noun(&self) -> &'static str {
        match self {
            ResourceKind::Customers => "Customer",
            ResourceKind::Products => "Product",
            ResourceKind::Suppliers => "Supplier",
            ResourceKind::Employees => "Employee",
            ResourceKind::Invoices => "Invoice",
            ResourceKind::PurchaseOrders => "Purchase Order",
            ResourceKind::OrderDetails => "Order Detail",
        }
    }

    /// Singular noun for notices, sentence case ("Purchase order deleted
    /// successfully").
    pub fn noun(&self) -> &'static str {
        match self {
            ResourceKind::Customers => "Customer",
            ResourceKind::Products => "Product",
            ResourceKind::Suppliers => "Supplier",
            ResourceKind::Employees => "Employee",
            ResourceKind::Invoices => "Invoice",
            ResourceKind::PurchaseOrders => "Purchase order",
            ResourceKind::OrderDetails => "Order detail",
        }
    }

    /// Plural noun, lower case, for table placeholder rows ("Loading
    /// purchase orders...").
    pub fn plural(&self) -> &'static str {
        match self {
            ResourceKind::Customers => "customers",
            ResourceKind::Products => "products",
            ResourceKind::Suppliers => "suppliers",
            ResourceKind::Employees => "employees",
            ResourceKind::Invoices => "invoices",
            ResourceKind::PurchaseOrders => "purchase orders",
            ResourceKind::OrderDetails => "order details",
        }
    }

    /// Ordered candidate keys for this kind's identifier field. Backends
    /// have shipped several spellings; order encodes preference and must
    /// not be changed.
    pub fn id_keys(&self) -> &'static [&'static str] {
        match self {
            ResourceKind::Customers => keys::CUSTOMER_ID,
            ResourceKind::Products => keys::PRODUCT_ID,
            ResourceKind::Suppliers => keys::SUPPLIER_ID,
            ResourceKind::Employees => keys::EMPLOYEE_ID,
            ResourceKind::Invoices => keys::INVOICE_ID,
            ResourceKind::PurchaseOrders => keys::PURCHASE_ORDER_ID,
            ResourceKind::OrderDetails => keys::ORDER_DETAIL_ID,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_roundtrip() {
        for kind in ResourceKind::ALL {
            assert_eq!(ResourceKind::from_segment(kind.path_segment()), Some(kind));
        }
        assert_eq!(ResourceKind::from_segment("inventory"), None);
    }

    #[test]
    fn dashboard_excludes_order_details() {
        assert!(!ResourceKind::DASHBOARD.contains(&ResourceKind::OrderDetails));
        assert_eq!(ResourceKind::DASHBOARD.len(), 6);
    }

    #[test]
    fn wrapped_list_keys_use_camel_case() {
        assert_eq!(ResourceKind::PurchaseOrders.collection_key(), "purchaseOrders");
        assert_eq!(ResourceKind::OrderDetails.collection_key(), "orderDetails");
    }
}
