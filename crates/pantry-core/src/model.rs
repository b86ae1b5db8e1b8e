//! Typed draft payloads for create and update submissions.
//!
//! Reads from the backend stay dynamic (see [`crate::fields`]), but the
//! bodies the panel *sends* have one fixed shape per resource. The serde
//! renames here pin the exact wire keys the backend expects, including the
//! legacy `Order_Id` spelling on order details.

use serde::{Deserialize, Serialize};

use crate::resource::ResourceKind;

/// Customer name as the backend stores it: a nested object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerName {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "secondName")]
    pub second_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: CustomerName,
    pub email: String,
    pub phone: Vec<String>,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub stock: i64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierDraft {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub role: String,
    pub phone: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub date: String,
    pub amount: f64,
    #[serde(rename = "paymentMethod")]
    pub payment_method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderDraft {
    pub date: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetailDraft {
    #[serde(rename = "Order_Id")]
    pub order_id: String,
    pub quantity: i64,
    pub cost: f64,
}

/// A kind-erased draft, as produced by form submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Draft {
    Customer(CustomerDraft),
    Product(ProductDraft),
    Supplier(SupplierDraft),
    Employee(EmployeeDraft),
    Invoice(InvoiceDraft),
    PurchaseOrder(PurchaseOrderDraft),
    OrderDetail(OrderDetailDraft),
}

impl Draft {
    /// The resource kind this draft belongs to.
    pub fn kind(&self) -> ResourceKind {
        match self {
            Draft::Customer(_) => ResourceKind::Customers,
            Draft::Product(_) => ResourceKind::Products,
            Draft::Supplier(_) => ResourceKind::Suppliers,
            Draft::Employee(_) => ResourceKind::Employees,
            Draft::Invoice(_) => ResourceKind::Invoices,
            Draft::PurchaseOrder(_) => ResourceKind::PurchaseOrders,
            Draft::OrderDetail(_) => ResourceKind::OrderDetails,
        }
    }

    /// The JSON request body for this draft.
    pub fn body(&self) -> serde_json::Value {
        // These types contain no non-serializable values, so to_value
        // cannot fail.
        match self {
            Draft::Customer(d) => serde_json::to_value(d),
            Draft::Product(d) => serde_json::to_value(d),
            Draft::Supplier(d) => serde_json::to_value(d),
            Draft::Employee(d) => serde_json::to_value(d),
            Draft::Invoice(d) => serde_json::to_value(d),
            Draft::PurchaseOrder(d) => serde_json::to_value(d),
            Draft::OrderDetail(d) => serde_json::to_value(d),
        }
        .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_body_matches_the_wire_shape() {
        let draft = ProductDraft {
            name: "Milk".to_string(),
            category: "Dairy".to_string(),
            stock: 10,
            price: 3.5,
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({"name": "Milk", "category": "Dairy", "stock": 10, "price": 3.5})
        );
    }

    #[test]
    fn customer_body_nests_the_name() {
        let draft = CustomerDraft {
            name: CustomerName {
                first_name: "Ada".to_string(),
                second_name: "Lovelace".to_string(),
            },
            email: "ada@example.com".to_string(),
            phone: vec!["555-1111".to_string(), "555-2222".to_string()],
            address: "12 Analytical St".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({
                "name": {"firstName": "Ada", "secondName": "Lovelace"},
                "email": "ada@example.com",
                "phone": ["555-1111", "555-2222"],
                "address": "12 Analytical St"
            })
        );
    }

    #[test]
    fn invoice_body_uses_camel_case_payment_method() {
        let draft = InvoiceDraft {
            date: "2024-05-01".to_string(),
            amount: 19.99,
            payment_method: "card".to_string(),
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["paymentMethod"], "card");
        assert!(body.get("payment_method").is_none());
    }

    #[test]
    fn order_detail_body_keeps_the_legacy_id_key() {
        let draft = OrderDetailDraft {
            order_id: "41".to_string(),
            quantity: 3,
            cost: 12.75,
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["Order_Id"], "41");
        assert_eq!(body["quantity"], 3);
        assert_eq!(body["cost"], 12.75);
    }

    #[test]
    fn draft_reports_its_kind() {
        let draft = Draft::PurchaseOrder(PurchaseOrderDraft {
            date: "2024-05-02".to_string(),
            amount: 240.0,
        });
        assert_eq!(draft.kind(), ResourceKind::PurchaseOrders);
        assert_eq!(draft.body()["amount"], 240.0);
    }
}
