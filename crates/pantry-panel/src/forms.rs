//! Form payloads posted by the panel's create/edit modals.
//!
//! Each struct mirrors one modal's input names. `id` is the hidden field
//! carried by edit forms; an empty string means the form was opened for
//! creation. `into_draft` produces the typed wire payload, splitting phone
//! inputs into the list the backend stores.

use pantry_core::fields::split_phones;
use pantry_core::{
    CustomerDraft, CustomerName, Draft, EmployeeDraft, InvoiceDraft, OrderDetailDraft,
    ProductDraft, PurchaseOrderDraft, SupplierDraft,
};
use serde::Deserialize;

fn record_id(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Deserialize)]
pub struct CustomerForm {
    #[serde(default)]
    pub id: String,
    pub first_name: String,
    pub second_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl CustomerForm {
    pub fn record_id(&self) -> Option<String> {
        record_id(&self.id)
    }

    pub fn into_draft(self) -> Draft {
        Draft::Customer(CustomerDraft {
            name: CustomerName {
                first_name: self.first_name,
                second_name: self.second_name,
            },
            email: self.email,
            phone: split_phones(&self.phone),
            address: self.address,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub category: String,
    pub stock: i64,
    pub price: f64,
}

impl ProductForm {
    pub fn record_id(&self) -> Option<String> {
        record_id(&self.id)
    }

    pub fn into_draft(self) -> Draft {
        Draft::Product(ProductDraft {
            name: self.name,
            category: self.category,
            stock: self.stock,
            price: self.price,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SupplierForm {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

impl SupplierForm {
    pub fn record_id(&self) -> Option<String> {
        record_id(&self.id)
    }

    pub fn into_draft(self) -> Draft {
        Draft::Supplier(SupplierDraft {
            name: self.name,
            address: self.address,
            email: self.email,
            phone: split_phones(&self.phone),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct EmployeeForm {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub role: String,
    pub phone: String,
}

impl EmployeeForm {
    pub fn record_id(&self) -> Option<String> {
        record_id(&self.id)
    }

    pub fn into_draft(self) -> Draft {
        Draft::Employee(EmployeeDraft {
            name: self.name,
            role: self.role,
            phone: split_phones(&self.phone),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct InvoiceForm {
    #[serde(default)]
    pub id: String,
    pub date: String,
    pub amount: f64,
    pub payment_method: String,
}

impl InvoiceForm {
    pub fn record_id(&self) -> Option<String> {
        record_id(&self.id)
    }

    pub fn into_draft(self) -> Draft {
        Draft::Invoice(InvoiceDraft {
            date: self.date,
            amount: self.amount,
            payment_method: self.payment_method,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct PurchaseOrderForm {
    #[serde(default)]
    pub id: String,
    pub date: String,
    pub amount: f64,
}

impl PurchaseOrderForm {
    pub fn record_id(&self) -> Option<String> {
        record_id(&self.id)
    }

    pub fn into_draft(self) -> Draft {
        Draft::PurchaseOrder(PurchaseOrderDraft {
            date: self.date,
            amount: self.amount,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct OrderDetailForm {
    #[serde(default)]
    pub id: String,
    pub order_id: String,
    pub quantity: i64,
    pub cost: f64,
}

impl OrderDetailForm {
    pub fn record_id(&self) -> Option<String> {
        record_id(&self.id)
    }

    pub fn into_draft(self) -> Draft {
        Draft::OrderDetail(OrderDetailDraft {
            order_id: self.order_id,
            quantity: self.quantity,
            cost: self.cost,
        })
    }
}

/// Confirmation payload carried by delete submissions.
#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub confirmed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_form_produces_the_exact_wire_body() {
        let form = ProductForm {
            id: String::new(),
            name: "Milk".to_string(),
            category: "Dairy".to_string(),
            stock: 10,
            price: 3.5,
        };
        assert_eq!(form.record_id(), None);
        assert_eq!(
            form.into_draft().body(),
            json!({"name": "Milk", "category": "Dairy", "stock": 10, "price": 3.5})
        );
    }

    #[test]
    fn a_present_id_marks_the_form_as_an_edit() {
        let form = ProductForm {
            id: "7".to_string(),
            name: "Milk".to_string(),
            category: "Dairy".to_string(),
            stock: 10,
            price: 3.5,
        };
        assert_eq!(form.record_id(), Some("7".to_string()));
    }

    #[test]
    fn whitespace_ids_count_as_empty() {
        let form = InvoiceForm {
            id: "  ".to_string(),
            date: "2024-05-01".to_string(),
            amount: 9.5,
            payment_method: "cash".to_string(),
        };
        assert_eq!(form.record_id(), None);
    }

    #[test]
    fn phone_inputs_are_split_into_lists() {
        let form = SupplierForm {
            id: String::new(),
            name: "Acme".to_string(),
            address: "1 Industrial Way".to_string(),
            email: "sales@acme.test".to_string(),
            phone: "555-1111, 555-2222".to_string(),
        };
        let body = form.into_draft().body();
        assert_eq!(body["phone"], json!(["555-1111", "555-2222"]));
    }

    #[test]
    fn order_detail_form_keeps_the_legacy_key() {
        let form = OrderDetailForm {
            id: "41".to_string(),
            order_id: "41".to_string(),
            quantity: 2,
            cost: 8.0,
        };
        let body = form.into_draft().body();
        assert_eq!(body["Order_Id"], "41");
    }

    #[test]
    fn delete_form_defaults_to_unconfirmed() {
        let form: DeleteForm = serde_json::from_value(json!({})).unwrap();
        assert!(!form.confirmed);
    }
}
