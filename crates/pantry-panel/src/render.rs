//! Table rendering: one row per record, placeholder rows for the other
//! screen states.
//!
//! Every cell is read through the resource's candidate-key chain, so
//! records from backends with either naming convention render the same.

use pantry_core::fields::{self, keys};
use pantry_core::ResourceKind;
use serde_json::Value;

use crate::state::ScreenState;
use crate::templates::escape;

/// Column headers per resource, Actions included.
pub fn columns(kind: ResourceKind) -> &'static [&'static str] {
    match kind {
        ResourceKind::Customers => &[
            "ID",
            "First Name",
            "Second Name",
            "Email",
            "Phone",
            "Address",
            "Actions",
        ],
        ResourceKind::Products => &["ID", "Name", "Category", "Stock", "Price", "Actions"],
        ResourceKind::Suppliers => &["ID", "Name", "Address", "Email", "Phone", "Actions"],
        ResourceKind::Employees => &["ID", "Name", "Role", "Phone", "Actions"],
        ResourceKind::Invoices => &["ID", "Date", "Amount", "Payment Method", "Actions"],
        ResourceKind::PurchaseOrders => &["ID", "Date", "Amount", "Actions"],
        ResourceKind::OrderDetails => &["Order ID", "Quantity", "Cost", "Actions"],
    }
}

/// Render a table body for the given screen state.
pub fn table_body(kind: ResourceKind, screen: &ScreenState) -> String {
    match screen {
        ScreenState::Idle => String::new(),
        ScreenState::Loading => placeholder_row(kind, &format!("Loading {}...", kind.plural())),
        ScreenState::Rendered(rows) if rows.is_empty() => {
            placeholder_row(kind, &format!("No {} found", kind.plural()))
        }
        ScreenState::Rendered(rows) => rows.iter().map(|record| row(kind, record)).collect(),
        ScreenState::Failed => placeholder_row(
            kind,
            &format!(
                "Error loading {}. Please check API connection.",
                kind.plural()
            ),
        ),
    }
}

fn placeholder_row(kind: ResourceKind, message: &str) -> String {
    format!(
        r#"<tr><td colspan="{colspan}" class="px-6 py-8 text-center text-sm text-gray-500">{message}</td></tr>"#,
        colspan = columns(kind).len(),
        message = escape(message),
    )
}

/// Render one record as a table row with Edit/Delete actions.
pub fn row(kind: ResourceKind, record: &Value) -> String {
    let cells = match kind {
        ResourceKind::Customers => vec![
            fields::text(record, keys::CUSTOMER_ID),
            fields::text(record, keys::CUSTOMER_FIRST_NAME),
            fields::text(record, keys::CUSTOMER_SECOND_NAME),
            fields::text(record, keys::CUSTOMER_EMAIL),
            fields::phones(record, keys::CUSTOMER_PHONE),
            fields::text(record, keys::CUSTOMER_ADDRESS),
        ],
        ResourceKind::Products => vec![
            fields::text(record, keys::PRODUCT_ID),
            fields::text(record, keys::PRODUCT_NAME),
            fields::text(record, keys::PRODUCT_CATEGORY),
            fields::quantity(record, keys::PRODUCT_STOCK).to_string(),
            fields::money(record, keys::PRODUCT_PRICE),
        ],
        ResourceKind::Suppliers => vec![
            fields::text(record, keys::SUPPLIER_ID),
            fields::text(record, keys::SUPPLIER_NAME),
            fields::text(record, keys::SUPPLIER_ADDRESS),
            fields::text(record, keys::SUPPLIER_EMAIL),
            fields::phones(record, keys::SUPPLIER_PHONE),
        ],
        ResourceKind::Employees => vec![
            fields::text(record, keys::EMPLOYEE_ID),
            fields::text(record, keys::EMPLOYEE_NAME),
            fields::text(record, keys::EMPLOYEE_ROLE),
            fields::phones(record, keys::EMPLOYEE_PHONE),
        ],
        ResourceKind::Invoices => vec![
            fields::text(record, keys::INVOICE_ID),
            fields::text(record, keys::INVOICE_DATE),
            fields::money(record, keys::INVOICE_AMOUNT),
            fields::text(record, keys::INVOICE_PAYMENT_METHOD),
        ],
        ResourceKind::PurchaseOrders => vec![
            fields::text(record, keys::PURCHASE_ORDER_ID),
            fields::text(record, keys::PURCHASE_ORDER_DATE),
            fields::money(record, keys::PURCHASE_ORDER_AMOUNT),
        ],
        ResourceKind::OrderDetails => vec![
            fields::text(record, keys::ORDER_DETAIL_ID),
            fields::quantity(record, keys::ORDER_DETAIL_QUANTITY).to_string(),
            fields::money(record, keys::ORDER_DETAIL_COST),
        ],
    };

    let cells_html: String = cells
        .iter()
        .map(|cell| {
            format!(
                r#"<td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{}</td>"#,
                escape(cell)
            )
        })
        .collect();

    format!(
        r#"<tr class="hover:bg-gray-50">{cells_html}{actions}</tr>"#,
        actions = actions_cell(kind, record),
    )
}

fn actions_cell(kind: ResourceKind, record: &Value) -> String {
    let id = escape(&fields::text(record, kind.id_keys()));
    let segment = kind.path_segment();
    let noun = kind.noun().to_lowercase();

    format!(
        r##"<td class="px-6 py-4 whitespace-nowrap text-sm">
            <div class="flex gap-2">
                <a href="/{segment}/{id}/edit" class="px-3 py-1.5 rounded-lg bg-emerald-100 text-emerald-700 hover:bg-emerald-200 font-medium">Edit</a>
                <form method="post" action="/{segment}/{id}/delete"
                      onsubmit="return confirm('Are you sure you want to delete this {noun}?')">
                    <input type="hidden" name="confirmed" value="true">
                    <button type="submit" class="px-3 py-1.5 rounded-lg bg-red-100 text-red-700 hover:bg-red-200 font-medium">Delete</button>
                </form>
            </div>
        </td>"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn count_occurrences(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn empty_collection_shows_the_empty_state_exactly_once() {
        let body = table_body(ResourceKind::Customers, &ScreenState::Rendered(vec![]));
        assert_eq!(count_occurrences(&body, "No customers found"), 1);
        assert_eq!(count_occurrences(&body, "<tr>"), 1);
        assert!(body.contains(r#"colspan="7""#));
    }

    #[test]
    fn failed_load_shows_the_connection_error_row_only() {
        let body = table_body(ResourceKind::Products, &ScreenState::Failed);
        assert!(body.contains("Error loading products. Please check API connection."));
        assert_eq!(count_occurrences(&body, "<tr>"), 1);
    }

    #[test]
    fn loading_state_names_the_resource() {
        let body = table_body(ResourceKind::PurchaseOrders, &ScreenState::Loading);
        assert!(body.contains("Loading purchase orders..."));
        assert!(body.contains(r#"colspan="4""#));
    }

    #[test]
    fn product_rows_format_stock_and_price() {
        let record = json!({"P_id": "3", "name": "Milk", "category": "Dairy", "stock": 10, "price": 3.5});
        let html = row(ResourceKind::Products, &record);
        assert!(html.contains(">Milk<"));
        assert!(html.contains(">10<"));
        assert!(html.contains(">$3.50<"));
        assert!(html.contains("/products/3/edit"));
    }

    #[test]
    fn purchase_order_actions_use_the_preferred_id() {
        let record = json!({"Purchase_id": "7", "PurchaseId": "8", "id": "9", "date": "2024-05-02", "amount": 120});
        let html = row(ResourceKind::PurchaseOrders, &record);
        assert!(html.contains("/purchase-orders/7/edit"));
        assert!(html.contains("/purchase-orders/7/delete"));
        assert!(!html.contains("/purchase-orders/8/"));
    }

    #[test]
    fn generic_id_is_the_last_resort() {
        let record = json!({"id": "12", "name": "Acme", "address": "", "email": "", "phone": []});
        let html = row(ResourceKind::Suppliers, &record);
        assert!(html.contains("/suppliers/12/edit"));
    }

    #[test]
    fn customer_rows_join_phone_lists() {
        let record = json!({
            "C_id": "1",
            "name": {"firstName": "Ada", "secondName": "Lovelace"},
            "email": "ada@example.com",
            "phone": ["555-1111", "555-2222"],
            "address": "12 Analytical St"
        });
        let html = row(ResourceKind::Customers, &record);
        assert!(html.contains("555-1111, 555-2222"));
        assert!(html.contains(">Ada<"));
    }

    #[test]
    fn delete_forms_require_confirmation() {
        let record = json!({"E_id": "4", "name": "Sam", "role": "Cashier", "phone": []});
        let html = row(ResourceKind::Employees, &record);
        assert!(html.contains(r#"name="confirmed" value="true""#));
        assert!(html.contains("Are you sure you want to delete this employee?"));
    }

    #[test]
    fn record_text_is_escaped() {
        let record = json!({"P_id": "1", "name": "<script>x</script>", "category": "", "stock": 0, "price": 0});
        let html = row(ResourceKind::Products, &record);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
