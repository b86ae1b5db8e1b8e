//! Candidate-key lookup over loosely-shaped backend records.
//!
//! Records fetched from the backend are kept as raw [`serde_json::Value`]
//! maps because field naming varies between backend versions (`C_id` vs
//! `id`, `paymentMethod` vs `payment_method`, nested vs flat customer
//! names). Each logical field is described by an ordered list of candidate
//! keys; [`lookup`] resolves the first one present. The chains in [`keys`]
//! are the single source of truth for that ordering.

use serde_json::Value;

/// Ordered candidate-key chains, one per logical field. A `.` inside a key
/// descends into a nested object (`"name.firstName"`).
pub mod keys {
    pub const CUSTOMER_ID: &[&str] = &["C_id", "id"];
    pub const CUSTOMER_FIRST_NAME: &[&str] = &["name.firstName", "firstName"];
    pub const CUSTOMER_SECOND_NAME: &[&str] = &["name.secondName", "secondName"];
    pub const CUSTOMER_EMAIL: &[&str] = &["email"];
    pub const CUSTOMER_PHONE: &[&str] = &["phone"];
    pub const CUSTOMER_ADDRESS: &[&str] = &["address"];

    pub const PRODUCT_ID: &[&str] = &["P_id", "id"];
    pub const PRODUCT_NAME: &[&str] = &["name"];
    pub const PRODUCT_CATEGORY: &[&str] = &["category"];
    pub const PRODUCT_STOCK: &[&str] = &["stock"];
    pub const PRODUCT_PRICE: &[&str] = &["price"];

    pub const SUPPLIER_ID: &[&str] = &["S_id", "id"];
    pub const SUPPLIER_NAME: &[&str] = &["name"];
    pub const SUPPLIER_ADDRESS: &[&str] = &["address"];
    pub const SUPPLIER_EMAIL: &[&str] = &["email"];
    pub const SUPPLIER_PHONE: &[&str] = &["phone"];

    pub const EMPLOYEE_ID: &[&str] = &["E_id", "id"];
    pub const EMPLOYEE_NAME: &[&str] = &["name"];
    pub const EMPLOYEE_ROLE: &[&str] = &["role"];
    pub const EMPLOYEE_PHONE: &[&str] = &["phone"];

    pub const INVOICE_ID: &[&str] = &["Lid", "id"];
    pub const INVOICE_DATE: &[&str] = &["date"];
    pub const INVOICE_AMOUNT: &[&str] = &["amount"];
    pub const INVOICE_PAYMENT_METHOD: &[&str] = &["paymentMethod", "payment_method"];

    pub const PURCHASE_ORDER_ID: &[&str] = &["Purchase_id", "PurchaseId", "id"];
    pub const PURCHASE_ORDER_DATE: &[&str] = &["date"];
    pub const PURCHASE_ORDER_AMOUNT: &[&str] = &["amount"];

    pub const ORDER_DETAIL_ID: &[&str] = &["Order_Id", "OrderId", "id"];
    pub const ORDER_DETAIL_QUANTITY: &[&str] = &["quantity"];
    pub const ORDER_DETAIL_COST: &[&str] = &["cost"];
}

/// Resolve the first candidate key present (and non-null) on `record`.
pub fn lookup<'a>(record: &'a Value, candidates: &[&str]) -> Option<&'a Value> {
    candidates.iter().find_map(|key| {
        let value = key
            .split('.')
            .try_fold(record, |node, part| node.get(part))?;
        (!value.is_null()).then_some(value)
    })
}

/// Field as display text; absent fields render empty.
pub fn text(record: &Value, candidates: &[&str]) -> String {
    match lookup(record, candidates) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Field as a monetary amount; strings are parsed, anything else is 0.
pub fn amount(record: &Value, candidates: &[&str]) -> f64 {
    match lookup(record, candidates) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Field formatted as dollars with two decimals.
pub fn money(record: &Value, candidates: &[&str]) -> String {
    format!("${:.2}", amount(record, candidates))
}

/// Field as a whole quantity; strings are parsed, anything else is 0.
pub fn quantity(record: &Value, candidates: &[&str]) -> i64 {
    match lookup(record, candidates) {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Phone field as display text: a stored list joins with `", "`, a bare
/// string passes through.
pub fn phones(record: &Value, candidates: &[&str]) -> String {
    match lookup(record, candidates) {
        Some(Value::Array(items)) => {
            let numbers: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            numbers.join(", ")
        }
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Split a phone input string into the list the backend stores:
/// `"555-1111, 555-2222"` becomes `["555-1111", "555-2222"]`.
pub fn split_phones(input: &str) -> Vec<String> {
    input.split(',').map(|p| p.trim().to_string()).collect()
}

/// Inverse of [`split_phones`] for prefilling edit forms.
pub fn join_phones(numbers: &[String]) -> String {
    numbers.join(", ")
}
