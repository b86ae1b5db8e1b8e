//! Full-page rendering: a pure function of the view-model.

use pantry_api::DashboardCounts;
use pantry_core::fields::{self, keys};
use pantry_core::ResourceKind;
use serde_json::Value;

use crate::render;
use crate::state::{ModalState, Notice, ScreenState, ViewModel};
use crate::templates::{self, escape};

/// Render whatever the view-model says is visible.
pub fn render_view(view: &ViewModel) -> String {
    match view.page().resource() {
        None => dashboard_page(&view.counts, view.notice.as_ref()),
        Some(kind) => resource_page(
            kind,
            view.screen(kind),
            &view.modal,
            view.notice.as_ref(),
        ),
    }
}

// =============================================================================
// Dashboard
// =============================================================================

pub fn dashboard_page(counts: &DashboardCounts, notice: Option<&Notice>) -> String {
    let tiles: String = ResourceKind::DASHBOARD
        .iter()
        .map(|kind| templates::stats_card(kind.title(), &counts.get(*kind).to_string()))
        .collect();

    let content = format!(
        r##"<div class="mb-8">
            <h1 class="text-3xl font-bold text-gray-900">Dashboard</h1>
            <p class="mt-2 text-gray-600">Overview of the grocery backend.</p>
        </div>

        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            {tiles}
        </div>
        {notice}"##,
        notice = notice.map(templates::notice_overlay).unwrap_or_default(),
    );

    templates::layout("Dashboard", &content)
}

// =============================================================================
// Resource screens
// =============================================================================

pub fn resource_page(
    kind: ResourceKind,
    screen: &ScreenState,
    modal: &ModalState,
    notice: Option<&Notice>,
) -> String {
    let table = templates::table(render::columns(kind), &render::table_body(kind, screen));

    let modal_html = match modal {
        ModalState::Open {
            kind: open_kind,
            record_id,
            prefill,
        } if *open_kind == kind => modal_form(kind, record_id.as_deref(), prefill.as_ref()),
        _ => String::new(),
    };

    let content = format!(
        r##"<div class="flex items-center justify-between mb-6">
            <h1 class="text-2xl font-bold text-gray-900">{title}</h1>
            <a href="/{segment}/new" class="bg-emerald-600 hover:bg-emerald-700 text-white px-4 py-2 rounded-lg font-medium">Add {noun}</a>
        </div>

        {table}
        {modal}
        {notice}"##,
        title = kind.title(),
        segment = kind.path_segment(),
        noun = kind.modal_noun(),
        modal = modal_html,
        notice = notice.map(templates::notice_overlay).unwrap_or_default(),
    );

    templates::layout(kind.title(), &content)
}

// =============================================================================
// Modal forms
// =============================================================================

fn modal_form(kind: ResourceKind, record_id: Option<&str>, prefill: Option<&Value>) -> String {
    let title = if record_id.is_some() {
        format!("Edit {}", kind.modal_noun())
    } else {
        format!("Add {}", kind.modal_noun())
    };

    let form = format!(
        r##"<form method="post" action="/{segment}/submit" class="space-y-4">
            <input type="hidden" name="id" value="{id}">
            {fields}
            <div class="flex justify-end gap-2 pt-2">
                <a href="/{segment}" class="px-4 py-2 text-gray-700 hover:bg-gray-100 rounded-lg">Cancel</a>
                <button type="submit" class="px-6 py-2 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg font-medium">Save</button>
            </div>
        </form>"##,
        segment = kind.path_segment(),
        id = escape(record_id.unwrap_or_default()),
        fields = form_fields(kind, prefill),
    );

    templates::modal(&title, &form)
}

fn text_of(prefill: Option<&Value>, candidates: &[&str]) -> String {
    prefill.map(|r| fields::text(r, candidates)).unwrap_or_default()
}

fn phones_of(prefill: Option<&Value>, candidates: &[&str]) -> String {
    prefill.map(|r| fields::phones(r, candidates)).unwrap_or_default()
}

fn number_of(prefill: Option<&Value>, candidates: &[&str]) -> String {
    prefill
        .map(|r| fields::amount(r, candidates).to_string())
        .unwrap_or_default()
}

fn quantity_of(prefill: Option<&Value>, candidates: &[&str]) -> String {
    prefill
        .map(|r| fields::quantity(r, candidates).to_string())
        .unwrap_or_default()
}

fn form_fields(kind: ResourceKind, prefill: Option<&Value>) -> String {
    match kind {
        ResourceKind::Customers => [
            templates::input(
                "first_name",
                "First Name",
                "text",
                &text_of(prefill, keys::CUSTOMER_FIRST_NAME),
                true,
            ),
            templates::input(
                "second_name",
                "Second Name",
                "text",
                &text_of(prefill, keys::CUSTOMER_SECOND_NAME),
                true,
            ),
            templates::input(
                "email",
                "Email",
                "email",
                &text_of(prefill, keys::CUSTOMER_EMAIL),
                true,
            ),
            templates::input(
                "phone",
                "Phone (comma separated)",
                "text",
                &phones_of(prefill, keys::CUSTOMER_PHONE),
                true,
            ),
            templates::input(
                "address",
                "Address",
                "text",
                &text_of(prefill, keys::CUSTOMER_ADDRESS),
                true,
            ),
        ]
        .concat(),
        ResourceKind::Products => [
            templates::input(
                "name",
                "Name",
                "text",
                &text_of(prefill, keys::PRODUCT_NAME),
                true,
            ),
            templates::input(
                "category",
                "Category",
                "text",
                &text_of(prefill, keys::PRODUCT_CATEGORY),
                true,
            ),
            templates::input(
                "stock",
                "Stock",
                "number",
                &quantity_of(prefill, keys::PRODUCT_STOCK),
                true,
            ),
            templates::input(
                "price",
                "Price",
                "number",
                &number_of(prefill, keys::PRODUCT_PRICE),
                true,
            ),
        ]
        .concat(),
        ResourceKind::Suppliers => [
            templates::input(
                "name",
                "Name",
                "text",
                &text_of(prefill, keys::SUPPLIER_NAME),
                true,
            ),
            templates::input(
                "address",
                "Address",
                "text",
                &text_of(prefill, keys::SUPPLIER_ADDRESS),
                true,
            ),
            templates::input(
                "email",
                "Email",
                "email",
                &text_of(prefill, keys::SUPPLIER_EMAIL),
                true,
            ),
            templates::input(
                "phone",
                "Phone (comma separated)",
                "text",
                &phones_of(prefill, keys::SUPPLIER_PHONE),
                true,
            ),
        ]
        .concat(),
        ResourceKind::Employees => [
            templates::input(
                "name",
                "Name",
                "text",
                &text_of(prefill, keys::EMPLOYEE_NAME),
                true,
            ),
            templates::input(
                "role",
                "Role",
                "text",
                &text_of(prefill, keys::EMPLOYEE_ROLE),
                true,
            ),
            templates::input(
                "phone",
                "Phone (comma separated)",
                "text",
                &phones_of(prefill, keys::EMPLOYEE_PHONE),
                true,
            ),
        ]
        .concat(),
        ResourceKind::Invoices => [
            templates::input(
                "date",
                "Date",
                "date",
                &text_of(prefill, keys::INVOICE_DATE),
                true,
            ),
            templates::input(
                "amount",
                "Amount",
                "number",
                &number_of(prefill, keys::INVOICE_AMOUNT),
                true,
            ),
            templates::input(
                "payment_method",
                "Payment Method",
                "text",
                &text_of(prefill, keys::INVOICE_PAYMENT_METHOD),
                true,
            ),
        ]
        .concat(),
        ResourceKind::PurchaseOrders => [
            templates::input(
                "date",
                "Date",
                "date",
                &text_of(prefill, keys::PURCHASE_ORDER_DATE),
                true,
            ),
            templates::input(
                "amount",
                "Amount",
                "number",
                &number_of(prefill, keys::PURCHASE_ORDER_AMOUNT),
                true,
            ),
        ]
        .concat(),
        ResourceKind::OrderDetails => [
            templates::input(
                "order_id",
                "Order ID",
                "text",
                &text_of(prefill, keys::ORDER_DETAIL_ID),
                true,
            ),
            templates::input(
                "quantity",
                "Quantity",
                "number",
                &quantity_of(prefill, keys::ORDER_DETAIL_QUANTITY),
                true,
            ),
            templates::input(
                "cost",
                "Cost",
                "number",
                &number_of(prefill, keys::ORDER_DETAIL_COST),
                true,
            ),
        ]
        .concat(),
    }
}
