//! Request handlers for the panel.
//!
//! Each handler drives a controller flow against the shared view-model
//! and answers with the rendered page. Mutations respond with the same
//! markup a follow-up GET would produce, so the browser always shows the
//! view-model's current truth.

use axum::{
    extract::{Path, State},
    response::Html,
    Form,
};
use pantry_core::ResourceKind;

use crate::controller;
use crate::error::PanelError;
use crate::forms::{
    CustomerForm, DeleteForm, EmployeeForm, InvoiceForm, OrderDetailForm, ProductForm,
    PurchaseOrderForm, SupplierForm,
};
use crate::pages;
use crate::state::AppState;

fn render(state: &AppState) -> Html<String> {
    Html(pages::render_view(&state.view()))
}

fn resource_for(slug: &str) -> Result<ResourceKind, PanelError> {
    ResourceKind::from_segment(slug).ok_or_else(|| PanelError::UnknownResource(slug.to_string()))
}

// =============================================================================
// Page handlers
// =============================================================================

/// The dashboard.
pub async fn home(State(state): State<AppState>) -> Html<String> {
    controller::switch_page(&state, "dashboard").await;
    render(&state)
}

/// A navigation target. Unrecognized names re-render the current page
/// untouched.
pub async fn show_page(State(state): State<AppState>, Path(slug): Path<String>) -> Html<String> {
    controller::switch_page(&state, &slug).await;
    render(&state)
}

/// Open the create modal over the resource's list.
pub async fn new_record(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, PanelError> {
    let kind = resource_for(&slug)?;
    controller::switch_page(&state, &slug).await;
    controller::open_create_modal(&state, kind);
    Ok(render(&state))
}

/// Open the edit modal, prefilled from the backend.
pub async fn edit_record(
    State(state): State<AppState>,
    Path((slug, id)): Path<(String, String)>,
) -> Result<Html<String>, PanelError> {
    let kind = resource_for(&slug)?;
    controller::switch_page(&state, &slug).await;
    controller::open_edit_modal(&state, kind, &id).await;
    Ok(render(&state))
}

/// Delete a record, but only when the confirmation field is affirmative.
pub async fn delete_record(
    State(state): State<AppState>,
    Path((slug, id)): Path<(String, String)>,
    Form(form): Form<DeleteForm>,
) -> Result<Html<String>, PanelError> {
    let kind = resource_for(&slug)?;
    state.view_mut().switch_page(&slug);
    controller::delete(&state, kind, &id, form.confirmed).await;
    Ok(render(&state))
}

/// Clear the blocking notice.
pub async fn dismiss_notice(State(state): State<AppState>) -> Html<String> {
    controller::dismiss_notice(&state);
    render(&state)
}

// =============================================================================
// Form submissions, one per resource kind
// =============================================================================

pub async fn submit_customer(
    State(state): State<AppState>,
    Form(form): Form<CustomerForm>,
) -> Html<String> {
    let record_id = form.record_id();
    controller::submit(&state, form.into_draft(), record_id).await;
    render(&state)
}

pub async fn submit_product(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Html<String> {
    let record_id = form.record_id();
    controller::submit(&state, form.into_draft(), record_id).await;
    render(&state)
}

pub async fn submit_supplier(
    State(state): State<AppState>,
    Form(form): Form<SupplierForm>,
) -> Html<String> {
    let record_id = form.record_id();
    controller::submit(&state, form.into_draft(), record_id).await;
    render(&state)
}

pub async fn submit_employee(
    State(state): State<AppState>,
    Form(form): Form<EmployeeForm>,
) -> Html<String> {
    let record_id = form.record_id();
    controller::submit(&state, form.into_draft(), record_id).await;
    render(&state)
}

pub async fn submit_invoice(
    State(state): State<AppState>,
    Form(form): Form<InvoiceForm>,
) -> Html<String> {
    let record_id = form.record_id();
    controller::submit(&state, form.into_draft(), record_id).await;
    render(&state)
}

pub async fn submit_purchase_order(
    State(state): State<AppState>,
    Form(form): Form<PurchaseOrderForm>,
) -> Html<String> {
    let record_id = form.record_id();
    controller::submit(&state, form.into_draft(), record_id).await;
    render(&state)
}

pub async fn submit_order_detail(
    State(state): State<AppState>,
    Form(form): Form<OrderDetailForm>,
) -> Html<String> {
    let record_id = form.record_id();
    controller::submit(&state, form.into_draft(), record_id).await;
    render(&state)
}
