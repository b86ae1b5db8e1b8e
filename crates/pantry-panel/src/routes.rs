//! Route definitions for the panel.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the panel router over the shared application state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/notice/dismiss", post(handlers::dismiss_notice))
        .route("/customers/submit", post(handlers::submit_customer))
        .route("/products/submit", post(handlers::submit_product))
        .route("/suppliers/submit", post(handlers::submit_supplier))
        .route("/employees/submit", post(handlers::submit_employee))
        .route("/invoices/submit", post(handlers::submit_invoice))
        .route(
            "/purchase-orders/submit",
            post(handlers::submit_purchase_order),
        )
        .route(
            "/order-details/submit",
            post(handlers::submit_order_detail),
        )
        .route("/{page}", get(handlers::show_page))
        .route("/{page}/new", get(handlers::new_record))
        .route("/{page}/{id}/edit", get(handlers::edit_record))
        .route("/{page}/{id}/delete", post(handlers::delete_record))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
