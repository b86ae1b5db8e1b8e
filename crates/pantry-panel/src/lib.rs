//! # pantry-panel
//!
//! The admin panel for the grocery backend:
//!
//! - Screens for the seven resource kinds (list, create/edit modal, delete)
//!   and a dashboard of counts
//! - An explicit view-model ([`state`]) holding the current page, each
//!   screen's load state, the modal, and the blocking notice; rendering
//!   ([`render`], [`pages`]) is a pure function of that state
//! - Controller flows ([`controller`]) driving the resource accessors and
//!   the view-model
//! - An axum server ([`server`]) exposing the panel to a browser
//!
//! ## Tech stack
//!
//! - Axum for the HTTP server, plain HTML forms for mutations
//! - Tailwind via CDN for styling
//! - `pantry-api` accessors injected at startup; the panel owns no
//!   network configuration of its own

pub mod controller;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod pages;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;

pub use error::PanelError;
pub use server::PanelServer;
pub use state::AppState;
