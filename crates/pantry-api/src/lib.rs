//! # pantry-api
//!
//! HTTP plumbing between the panel and the grocery backend:
//!
//! - [`HttpClient`]: performs a request and normalizes the outcome into the
//!   success/failure [`Envelope`](pantry_core::Envelope); nothing in this
//!   crate raises an error past its boundary once a client is built
//! - [`Endpoints`]: the URL table for the seven resource kinds
//! - [`ResourceClient`] / [`Accessors`]: the six CRUD operations per kind,
//!   constructed once at startup and handed to the panel
//! - [`dashboard`]: the kind-parallel count aggregation

pub mod accessors;
pub mod client;
pub mod dashboard;
pub mod endpoints;
pub mod error;

pub use accessors::{extract_rows, Accessors, ResourceClient};
pub use client::HttpClient;
pub use dashboard::{load_counts, DashboardCounts};
pub use endpoints::Endpoints;
pub use error::ClientError;
