//! # pantry-core
//!
//! Core types shared across the Pantry workspace:
//!
//! - Configuration loaded from `pantry.yaml` (backend base URL, mock
//!   toggle, environment, feature flags, panel listen address)
//! - The seven managed resource kinds and their wire naming
//! - The success/failure envelope wrapping every backend call outcome
//! - Ordered candidate-key chains for reading records whose field naming
//!   varies between backend versions
//! - Typed draft payloads for create/update submissions

pub mod config;
pub mod envelope;
pub mod fields;
pub mod model;
pub mod resource;

pub use config::{ApiConfig, ConfigError, FeaturesConfig, PanelConfig, PantryConfig};
pub use envelope::Envelope;
pub use model::{
    CustomerDraft, CustomerName, Draft, EmployeeDraft, InvoiceDraft, OrderDetailDraft,
    ProductDraft, PurchaseOrderDraft, SupplierDraft,
};
pub use resource::ResourceKind;
