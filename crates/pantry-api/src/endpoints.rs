//! URL table for the backend's resource endpoints.

use pantry_core::ResourceKind;

/// Derives the fixed endpoint URLs for each resource kind from the
/// configured base URL.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `{base}/{resource}`: list (GET) and create (POST).
    pub fn collection(&self, kind: ResourceKind) -> String {
        format!("{}/{}", self.base_url, kind.path_segment())
    }

    /// `{base}/{resource}/{id}`: fetch (GET), update (PUT), delete
    /// (DELETE). Ids come from backend responses, so they are
    /// percent-encoded before landing in a path.
    pub fn detail(&self, kind: ResourceKind, id: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            kind.path_segment(),
            urlencoding::encode(id)
        )
    }

    /// `{base}/{resource}/count`: count (GET).
    pub fn count(&self, kind: ResourceKind) -> String {
        format!("{}/{}/count", self.base_url, kind.path_segment())
    }
}
