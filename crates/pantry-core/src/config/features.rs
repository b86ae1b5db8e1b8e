//! Named feature flags.

use serde::{Deserialize, Serialize};

/// Feature flags consumed read-only by the panel and CLI.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FeaturesConfig {
    /// Serve data from the in-memory mock backend.
    #[serde(default)]
    pub mock_api: bool,

    /// Emit usage analytics (reserved; no collector is wired up).
    #[serde(default)]
    pub analytics: bool,

    /// Forward panel errors to an external reporter (reserved).
    #[serde(default)]
    pub error_reporting: bool,
}
