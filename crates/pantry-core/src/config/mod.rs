//! Configuration types for the Pantry admin panel.
//!
//! Configuration is loaded from a single YAML file (`pantry.yaml`) into a
//! [`PantryConfig`]. Every section has serde defaults so a partial file, or
//! no file at all, still yields a runnable configuration. The config is
//! consumed read-only: it is resolved once at startup and handed to the
//! API client and the panel server.

pub mod api;
pub mod features;
pub mod panel;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use api::ApiConfig;
pub use features::FeaturesConfig;
pub use panel::PanelConfig;

/// Complete Pantry configuration loaded from `pantry.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PantryConfig {
    /// Project name.
    #[serde(default)]
    pub project: Option<String>,

    /// Configuration version.
    #[serde(default)]
    pub version: Option<String>,

    /// Backend REST API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// When true, `pantry serve` starts the in-memory mock backend and
    /// points the accessors at it instead of `api.base_url`.
    #[serde(default)]
    pub use_mock_api: bool,

    /// Environment name ("development" or "production").
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Named feature flags.
    #[serde(default)]
    pub features: FeaturesConfig,

    /// Panel HTTP server settings.
    #[serde(default)]
    pub panel: PanelConfig,
}

impl Default for PantryConfig {
    fn default() -> Self {
        Self {
            project: None,
            version: None,
            api: ApiConfig::default(),
            use_mock_api: false,
            environment: default_environment(),
            features: FeaturesConfig::default(),
            panel: PanelConfig::default(),
        }
    }
}

fn default_environment() -> String {
    "development".to_string()
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl PantryConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(ConfigError::from)
    }

    /// Whether this configuration targets a production environment.
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
