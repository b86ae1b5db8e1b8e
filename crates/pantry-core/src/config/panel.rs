//! Panel HTTP server configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the admin panel server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Host to bind the panel to.
    #[serde(default = "default_host")]
    pub listen_host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub listen_port: u16,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            listen_host: default_host(),
            listen_port: default_port(),
        }
    }
}

impl PanelConfig {
    /// The `host:port` address string the server binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.listen_host, self.listen_port)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}
