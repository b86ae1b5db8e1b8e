//! Panel server implementation.

use pantry_core::config::PanelConfig;
use tokio::net::TcpListener;

use crate::error::PanelError;
use crate::routes;
use crate::state::AppState;

/// The admin panel server.
pub struct PanelServer {
    config: PanelConfig,
    state: AppState,
}

impl PanelServer {
    /// Create a new panel server with the given configuration and state.
    pub fn new(config: PanelConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Start the panel server.
    pub async fn run(&self) -> Result<(), PanelError> {
        let addr = self.config.listen_addr();
        tracing::info!(address = %addr, "Starting Pantry panel");

        let app = routes::create_router(self.state.clone());

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| PanelError::StartupFailed(e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| PanelError::StartupFailed(e.to_string()))?;

        Ok(())
    }

    /// Get the configured listen port.
    pub fn listen_port(&self) -> u16 {
        self.config.listen_port
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_api::Accessors;
    use pantry_core::config::ApiConfig;

    #[test]
    fn server_uses_the_configured_port() {
        let accessors = Accessors::new(&ApiConfig::default()).unwrap();
        let server = PanelServer::new(PanelConfig::default(), AppState::new(accessors));
        assert_eq!(server.listen_port(), 8000);
    }
}
