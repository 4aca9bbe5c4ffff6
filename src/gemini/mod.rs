pub mod logo_client;
pub mod transport;

use crate::{
    config::GeminiConfig,
    error::{LogoError, Result},
};
use std::sync::Arc;

pub use logo_client::LogoClient;
pub use transport::{ContentTransport, HttpTransport, TransportError};

/// Owns the Gemini connection for the lifetime of the process.
///
/// Built once at startup from a [`GeminiConfig`] and passed to whoever needs it.
#[derive(Clone)]
pub struct GeminiClient {
    logo_client: LogoClient,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config).map_err(|e| {
            LogoError::Configuration(format!("Failed to build HTTP client: {}", e))
        })?;

        log::debug!("Gemini client ready: {:?}", config);

        Ok(Self::with_transport(Arc::new(transport), config.model))
    }

    /// Uses a caller-supplied transport instead of the HTTP one.
    pub fn with_transport(transport: Arc<dyn ContentTransport>, model: impl Into<String>) -> Self {
        Self {
            logo_client: LogoClient::new(transport, model),
        }
    }

    pub fn logo(&self) -> &LogoClient {
        &self.logo_client
    }
}
