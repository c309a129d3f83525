use std::sync::Arc;

use relay::{DonationRelay, GatewayClient, RelayError};

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub relay: Arc<DonationRelay>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self, RelayError> {
        let gateway = GatewayClient::new(
            &config.api_url,
            config.credentials(),
            config.gateway_timeout,
        )?;
        let relay = DonationRelay::new(
            gateway,
            config.description.clone(),
            config.continue_url.clone(),
        );

        Ok(Self {
            config: Arc::new(config),
            relay: Arc::new(relay),
        })
    }
}
