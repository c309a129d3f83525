use serde::{Deserialize, Serialize};

use crate::donation::DonationRequest;
use crate::error::{ErrorKind, RelayError};
use crate::gateway::GatewayClient;
use crate::payment::PaymentPayload;

/// Successful relay outcome: where to send the payer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectResult {
    pub redirect_url: String,
}

/// Validates donations and turns them into signed gateway payments.
///
/// Holds no mutable state, so one instance serves any number of concurrent
/// requests.
#[derive(Debug, Clone)]
pub struct DonationRelay {
    gateway: GatewayClient,
    description: String,
    continue_url: Option<String>,
}

impl DonationRelay {
    pub fn new(
        gateway: GatewayClient,
        description: impl Into<String>,
        continue_url: Option<String>,
    ) -> Self {
        Self {
            gateway,
            description: description.into(),
            continue_url,
        }
    }

    /// Validate → build payload → sign → call gateway → translate.
    ///
    /// Validation failures return before any outbound call is made.
    pub async fn handle(&self, request: &DonationRequest) -> Result<RedirectResult, RelayError> {
        let donation = request.validate().inspect_err(|e| {
            tracing::debug!(reason = %e, "donation rejected by validation");
        })?;

        let payload =
            PaymentPayload::new(&donation, &self.description, self.continue_url.as_deref());

        match self.gateway.create_payment(&payload).await {
            Ok(redirect_url) => {
                tracing::info!(
                    external_id = %payload.external_id,
                    amount = payload.amount,
                    "payment created"
                );
                Ok(RedirectResult { redirect_url })
            }
            Err(e) => {
                match e.kind() {
                    ErrorKind::GatewayRejection => tracing::warn!(
                        external_id = %payload.external_id,
                        error = %e,
                        "gateway rejected payment"
                    ),
                    _ => tracing::error!(
                        external_id = %payload.external_id,
                        error = %e,
                        "payment creation failed"
                    ),
                }
                Err(e)
            }
        }
    }
}
