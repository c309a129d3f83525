use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::donation::ValidDonation;

/// Payer details sent to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buyer {
    pub email: String,
    pub first_name: String,
}

/// Wire-format body of a Paynow payment-creation request.
///
/// Field order here is the order on the wire, and the signature covers those
/// exact bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPayload {
    /// Amount in minor units (groszy).
    pub amount: u64,
    pub external_id: String,
    pub description: String,
    pub buyer: Buyer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continue_url: Option<String>,
}

impl PaymentPayload {
    /// Build a payload for a validated donation with a fresh external id.
    pub fn new(donation: &ValidDonation, description: &str, continue_url: Option<&str>) -> Self {
        Self {
            amount: donation.amount,
            external_id: Uuid::new_v4().to_string(),
            description: description.to_string(),
            buyer: Buyer {
                email: donation.email.clone(),
                first_name: donation.name.clone(),
            },
            continue_url: continue_url.map(str::to_string),
        }
    }
}

/// Pre-shared gateway credentials.
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub signature_key: Vec<u8>,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, signature_key: Vec<u8>) -> Self {
        Self {
            api_key: api_key.into(),
            signature_key,
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("signature_key", &"[REDACTED]")
            .finish()
    }
}

/// A serialized payload together with everything needed to send it.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    /// Exact request body; `signature` was computed over these bytes.
    pub body: Vec<u8>,
    /// Base64 HMAC-SHA256 of `body`.
    pub signature: String,
    pub api_key: String,
    /// Fresh per call, distinct from the payload's external id.
    pub idempotency_key: String,
}

impl SignedRequest {
    pub fn sign(
        payload: &PaymentPayload,
        credentials: &Credentials,
    ) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_vec(payload)?;
        let signature = crate::hmac::compute_signature(&credentials.signature_key, &body);

        Ok(Self {
            body,
            signature,
            api_key: credentials.api_key.clone(),
            idempotency_key: Uuid::new_v4().to_string(),
        })
    }
}
