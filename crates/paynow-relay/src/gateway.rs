//! Outbound client for Paynow's payment-creation endpoint.

use std::time::Duration;

use serde_json::Value;

use crate::constants::{API_KEY_HEADER, IDEMPOTENCY_KEY_HEADER, PAYMENTS_PATH, SIGNATURE_HEADER};
use crate::error::RelayError;
use crate::payment::{Credentials, PaymentPayload, SignedRequest};

/// Issues exactly one signed `POST /v3/payments` per call. No retries.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    payments_url: String,
    credentials: Credentials,
}

impl GatewayClient {
    /// Build a client with its own connection pool. `timeout` bounds the
    /// whole request, including reading the response body.
    pub fn new(
        api_url: &str,
        credentials: Credentials,
        timeout: Duration,
    ) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self::with_client(http, api_url, credentials))
    }

    pub fn with_client(http: reqwest::Client, api_url: &str, credentials: Credentials) -> Self {
        Self {
            http,
            payments_url: format!("{}{}", api_url.trim_end_matches('/'), PAYMENTS_PATH),
            credentials,
        }
    }

    pub fn payments_url(&self) -> &str {
        &self.payments_url
    }

    /// Sign `payload` and submit it. Returns the payer redirect URL.
    pub async fn create_payment(&self, payload: &PaymentPayload) -> Result<String, RelayError> {
        let signed = SignedRequest::sign(payload, &self.credentials)?;
        self.send(signed).await
    }

    /// Submit an already-signed request. The body is sent untouched.
    pub async fn send(&self, signed: SignedRequest) -> Result<String, RelayError> {
        let resp = self
            .http
            .post(&self.payments_url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, signed.api_key.as_str())
            .header(SIGNATURE_HEADER, signed.signature.as_str())
            .header(IDEMPOTENCY_KEY_HEADER, signed.idempotency_key.as_str())
            .body(signed.body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.bytes().await?;
        translate_response(status, &body)
    }
}

/// Map a gateway response to a redirect URL or a rejection.
///
/// Success requires HTTP 201 and a non-empty string `redirectUrl`. Anything
/// else is a rejection whose detail is the compact JSON of `errors` when the
/// gateway sent one, otherwise of the whole body. A body that is not JSON is
/// a malformed response.
pub fn translate_response(status: u16, body: &[u8]) -> Result<String, RelayError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| RelayError::MalformedResponse(format!("status {status}: {e}")))?;

    if status == 201 {
        if let Some(url) = value
            .get("redirectUrl")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
        {
            return Ok(url.to_string());
        }
    }

    let detail = match value.get("errors") {
        Some(errors) if !errors.is_null() => errors.to_string(),
        _ => value.to_string(),
    };
    Err(RelayError::GatewayRejected(detail))
}
