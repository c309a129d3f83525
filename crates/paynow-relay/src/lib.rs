//! Donation relay core for the Paynow payment gateway.
//!
//! Takes a donation submission, validates it, builds a signed payment-creation
//! request and forwards it to Paynow's `/v3/payments` endpoint, returning the
//! redirect URL the payer should be sent to. This crate has no HTTP server;
//! `paynow-relay-server` puts it behind actix-web.
//!
//! # Pipeline
//!
//! 1. [`donation`]: lenient request shape and field-level validation
//! 2. [`payment`]: canonical payload construction and signing
//! 3. [`gateway`]: the single outbound call and response translation
//! 4. [`relay`]: [`DonationRelay::handle`](relay::DonationRelay::handle) ties the above together
//!
//! # Quick example
//!
//! ```no_run
//! use relay::{Credentials, DonationRelay, DonationRequest, GatewayClient};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let credentials = Credentials::new("api-key", b"signature-key".to_vec());
//! let gateway = GatewayClient::new(
//!     relay::constants::DEFAULT_API_URL,
//!     credentials,
//!     Duration::from_secs(30),
//! )
//! .unwrap();
//! let relay = DonationRelay::new(gateway, relay::constants::DEFAULT_DESCRIPTION, None);
//!
//! let request = DonationRequest::new("Jan Kowalski", "jan@example.com", 50.0);
//! let result = relay.handle(&request).await.unwrap();
//! println!("redirect payer to {}", result.redirect_url);
//! # }
//! ```

pub mod constants;
pub mod donation;
pub mod error;
pub mod gateway;
pub mod hmac;
pub mod payment;
pub mod relay;
pub mod security;

pub use donation::{DonationRequest, ValidDonation};
pub use error::{ErrorKind, RelayError, ValidationError};
pub use gateway::{translate_response, GatewayClient};
pub use payment::{Buyer, Credentials, PaymentPayload, SignedRequest};
pub use relay::{DonationRelay, RedirectResult};
