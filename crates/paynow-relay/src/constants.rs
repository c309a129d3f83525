/// Paynow sandbox API base URL.
pub const DEFAULT_API_URL: &str = "https://api.sandbox.paynow.pl";

/// Payment-creation path, appended to the API base URL.
pub const PAYMENTS_PATH: &str = "/v3/payments";

/// Description attached to every payment unless configured otherwise.
pub const DEFAULT_DESCRIPTION: &str = "Darowizna na cele fundacji";

/// Minor currency units (groszy) per PLN.
pub const MINOR_UNITS_PER_PLN: f64 = 100.0;

/// Largest integer an IEEE-754 double represents exactly (2^53 - 1).
pub const MAX_EXACT_AMOUNT: f64 = 9_007_199_254_740_991.0;

/// Default transport timeout for the outbound gateway call, in seconds.
pub const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 30;

pub const API_KEY_HEADER: &str = "Api-Key";
pub const SIGNATURE_HEADER: &str = "Signature";
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";
