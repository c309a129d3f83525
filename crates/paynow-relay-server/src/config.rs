use std::env;
use std::time::Duration;

use relay::constants::{DEFAULT_API_URL, DEFAULT_DESCRIPTION, DEFAULT_GATEWAY_TIMEOUT_SECS};
use relay::Credentials;
use url::Url;

const DEFAULT_PORT: u16 = 3000;

#[derive(Clone)]
pub struct ServerConfig {
    /// Paynow API key, sent as `Api-Key`
    pub api_key: String,
    /// Paynow signature key for HMAC-SHA256 request signing
    pub signature_key: Vec<u8>,
    /// Server port
    pub port: u16,
    /// Gateway API base URL (path `/v3/payments` is appended)
    pub api_url: String,
    /// Where the gateway sends the payer after completion (None = gateway default)
    pub continue_url: Option<String>,
    /// Description attached to every payment
    pub description: String,
    /// Transport timeout for the gateway call
    pub gateway_timeout: Duration,
    /// CORS allowed origins (`*` = any)
    pub allowed_origins: Vec<String>,
    /// Bearer token required for /metrics (None = public)
    pub metrics_token: Option<String>,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("api_key", &"[REDACTED]")
            .field("signature_key", &"[REDACTED]")
            .field("port", &self.port)
            .field("api_url", &self.api_url)
            .field("continue_url", &self.continue_url)
            .field("description", &self.description)
            .field("gateway_timeout", &self.gateway_timeout)
            .field("allowed_origins", &self.allowed_origins)
            .field(
                "metrics_token",
                &self.metrics_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from an arbitrary variable lookup. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|s| !s.trim().is_empty());

        // Required: gateway credentials
        let api_key = var("API_KEY")
            .or_else(|| var("PAYNOW_API_KEY"))
            .ok_or(ConfigError::MissingRequired("API_KEY"))?;
        let signature_key = var("SIGNATURE_KEY")
            .or_else(|| var("PAYNOW_SIGNATURE_KEY"))
            .ok_or(ConfigError::MissingRequired("SIGNATURE_KEY"))?
            .into_bytes();

        let port = var("PORT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let api_url = var("PAYNOW_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        match Url::parse(&api_url) {
            Ok(url) if url.scheme() == "https" || url.scheme() == "http" => {}
            _ => return Err(ConfigError::InvalidUrl(api_url)),
        }

        let continue_url = var("CONTINUE_URL");
        if let Some(ref url) = continue_url {
            Url::parse(url).map_err(|_| ConfigError::InvalidUrl(url.clone()))?;
        }

        let description =
            var("PAYMENT_DESCRIPTION").unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        let gateway_timeout = Duration::from_secs(
            var("GATEWAY_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse().ok())
                .filter(|&secs| secs > 0)
                .unwrap_or(DEFAULT_GATEWAY_TIMEOUT_SECS),
        );

        let allowed_origins: Vec<String> = var("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| vec!["*".to_string()]);

        let metrics_token = var("METRICS_TOKEN");
        if metrics_token.is_none() {
            tracing::warn!("METRICS_TOKEN not set, /metrics endpoint is publicly accessible");
        }

        Ok(Self {
            api_key,
            signature_key,
            port,
            api_url,
            continue_url,
            description,
            gateway_timeout,
            allowed_origins,
            metrics_token,
        })
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.api_key.clone(), self.signature_key.clone())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingRequired(&'static str),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_with_only_credentials() {
        let config = config(&[("API_KEY", "key"), ("SIGNATURE_KEY", "sig")]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.description, DEFAULT_DESCRIPTION);
        assert_eq!(config.gateway_timeout, Duration::from_secs(30));
        assert_eq!(config.allowed_origins, vec!["*".to_string()]);
        assert!(config.continue_url.is_none());
        assert_eq!(config.signature_key, b"sig");
    }

    #[test]
    fn missing_credentials_are_reported() {
        let err = config(&[("SIGNATURE_KEY", "sig")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired("API_KEY")));

        let err = config(&[("API_KEY", "key"), ("SIGNATURE_KEY", "  ")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired("SIGNATURE_KEY")));
    }

    #[test]
    fn prefixed_credential_names_are_accepted() {
        let config = config(&[("PAYNOW_API_KEY", "key"), ("PAYNOW_SIGNATURE_KEY", "sig")]).unwrap();
        assert_eq!(config.api_key, "key");
    }

    #[test]
    fn overrides_are_read() {
        let config = config(&[
            ("API_KEY", "key"),
            ("SIGNATURE_KEY", "sig"),
            ("PORT", "8080"),
            ("PAYNOW_API_URL", "https://api.paynow.pl"),
            ("CONTINUE_URL", "https://fundacja.example/dziekujemy"),
            ("GATEWAY_TIMEOUT_SECS", "5"),
            ("ALLOWED_ORIGINS", "https://fundacja.example, https://www.fundacja.example"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_url, "https://api.paynow.pl");
        assert_eq!(
            config.continue_url.as_deref(),
            Some("https://fundacja.example/dziekujemy")
        );
        assert_eq!(config.gateway_timeout, Duration::from_secs(5));
        assert_eq!(
            config.allowed_origins,
            vec![
                "https://fundacja.example".to_string(),
                "https://www.fundacja.example".to_string()
            ]
        );
    }

    #[test]
    fn unparseable_numbers_fall_back_to_defaults() {
        let config = config(&[
            ("API_KEY", "key"),
            ("SIGNATURE_KEY", "sig"),
            ("PORT", "abc"),
            ("GATEWAY_TIMEOUT_SECS", "0"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.gateway_timeout, Duration::from_secs(30));
    }

    #[test]
    fn invalid_urls_are_rejected() {
        let err = config(&[
            ("API_KEY", "key"),
            ("SIGNATURE_KEY", "sig"),
            ("PAYNOW_API_URL", "ftp://api.paynow.pl"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));

        let err = config(&[
            ("API_KEY", "key"),
            ("SIGNATURE_KEY", "sig"),
            ("CONTINUE_URL", "not a url"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));
    }

    #[test]
    fn debug_redacts_secrets() {
        let config = config(&[
            ("API_KEY", "live-key"),
            ("SIGNATURE_KEY", "live-sig"),
            ("METRICS_TOKEN", "live-token"),
        ])
        .unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("live-key"));
        assert!(!debug.contains("live-sig"));
        assert!(!debug.contains("live-token"));
    }
}
