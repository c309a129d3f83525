use thiserror::Error;

/// A caller-supplied field failed a precondition. `Display` is the message
/// returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("a valid email address is required")]
    Email,

    #[error("a valid name is required")]
    Name,

    #[error("amount must be a positive number")]
    Amount,
}

/// Errors returned by the relay pipeline.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The gateway refused the payment. Carries the gateway's own error detail.
    #[error("gateway rejected payment: {0}")]
    GatewayRejected(String),

    #[error("gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed gateway response: {0}")]
    MalformedResponse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse classification used by the HTTP boundary to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    GatewayRejection,
    Unexpected,
}

impl RelayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RelayError::Validation(_) => ErrorKind::Validation,
            RelayError::GatewayRejected(_) => ErrorKind::GatewayRejection,
            RelayError::Transport(_)
            | RelayError::MalformedResponse(_)
            | RelayError::Serialization(_) => ErrorKind::Unexpected,
        }
    }

    /// Message safe to show the caller, or `None` for unexpected failures
    /// whose detail must stay in the logs.
    pub fn caller_message(&self) -> Option<String> {
        match self {
            RelayError::Validation(e) => Some(e.to_string()),
            RelayError::GatewayRejected(detail) => Some(detail.clone()),
            _ => None,
        }
    }
}
