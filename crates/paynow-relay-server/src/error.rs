use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use relay::{ErrorKind, RelayError};

/// Message returned to callers for failures whose detail stays in the logs.
pub const SERVER_ERROR_MESSAGE: &str = "server error";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body is not a JSON object
    #[error("invalid request body")]
    InvalidBody,

    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::Relay(e) => match e.kind() {
                ErrorKind::Validation | ErrorKind::GatewayRejection => StatusCode::BAD_REQUEST,
                ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::InvalidBody => self.to_string(),
            // Unexpected causes are logged by the relay alongside the external id.
            ApiError::Relay(e) => e
                .caller_message()
                .unwrap_or_else(|| SERVER_ERROR_MESSAGE.to_string()),
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": message }))
    }
}
