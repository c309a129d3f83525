use std::time::Instant;

use actix_web::{web, HttpResponse};
use relay::DonationRequest;

use crate::error::ApiError;
use crate::metrics;
use crate::state::AppState;

/// Parse the body by hand so wrong field types reach validation instead of
/// failing in an extractor. An empty body is treated as an empty form; any
/// JSON other than an object is refused.
fn parse_request(body: &[u8]) -> Result<DonationRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(DonationRequest::default());
    }
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|_| ApiError::InvalidBody)?;
    DonationRequest::from_json(value).ok_or(ApiError::InvalidBody)
}

/// POST /create-payment - Validate a donation and create a gateway payment
pub async fn create_payment(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let request = parse_request(&body)?;

    let start = Instant::now();
    let result = state.relay.handle(&request).await;
    metrics::record(&result, start.elapsed());

    Ok(HttpResponse::Ok().json(result?))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/create-payment", web::post().to(create_payment));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_an_empty_form() {
        let request = parse_request(b"  \n").unwrap();
        assert!(request.email.is_none());
        assert!(request.name.is_none());
    }

    #[test]
    fn non_object_bodies_are_invalid() {
        assert!(matches!(parse_request(b"[1,2]"), Err(ApiError::InvalidBody)));
        assert!(matches!(parse_request(b"{\"name\":"), Err(ApiError::InvalidBody)));
        assert!(matches!(parse_request(b"\"text\""), Err(ApiError::InvalidBody)));
        assert!(matches!(
            parse_request(br#"["Jan","jan@example.com",50]"#),
            Err(ApiError::InvalidBody)
        ));
    }
}
