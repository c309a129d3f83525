//! CORS configuration for the relay.

use actix_cors::Cors;

/// Build the CORS middleware from allowed origins.
///
/// `*` (the default) lets any origin call the relay and answers with a
/// wildcard `Access-Control-Allow-Origin`.
pub fn build_cors(allowed_origins: &[String]) -> Cors {
    if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        return Cors::default()
            .allow_any_origin()
            .send_wildcard()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);
    }

    let mut cors = Cors::default();
    for origin in allowed_origins {
        cors = cors.allowed_origin(origin);
    }
    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            actix_web::http::header::ACCEPT,
            actix_web::http::header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
