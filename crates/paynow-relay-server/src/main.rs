use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use relay_server::{config::ServerConfig, cors::build_cors, routes, state::AppState};

/// Request bodies above this size are refused before parsing.
const MAX_BODY_BYTES: usize = 65_536;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    let port = config.port;
    let allowed_origins = config.allowed_origins.clone();

    tracing::info!("Starting paynow-relay on port {port}");
    tracing::info!("Gateway: {}", config.api_url);
    tracing::info!("Gateway timeout: {}s", config.gateway_timeout.as_secs());
    tracing::info!(
        "Continue URL: {}",
        config.continue_url.as_deref().unwrap_or("(gateway default)")
    );
    tracing::info!("CORS origins: {}", allowed_origins.join(", "));

    let state = match AppState::new(config) {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            tracing::error!("Failed to build gateway client: {e}");
            std::process::exit(1);
        }
    };

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
            .wrap(Logger::default())
            .wrap(build_cors(&allowed_origins))
            .configure(routes::configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
