use std::sync::Arc;

use auth::TokenVerifier;
use plan_service::config::Config;
use plan_service::inbound::http::router::create_router;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plan_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "plan-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // Fails here if no source provides the token secret
    let config = Config::load()?;

    tracing::info!(http_port = config.server.http_port, "Configuration loaded");

    let verifier = Arc::new(TokenVerifier::new(config.jwt.secret.as_bytes()));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(verifier);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
