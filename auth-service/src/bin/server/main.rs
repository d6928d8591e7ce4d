use std::sync::Arc;

use auth::JwtCodec;
use auth_service::config::Config;
use auth_service::domain::identity::service::CredentialService;
use auth_service::domain::policy::engine::RoutePolicy;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::directory::HttpDirectoryClient;
use chrono::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "auth-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    anyhow::ensure!(
        config.jwt.secret.len() >= 32,
        "jwt secret must be at least 32 bytes for HMAC-SHA256"
    );

    tracing::info!(
        http_port = config.server.http_port,
        directory_base_url = %config.directory.base_url,
        directory_timeout_seconds = config.directory.timeout_seconds,
        token_lifetime_hours = config.jwt.lifetime_hours,
        "Configuration loaded"
    );

    let jwt_codec = Arc::new(JwtCodec::new(
        config.jwt.secret.as_bytes(),
        Duration::hours(config.jwt.lifetime_hours),
    ));
    let directory = Arc::new(HttpDirectoryClient::new(&config.directory)?);
    let credentials = Arc::new(CredentialService::new(directory));
    let policy = Arc::new(RoutePolicy::workforce());

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(credentials, jwt_codec, policy);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
