use std::sync::Arc;

use auth::CredentialVerifier;
use auth::TokenCodec;
use sqlx::postgres::PgPoolOptions;
use sso_service::config::Config;
use sso_service::config::LoggerConfig;
use sso_service::domain::auth::service::AuthService;
use sso_service::inbound::grpc::SsoGrpcService;
use sso_service::outbound::repositories::PostgresRefreshTokenRepository;
use sso_service::outbound::repositories::PostgresUserRepository;
use sso_service::proto::sso_service_server::SsoServiceServer;
use tonic::transport::Server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let config = Config::load()?;

    init_tracing(&config.logger);

    tracing::info!(
        service = "sso-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );
    tracing::info!(
        grpc_port = config.server.grpc_port,
        request_timeout_secs = config.server.request_timeout_secs,
        access_token_ttl_secs = config.jwt.access_token_ttl_secs,
        refresh_token_ttl_secs = config.jwt.refresh_token_ttl_secs,
        "Configuration loaded"
    );

    let token_codec = TokenCodec::new(config.jwt.secret.as_bytes())?
        .with_lifetimes(config.jwt.access_token_ttl(), config.jwt.refresh_token_ttl());

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let refresh_token_repository = Arc::new(PostgresRefreshTokenRepository::new(pg_pool.clone()));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        refresh_token_repository,
        Arc::new(token_codec),
        CredentialVerifier::new(),
    ));

    let grpc_address = format!("0.0.0.0:{}", config.server.grpc_port).parse()?;
    let grpc_service = SsoGrpcService::new(auth_service);
    tracing::info!(
        address = %grpc_address,
        port = config.server.grpc_port,
        protocol = "grpc",
        "gRpc server listening"
    );

    Server::builder()
        .timeout(config.server.request_timeout())
        .add_service(SsoServiceServer::new(grpc_service))
        .serve_with_shutdown(grpc_address, shutdown_signal())
        .await?;

    pg_pool.close().await;
    tracing::info!("Server exited successfully");

    Ok(())
}

fn init_tracing(logger: &LoggerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("sso_service={level},auth={level}", level = logger.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logger.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping server");
}
