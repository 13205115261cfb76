//! Music Catalog server binary.

use std::sync::Arc;

use anyhow::Context;
use secrecy::ExposeSecret;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use music_catalog::adapters::auth::{BcryptPasswordHasher, JwtTokenService};
use music_catalog::adapters::http::{api_router, with_http_layers, AppState};
use music_catalog::adapters::postgres::{
    self, PostgresAlbumRepository, PostgresContactRepository, PostgresFavoriteRepository,
    PostgresUserRepository,
};
use music_catalog::application::{EnsureAdminCommand, EnsureAdminHandler};
use music_catalog::config::{AppConfig, ServerConfig};
use music_catalog::ports::UserRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    init_tracing(&config.server);
    tracing::info!(environment = ?config.server.environment, "Starting music catalog");

    let pool = postgres::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    if config.database.run_migrations {
        postgres::run_migrations(&pool)
            .await
            .context("failed to run migrations")?;
        tracing::info!("Migrations applied");
    }

    let users: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let hasher = Arc::new(BcryptPasswordHasher::new(config.auth.bcrypt_cost));
    let tokens = Arc::new(JwtTokenService::new(
        config.auth.jwt_secret.clone(),
        config.auth.token_ttl(),
        users.clone(),
    ));

    if let Some((username, password)) = config.auth.bootstrap_admin() {
        let outcome = EnsureAdminHandler::new(users.clone(), hasher.clone())
            .handle(EnsureAdminCommand {
                username: username.to_string(),
                password: password.expose_secret().clone(),
            })
            .await
            .context("failed to bootstrap admin account")?;
        tracing::info!(?outcome, "Bootstrap admin checked");
    }

    let state = AppState {
        albums: Arc::new(PostgresAlbumRepository::new(pool.clone())),
        users,
        contacts: Arc::new(PostgresContactRepository::new(pool.clone())),
        favorites: Arc::new(PostgresFavoriteRepository::new(pool.clone())),
        password_hasher: hasher,
        token_issuer: tokens.clone(),
        session_validator: tokens,
    };
    let app = with_http_layers(api_router(state), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    pool.close().await;
    tracing::info!("Shut down cleanly");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
