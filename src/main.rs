//! postboard server entry point.
//!
//! Loads configuration, prepares the database and serves the site.

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use postboard::app_state::AppState;
use postboard::auth::AuthGate;
use postboard::build_router;
use postboard::config::{AppConfig, LogFormat};
use postboard::storage::PostRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    tracing::info!(addr = %config.listen_addr, "starting postboard");
    if config.uses_default_secret() {
        tracing::warn!("SECRET_KEY not set; sessions are signed with the built-in default");
    }

    // Build storage layer
    let posts = PostRepository::connect(
        &config.database_url,
        config.database_max_connections,
        Duration::from_secs(config.database_connect_timeout_secs),
    )
    .await?;
    posts.init().await?;

    // Build application state
    let auth = AuthGate::new(
        &config.secret_key,
        config.admin_password.clone(),
        config.session_ttl_secs,
    );
    if !auth.login_enabled() {
        tracing::warn!("ADMIN_PASSWORD not set; admin login is disabled");
    }
    let app_state = AppState::new(posts.clone(), auth);

    // Build router
    let app = build_router(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    posts.close().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
