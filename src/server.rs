//! HTTP server lifecycle: pool setup, binding, graceful shutdown.

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;

use crate::api::routes::create_router;
use crate::config::{Environment, Settings};
use crate::db::establish_async_connection_pool;
use crate::state::AppState;

pub struct Server {
    settings: Settings,
}

impl Server {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Runs the server until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    /// Fails if the connection pool cannot be built or the listen address
    /// cannot be bound.
    pub async fn run(self) -> anyhow::Result<()> {
        tracing::info!(
            name = %self.settings.application.name,
            version = %self.settings.application.version,
            environment = %Environment::from_env(),
            "starting"
        );

        let pool = establish_async_connection_pool(&self.settings.database).await?;
        tracing::info!(
            max_connections = self.settings.database.max_connections,
            "database pool ready"
        );

        let router = create_router(AppState::new(pool, self.settings.jwt.clone()));

        let address = self.settings.server.address();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("failed to bind to {}", address))?;
        tracing::info!(%address, "listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("shutdown complete");
        Ok(())
    }
}

/// Resolves when the process receives Ctrl+C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
