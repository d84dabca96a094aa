use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use microblog_service::Service;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// Microblog HTTP server.
pub struct MicroblogServer {
    config: ServerConfig,
    service: Arc<Service>,
}

impl MicroblogServer {
    /// Start the service workers for `config`. Must run inside a tokio runtime.
    pub fn new(config: ServerConfig) -> Self {
        let service = Arc::new(Service::new(&config.service));
        Self { config, service }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn service(&self) -> &Arc<Service> {
        &self.service
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.service))
    }

    /// Serve until Ctrl-C or SIGTERM, then drain the service.
    pub async fn serve(self) -> ServerResult<()> {
        self.serve_with_shutdown(shutdown_signal()).await
    }

    /// Serve until `signal` resolves, then drain the service.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        info!(addr = %listener.local_addr()?, "microblog server listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(signal)
            .await?;

        info!("no longer accepting requests; draining queues");
        let timeout = Duration::from_secs(self.config.shutdown_timeout_secs);
        match tokio::time::timeout(timeout, self.service.close()).await {
            Ok(summary) => {
                let summary = summary?;
                info!(
                    likes_processed = summary.likes_processed,
                    events_written = summary.events_written,
                    "shutdown complete"
                );
                Ok(())
            }
            Err(_) => {
                warn!(timeout_secs = self.config.shutdown_timeout_secs, "shutdown timed out");
                Err(ServerError::ShutdownTimeout(self.config.shutdown_timeout_secs))
            }
        }
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let (mut sigint, mut sigterm) = match (
            signal(SignalKind::interrupt()),
            signal(SignalKind::terminate()),
        ) {
            (Ok(sigint), Ok(sigterm)) => (sigint, sigterm),
            (Err(e), _) | (_, Err(e)) => {
                error!(error = %e, "failed to install signal handlers");
                return std::future::pending().await;
            }
        };
        tokio::select! {
            _ = sigint.recv() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    }
    info!("shutdown signal received");
}
