mod health;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use secrecy::SecretString;
use tonebridge_config::Config;
use tonebridge_relay::{ChatBackend, GroqClient, RelayState, relay_router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Environment variable supplying the Groq credential when the config file
/// does not
const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// A missing API key does not fail startup: the relay enters permanent
    /// degraded mode and every conversion returns 500 until a restart.
    pub fn new(config: Config) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 5000)));

        let backend = resolve_api_key(&config).map_or_else(
            || {
                tracing::error!(
                    "no Groq API key configured ({API_KEY_ENV} unset); conversions will fail"
                );
                None
            },
            |api_key| {
                tracing::info!("Groq client initialized");
                let client = GroqClient::new(api_key, config.groq.base_url.clone());
                Some(Arc::new(client) as Arc<dyn ChatBackend>)
            },
        );

        let relay_state = RelayState::new(backend, config.groq.model.clone());

        let mut app = relay_router(relay_state);

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Anything the API does not claim falls through to the front-end bundle
        app = app.fallback_service(
            ServeDir::new(&config.server.assets_dir).append_index_html_on_directories(true),
        );

        app = app.layer(TraceLayer::new_for_http());

        if config.server.cors {
            app = app.layer(CorsLayer::permissive());
        }

        Self {
            router: app,
            listen_address,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

/// Resolve the Groq credential from config, falling back to the environment
fn resolve_api_key(config: &Config) -> Option<SecretString> {
    config.groq.api_key.clone().or_else(|| {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .map(SecretString::from)
    })
}
