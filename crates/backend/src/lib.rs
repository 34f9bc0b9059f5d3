//! Minimal HTTP backend.
//!
//! Serves two fixed responses: a plain text status line at `/` and a JSON
//! greeting at `/api/hello`. Everything else falls through to axum's
//! default 404/405 handling.

pub mod config;
pub mod error;
pub mod routes;

use std::future::Future;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::ServerError;

/// Creates the Axum application router.
pub fn create_app() -> Router {
    Router::new()
        .route("/", get(routes::root::index))
        .route("/api/hello", get(routes::hello::get))
        .layer(TraceLayer::new_for_http())
}

/// Binds the listen address from `config`.
pub async fn bind(config: &Config) -> Result<TcpListener, ServerError> {
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    let local_addr = listener
        .local_addr()
        .map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!(
        %local_addr,
        "Server is running on http://localhost:{}",
        local_addr.port()
    );
    Ok(listener)
}

/// Serves the application on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, create_app())
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
