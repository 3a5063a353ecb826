//! HTTP surface of the callback server.
//!
//! - `callback` - Google OAuth callback (/auth/google/callback)
//! - `health` - Health check endpoint (/healthz)
//! - `openapi` - OpenAPI/Utoipa configuration, served at /api-docs

pub mod callback;
pub mod health;
pub mod openapi;

pub use callback::{AUTH_TAG, CallbackState};
pub use health::OPS_TAG;

use crate::config::AppConfig;
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_redoc::{Redoc, Servable};

/// Builds the full application router without binding a socket.
pub fn app(state: CallbackState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(openapi::ApiDoc::openapi())
        .merge(callback::router(state))
        .routes(routes!(health::health))
        .layer(TraceLayer::new_for_http())
        .split_for_parts();

    router.merge(Redoc::with_url("/api-docs", api))
}

/// Starts the web server with all configured routes.
#[tracing::instrument(skip(config), fields(addr = %config.bind_address))]
pub async fn start_webserver(config: &AppConfig) -> color_eyre::Result<()> {
    let router = app(CallbackState::from_config(config));

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!(
        addr = %config.bind_address,
        backend = %config.backend.auth_url,
        redirect = %config.redirect_url,
        "Server running"
    );
    axum::serve(listener, router)
        .await
        .map_err(|e| color_eyre::Report::msg(format!("Failed to start server: {e}")))?;

    Ok(())
}
