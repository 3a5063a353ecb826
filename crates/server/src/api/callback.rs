//! Google OAuth callback.
//!
//! The identity provider redirects the browser to `/auth/google/callback?code=...`.
//! The code is posted to the auth backend once, and the browser is sent on to the
//! configured page with a `302 Found` whether or not the backend accepted it.

use crate::{
    client::{CodeExchange, CodeForwarder},
    config::AppConfig,
    logging::WideEvent,
};
use axum::{
    extract::{RawQuery, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use utoipa_axum::{router::OpenApiRouter, routes};

/// Tag for OpenAPI documentation.
pub const AUTH_TAG: &str = "Authentication";

/// Query parameters sent by the identity provider, as documented. Anything besides `code`
/// is ignored; extraction itself goes through [`first_code`].
#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct CallbackParams {
    /// Authorization code issued after user consent.
    pub code: Option<String>,
}

/// Shared state for the callback endpoint.
#[derive(Clone)]
pub struct CallbackState {
    pub forwarder: CodeForwarder,
    pub user_id: Arc<str>,
    pub redirect_url: Arc<str>,
}

impl CallbackState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            forwarder: CodeForwarder::new(config.backend.auth_url.clone(), config.backend_timeout()),
            user_id: Arc::from(config.backend.user_id.as_str()),
            redirect_url: Arc::from(config.redirect_url.as_str()),
        }
    }
}

/// Creates the callback router.
pub fn router(state: CallbackState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(google_callback))
        .with_state(state)
}

#[tracing::instrument(skip(state, query))]
#[utoipa::path(
    get,
    path = "/auth/google/callback",
    params(CallbackParams),
    tag = AUTH_TAG,
    operation_id = "Google OAuth Callback",
    summary = "Forward the Google authorization code",
    description = "Posts `{code, userId}` to the auth backend, then redirects. \
                   Backend failures are logged and never shown to the browser.",
    responses(
        (status = 302, description = "Always redirects to the configured page",
            headers(("Location" = String, description = "Redirect target")))
    )
)]
pub async fn google_callback(
    State(state): State<CallbackState>,
    RawQuery(query): RawQuery,
) -> Response {
    tracing::debug!(query = ?query, "Callback query");
    let params = CallbackParams {
        code: first_code(query.as_deref()),
    };

    let evt = WideEvent::new("google_callback");
    evt.add("code_present", params.code.is_some());
    tracing::info!(code_present = params.code.is_some(), "Google auth code received");

    let exchange = CodeExchange::new(params.code, state.user_id.as_ref());
    match state.forwarder.forward(&exchange).await {
        Ok(body) => {
            tracing::debug!(response = %body, "Auth backend response");
            evt.add("outcome", "forwarded");
            evt.info("Authorization code forwarded");
        }
        Err(e) => {
            evt.add_opt("backend_status", e.status().map(|s| s.as_u16()));
            evt.add("outcome", "failed");
            evt.add("error", &e);
            tracing::error!(error = %e, "Error during Google authentication");
            evt.error("Authorization code was not accepted");
        }
    }

    found(&state.redirect_url)
}

/// First `code` value in the query string, percent-decoded. Later repeats are ignored.
pub fn first_code(query: Option<&str>) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == "code")
        .map(|(_, value)| value.into_owned())
}

/// `302 Found` with a `Location` header.
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
