//! OpenAPI/Utoipa configuration.

use crate::api::{callback::AUTH_TAG, health::OPS_TAG};
use utoipa::OpenApi;

/// OpenAPI documentation configuration.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "OAuth Callback Server",
        version = "1.0.0",
        description = "Receives the Google sign-in redirect, hands the authorization code to the auth backend and sends the browser on to the docs."
    ),
    tags(
        (name = OPS_TAG, description = "Liveness checks for orchestrators and load balancers"),
        (name = AUTH_TAG, description = "Identity provider callbacks")
    )
)]
pub struct ApiDoc;
