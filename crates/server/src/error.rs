use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("Timeout after {0:?} while posting authorization code")]
    Timeout(std::time::Duration),
    #[error("Network error while posting authorization code: {0}")]
    Network(String),
    #[error("HTTP {status} from auth backend: {context}")]
    Http { status: StatusCode, context: String },
    #[error("Invalid JSON body from auth backend: {0}")]
    InvalidJson(String),
}

impl ForwardError {
    /// Status reported by the backend, if the request got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ForwardError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManifestError {
    #[error("Manifest must list at least one content glob")]
    NoContent,
    #[error("Content glob at index {0} is blank")]
    BlankGlob(usize),
    #[error("Font token name must not be blank")]
    BlankFontToken,
    #[error("Font token '{0}' has an empty family stack")]
    EmptyFontStack(String),
    #[error("Plugin '{0}' is listed more than once")]
    DuplicatePlugin(&'static str),
    #[error("Unknown plugin: {0}")]
    UnknownPlugin(String),
    #[error("Failed to load manifest: {0}")]
    Load(String),
}
