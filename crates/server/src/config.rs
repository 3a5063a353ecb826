use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration build error: {0}")]
    Build(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Where the authorization code is posted and on whose behalf.
#[derive(Clone, Debug, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_auth_url")]
    pub auth_url: Url,
    /// Placeholder account id sent alongside every code.
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// No timeout is applied unless this is set.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            auth_url: default_auth_url(),
            user_id: default_user_id(),
            timeout_secs: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,
    /// Browser destination after the callback, whatever the backend said.
    #[serde(default = "default_redirect_url")]
    pub redirect_url: Url,
    #[serde(default)]
    pub backend: BackendConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            redirect_url: default_redirect_url(),
            backend: BackendConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn backend_timeout(&self) -> Option<Duration> {
        self.backend.timeout_secs.map(Duration::from_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            ("redirect_url", &self.redirect_url),
            ("backend.auth_url", &self.backend.auth_url),
        ] {
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ConfigError::Validation(format!(
                    "{name} must be an http(s) URL, got scheme '{}'",
                    url.scheme()
                )));
            }
        }
        if self.backend.timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "backend.timeout_secs must be > 0 when set".into(),
            ));
        }
        Ok(())
    }
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_redirect_url() -> Url {
    Url::parse("http://localhost:5173/docs").expect("static redirect url is valid")
}

fn default_auth_url() -> Url {
    Url::parse("http://localhost:3000/auth/google").expect("static backend url is valid")
}

fn default_user_id() -> String {
    "12345".to_string()
}

/// Load application configuration from an optional `config.yaml` + environment overrides.
///
/// Environment variables use the `APP` prefix and double underscores as the key path
/// separator, e.g. `APP__BACKEND__AUTH_URL` or `APP__REDIRECT_URL`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from("config.yaml")
}

/// Same as [`load_config`] but reads the given file (which may be absent).
pub fn load_config_from(path: &str) -> Result<AppConfig, ConfigError> {
    load_config_with(path, env_source())
}

/// Reads `path` and layers `env` on top. Callers other than [`load_config_from`] can
/// hand in an [`config::Environment`] backed by a fixed map instead of the process env.
pub fn load_config_with(path: &str, env: config::Environment) -> Result<AppConfig, ConfigError> {
    use config::{Config, File};
    let cfg = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(env)
        .build()?;

    let app: AppConfig = cfg.try_deserialize()?;
    app.validate()?;
    Ok(app)
}

/// `APP__SECTION__KEY` overrides.
pub fn env_source() -> config::Environment {
    config::Environment::with_prefix("APP").separator("__")
}
