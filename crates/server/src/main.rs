use oauth_callback_server::api::start_webserver;
use oauth_callback_server::config::load_config;
use oauth_callback_server::logging::initialize_standard_tracing;

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;

    // A missing .env is fine; everything has a default.
    let _ = dotenvy::dotenv();

    initialize_standard_tracing();

    let config = load_config()?;
    tracing::info!(
        user_id = %config.backend.user_id,
        timeout_secs = ?config.backend.timeout_secs,
        "callback configuration"
    );

    start_webserver(&config).await?;
    Ok(())
}
