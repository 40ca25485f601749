//! Service entry point: loads settings, wires the adapters, and serves the
//! read API until shutdown, then drains the refresh examiner.

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use zephyr_backend::config::Settings;
use zephyr_backend::server::{ServiceHandles, build_service, create_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %error, "tracing init failed");
    }

    let settings = Settings::load().map_err(std::io::Error::other)?;
    let ServiceHandles { state, examiner } = build_service(&settings).await?;

    info!(listen_address = %settings.http.listen_address, "starting server");
    create_server(&settings.http, state)?.await?;

    // Let queued and running refreshes finish before the pools drop.
    examiner.close().await;
    Ok(())
}
