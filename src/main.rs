//! PixFlow web client entry point.
//!
//! With the `web` feature this launches the Dioxus app in the browser.
//! With the default `server` feature it runs the static host that serves
//! the built bundle.

#[cfg(feature = "server")]
use anyhow::Result;
#[cfg(feature = "server")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixflow_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PixFlow web host");

    // Load configuration
    let config = pixflow_web::config::load_config()?;
    tracing::info!(?config, "Configuration loaded");

    pixflow_web::server::serve(config).await
}

#[cfg(not(feature = "server"))]
fn main() {
    // launch() installs the console logger for tracing
    dioxus::launch(pixflow_web::app::App);
}
