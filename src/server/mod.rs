//! Static host for the built web bundle.
//!
//! Serves files from `public_dir` and answers every unknown path with
//! `index.html` so client-side routes survive a reload.

use anyhow::Result;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::Config;

/// Body of `GET /healthz`
#[derive(Debug, Clone, Serialize)]
pub struct Health {
    pub service: &'static str,
    pub version: &'static str,
    pub backend_url: String,
}

async fn healthz(State(backend_url): State<Arc<str>>) -> Json<Health> {
    Json(Health {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        backend_url: backend_url.to_string(),
    })
}

/// Build the host router for a configuration.
pub fn router(config: &Config) -> Router {
    let index = config.public_dir.join("index.html");
    let assets = ServeDir::new(&config.public_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/healthz", get(healthz))
        .with_state(Arc::<str>::from(config.backend_url.as_str()))
        .fallback_service(assets)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: Config) -> Result<()> {
    if !config.public_dir.join("index.html").exists() {
        tracing::warn!(
            "No index.html in {}; build the web bundle first",
            config.public_dir.display()
        );
    }

    let app = router(&config);

    let addr: SocketAddr = format!("{}:{}", config.bind, config.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
