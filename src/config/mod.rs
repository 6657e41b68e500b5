//! Configuration management for the static host

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::app::api::DEFAULT_BACKEND_URL;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_bind")]
    pub bind: String,

    /// Directory holding the built bundle (`index.html` plus assets)
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// Backend the bundle was built against, reported by `/healthz`
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind: default_bind(),
            public_dir: default_public_dir(),
            backend_url: default_backend_url(),
        }
    }
}

fn default_port() -> u16 {
    8080
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("dist/public")
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

pub fn load_config() -> Result<Config> {
    let config_dir = directories::ProjectDirs::from("com", "pixflow", "pixflow-web")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    load_config_from(&config_dir)
}

/// Load `config.{toml,json,yaml}` from `config_dir`, then apply
/// `PIXFLOW_*` environment overrides.
pub fn load_config_from(config_dir: &Path) -> Result<Config> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("port", default_port())?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy())
                .required(false),
        )
        // Override with environment variables (PIXFLOW_PORT, PIXFLOW_BACKEND_URL, etc.)
        .add_source(
            ::config::Environment::with_prefix("PIXFLOW")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}
