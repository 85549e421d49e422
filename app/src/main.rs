//! Todo server entry-point: loads settings, wires logging and serves pages.

mod server;

use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{AppSettings, ConfigError, ServerConfig, create_server, session_key};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| ConfigError::Settings(e.to_string()))?;
    let key = session_key(&settings)?;
    create_server(ServerConfig::new(&settings, key))?.await
}
