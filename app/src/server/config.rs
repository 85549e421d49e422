//! Runtime settings loaded via OrthoConfig, and the server configuration
//! derived from them.

use std::path::{Path, PathBuf};

use actix_web::cookie::Key;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LATENCY_SCALE_PERCENT: u32 = 100;
const DEFAULT_SESSION_KEY_FILE: &str = "/var/run/secrets/session_key";
const MIN_KEY_MATERIAL: usize = 32;

/// Settings for the todo server. Every field can come from the command
/// line, a config file or `TODO_APP_*` environment variables.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TODO_APP")]
pub struct AppSettings {
    /// Interface to listen on.
    pub host: Option<String>,
    /// Port to listen on.
    pub port: Option<u16>,
    /// Simulated store latency as a percentage of the baseline delays.
    /// `0` turns the delays off.
    pub latency_scale_percent: Option<u32>,
    /// File holding at least 32 bytes of session key material.
    pub session_key_file: Option<PathBuf>,
    /// Mark the session cookie `Secure`. Defaults to on in release builds
    /// and off in debug builds, which usually serve plain HTTP.
    pub cookie_secure: Option<bool>,
    /// Fall back to a throwaway session key when the key file is missing.
    #[ortho_config(default = false)]
    pub allow_ephemeral_key: bool,
}

impl AppSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn latency_scale_percent(&self) -> u32 {
        self.latency_scale_percent
            .unwrap_or(DEFAULT_LATENCY_SCALE_PERCENT)
    }

    pub fn session_key_file(&self) -> PathBuf {
        self.session_key_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_KEY_FILE))
    }

    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure.unwrap_or(!cfg!(debug_assertions))
    }
}

/// Startup failures before the server binds.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// CLI, environment or file settings could not be merged.
    #[error("failed to load settings: {0}")]
    Settings(String),
    /// The session key file could not be read.
    #[error("failed to read session key at {path}: {source}")]
    KeyUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The session key file holds too little material.
    #[error(
        "session key at {path} has {len} bytes; at least {min} are required",
        min = MIN_KEY_MATERIAL
    )]
    KeyTooShort { path: String, len: usize },
}

impl From<ConfigError> for std::io::Error {
    fn from(value: ConfigError) -> Self {
        Self::other(value)
    }
}

/// Read the session signing key, or mint a throwaway one in debug builds
/// and when explicitly allowed.
///
/// # Errors
/// Fails when the key file is unreadable or too short and no fallback is
/// permitted.
pub fn session_key(settings: &AppSettings) -> Result<Key, ConfigError> {
    let path = settings.session_key_file();
    match read_key(&path) {
        Ok(key) => Ok(key),
        Err(error) if cfg!(debug_assertions) || settings.allow_ephemeral_key => {
            warn!(path = %path.display(), %error, "using temporary session key (dev only)");
            Ok(Key::generate())
        }
        Err(error) => Err(error),
    }
}

fn read_key(path: &Path) -> Result<Key, ConfigError> {
    let bytes = std::fs::read(path).map_err(|source| ConfigError::KeyUnreadable {
        path: path.display().to_string(),
        source,
    })?;
    if bytes.len() < MIN_KEY_MATERIAL {
        return Err(ConfigError::KeyTooShort {
            path: path.display().to_string(),
            len: bytes.len(),
        });
    }
    Ok(Key::derive_from(&bytes))
}

/// Everything `create_server` needs.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) bind_addr: (String, u16),
    pub(crate) latency_scale_percent: u32,
}

impl ServerConfig {
    /// Resolve settings into a server configuration.
    #[must_use]
    pub fn new(settings: &AppSettings, key: Key) -> Self {
        Self {
            key,
            cookie_secure: settings.cookie_secure(),
            bind_addr: (settings.host().to_owned(), settings.port()),
            latency_scale_percent: settings.latency_scale_percent(),
        }
    }
}
