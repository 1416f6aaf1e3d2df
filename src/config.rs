use crate::models::DocumentFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Environment variable holding the shared secret
pub const API_KEY_ENV: &str = "API_SECRET_KEY";
/// Environment variable overriding the listen port
pub const PORT_ENV: &str = "PORT";
/// Environment variable overriding the bind address
pub const BIND_ENV: &str = "RAWTEXT_BIND";

/// Application configuration loaded from settings.toml and the environment.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    /// Formats whose extraction routes are mounted
    #[serde(default = "default_formats")]
    pub formats: Vec<DocumentFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub api_key: Option<String>,
}

// Keeps the secret out of logs and panic messages.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_max_upload_bytes() -> usize {
    32 * 1024 * 1024
}

fn default_formats() -> Vec<DocumentFormat> {
    DocumentFormat::ALL.to_vec()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            formats: default_formats(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration from the given path, the default location, or defaults,
    /// then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = PathBuf::from("config/settings.toml");
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from an environment lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.is_empty()) {
            self.auth.api_key = Some(key);
        }
        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port
                .parse()
                .with_context(|| format!("Invalid {} value: {}", PORT_ENV, port))?;
        }
        if let Some(bind) = lookup(BIND_ENV).filter(|b| !b.is_empty()) {
            self.server.bind = bind;
        }
        Ok(())
    }

    /// Socket address the server listens on
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.bind, self.server.port);
        addr.parse()
            .with_context(|| format!("Invalid bind address: {}", addr))
    }

    /// The shared secret, if one is configured
    pub fn api_key(&self) -> Option<&str> {
        self.auth.api_key.as_deref()
    }

    /// Whether the extraction route for a format is mounted
    pub fn serves(&self, format: DocumentFormat) -> bool {
        self.formats.contains(&format)
    }
}
