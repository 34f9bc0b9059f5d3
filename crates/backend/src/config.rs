//! Server configuration.

/// Port the backend always listens on.
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration.
///
/// Host and port are fixed. Only `RUST_LOG` is read from the environment,
/// and only to set the tracing filter directive (default: `"info"`).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    /// Builds the configuration, picking up `RUST_LOG` if set.
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            ..Self::default()
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
        }
    }
}
