//! Layered application configuration.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults (the reference deployment values)
//! 2. YAML file passed with `--config`
//! 3. environment variables `CALCULATOR__<SECTION>__<KEY>`
//! 4. CLI overrides ([`AppConfig::apply_cli_overrides`])

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Environment variable prefix; nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "CALCULATOR__";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
    #[error("invalid listen_addr '{addr}': {source}")]
    InvalidListenAddr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Complete configuration shared by the server and client binaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub client: ClientConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// TCP address the gRPC server binds to.
    pub listen_addr: String,
    /// Register the gRPC server reflection service.
    pub reflection: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:50051".to_owned(),
            reflection: true,
        }
    }
}

impl ServerConfig {
    /// # Errors
    /// Returns [`ConfigError::InvalidListenAddr`] if `listen_addr` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.listen_addr
            .parse()
            .map_err(|source| ConfigError::InvalidListenAddr {
                addr: self.listen_addr.clone(),
                source,
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Server URI, e.g. `http://localhost:50051`.
    pub endpoint: String,
    pub connect_timeout_ms: u64,
    /// Budget shared by every call of one client run.
    pub deadline_ms: u64,
    /// Pause between consecutive calls.
    pub call_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:50051".to_owned(),
            connect_timeout_ms: 10_000,
            deadline_ms: 5_000,
            call_delay_ms: 500,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    #[must_use]
    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }

    #[must_use]
    pub fn call_delay(&self) -> Duration {
        Duration::from_millis(self.call_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, used when `RUST_LOG` is unset.
    pub level: String,
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            ansi: true,
        }
    }
}

impl AppConfig {
    /// Load the layered configuration.
    ///
    /// Without a path only defaults and environment variables apply.
    ///
    /// # Errors
    /// Returns an error if `path` does not exist or if any layer fails to
    /// deserialize into [`AppConfig`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| ConfigError::Invalid(Box::new(e)))
    }

    /// Apply CLI verbosity (`-v` info, `-vv` debug, `-vvv` trace).
    ///
    /// Zero keeps whatever level the lower layers produced.
    pub fn apply_cli_overrides(&mut self, verbose: u8) {
        let level = match verbose {
            0 => return,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        level.clone_into(&mut self.logging.level);
    }
}
