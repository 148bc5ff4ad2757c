//! Bootstrap library for the calculator binaries
//!
//! - [`config`]: layered configuration (defaults, YAML, environment, CLI)
//! - [`logging`]: `tracing` subscriber installation

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod config;
pub mod logging;

pub use config::{
    AppConfig, ClientConfig, ConfigError, ENV_PREFIX, LoggingConfig, ServerConfig,
};
pub use logging::init_logging;
