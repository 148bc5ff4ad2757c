//! Calculator gRPC server binary.
//!
//! Configuration is loaded from defaults, then `--config` (YAML), then
//! `CALCULATOR__*` environment variables. The server runs until the process is
//! terminated; any startup or serve failure exits non-zero.

use std::path::PathBuf;
use std::process::ExitCode;

use calc_bootstrap::{AppConfig, LoggingConfig, init_logging};
use clap::Parser;

/// Calculator gRPC server
#[derive(Parser)]
#[command(name = "calculator-server", version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match AppConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LoggingConfig::default());
            tracing::error!(error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    config.apply_cli_overrides(cli.verbose);
    init_logging(&config.logging);

    tracing::info!(listen_addr = %config.server.listen_addr, "calculator server starting");

    match calculator::run_server(&config.server).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "calculator server failed");
            ExitCode::FAILURE
        }
    }
}
