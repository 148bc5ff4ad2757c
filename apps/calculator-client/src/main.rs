use std::path::PathBuf;
use std::process::ExitCode;

use calc_bootstrap::{AppConfig, LoggingConfig, init_logging};
use clap::Parser;

/// Calculator demonstration client
#[derive(Parser)]
#[command(name = "calculator-client", version)]
#[command(about = "Calls Add on the calculator server for a fixed set of operands")]
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

    match calculator_client::run(&config.client).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "calculator client aborted");
            ExitCode::FAILURE
        }
    }
}
