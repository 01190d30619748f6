use std::io;
use std::process::ExitCode;

use backend_probe::cli::Cli;
use backend_probe::logging::init_tracing;
use backend_probe::{ProbeConfig, run};
use clap::Parser;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let config = ProbeConfig::default();
    let mut stdout = io::stdout().lock();

    match run(&config, &mut stdout).await {
        Ok(report) => ExitCode::from(report.exit_code()),
        Err(err) => {
            error!(error = %err, "backend probe could not complete");
            ExitCode::FAILURE
        }
    }
}
