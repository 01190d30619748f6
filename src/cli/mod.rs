use clap::{ArgAction, Parser};

/// Smoke-tests the local backend: health, CORS preflight, and login reachability.
///
/// Exits 0 when the backend is reachable and minimally functional, 1 otherwise.
#[derive(Parser, Debug)]
#[command(name = "backend-probe", version)]
pub struct Cli {
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Log request details to stderr (-v info, -vv debug)"
    )]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
