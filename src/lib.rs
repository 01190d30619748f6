pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod testing;

pub use config::ProbeConfig;
pub use error::ProbeError;
pub use testing::{Check, CheckResult, Outcome, RunReport, run};
