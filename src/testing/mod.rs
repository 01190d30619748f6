//! # Backend checks
//!
//! Runs the three probes in a fixed order against one backend:
//! health, CORS preflight on the login route, and login reachability.
//!
//! Only a transport failure on the health or login probe fails the run.
//! Status codes are advisory and printed for a human to judge.

pub mod report;

use serde::Serialize;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::{HEALTH_PATH, LOGIN_PATH, ProbeConfig};
use crate::error::ProbeError;
use crate::http::{ProbeClient, ProbeRequest, ProbeResponse};

use report::Reporter;

/// Statuses showing the login route is alive, whatever the auth outcome.
pub const LOGIN_REACHABLE_STATUSES: [u16; 3] = [200, 401, 422];

pub const CORS_HEADER_FRAGMENT: &str = "access-control";
pub const ALLOW_ORIGIN_HEADER: &str = "access-control-allow-origin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Health,
    CorsPreflight,
    LoginReachability,
}

impl Check {
    pub const ALL: [Check; 3] = [Check::Health, Check::CorsPreflight, Check::LoginReachability];

    /// 1-based position in the run.
    pub fn number(self) -> usize {
        match self {
            Check::Health => 1,
            Check::CorsPreflight => 2,
            Check::LoginReachability => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Check::Health => "Testing /health endpoint",
            Check::CorsPreflight => "Testing CORS (OPTIONS request)",
            Check::LoginReachability => "Testing /api/v1/auth/login endpoint",
        }
    }

    pub fn request(self, config: &ProbeConfig) -> Result<ProbeRequest, ProbeError> {
        match self {
            Check::Health => Ok(ProbeRequest::get(HEALTH_PATH)),
            Check::CorsPreflight => Ok(ProbeRequest::options(LOGIN_PATH)
                .with_header("Origin", config.origin.as_str())
                .with_header("Access-Control-Request-Method", "POST")
                .with_header("Access-Control-Request-Headers", "content-type")),
            Check::LoginReachability => ProbeRequest::post_json(
                LOGIN_PATH,
                &LoginCredentials {
                    login: &config.login,
                    password: &config.password,
                },
            ),
        }
    }

    pub fn evaluate(self, response: &ProbeResponse) -> Outcome {
        match self {
            Check::Health if response.status == 200 => Outcome::Passed,
            Check::Health => Outcome::Failed,
            Check::CorsPreflight if response.header(ALLOW_ORIGIN_HEADER).is_some() => {
                Outcome::Passed
            }
            Check::CorsPreflight => Outcome::Warning,
            Check::LoginReachability if LOGIN_REACHABLE_STATUSES.contains(&response.status) => {
                Outcome::Passed
            }
            Check::LoginReachability => Outcome::Warning,
        }
    }

    /// Outcome when the request could not complete, whatever the cause. Only
    /// the preflight is allowed to fail without ending the run.
    pub fn error_outcome(self) -> Outcome {
        match self {
            Check::CorsPreflight => Outcome::Warning,
            Check::Health | Check::LoginReachability => Outcome::Fatal,
        }
    }
}

#[derive(Serialize)]
struct LoginCredentials<'a> {
    login: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    /// Suspicious but does not affect the exit code.
    Warning,
    /// Wrong status; reported, the run continues.
    Failed,
    /// The run stops here and fails.
    Fatal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub check: Check,
    pub status: Option<u16>,
    pub outcome: Outcome,
    pub duration_ms: u128,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub base_url: String,
    pub results: Vec<CheckResult>,
    pub success: bool,
    pub duration_ms: u128,
}

impl RunReport {
    pub fn exit_code(&self) -> u8 {
        if self.success { 0 } else { 1 }
    }

    pub fn result(&self, check: Check) -> Option<&CheckResult> {
        self.results.iter().find(|result| result.check == check)
    }

    pub fn warnings(&self) -> usize {
        self.results
            .iter()
            .filter(|result| result.outcome == Outcome::Warning)
            .count()
    }
}

/// Runs every check in order, writing the human report to `out`.
///
/// Returns `Err` only when the report itself cannot be written; check
/// failures are recorded in the returned [`RunReport`].
pub async fn run<W: Write>(config: &ProbeConfig, out: &mut W) -> Result<RunReport, ProbeError> {
    let started = Instant::now();
    let client = ProbeClient::new(config)?;
    let mut reporter = Reporter::new(out);

    info!(
        base_url = %config.base_url,
        timeout_ms = client.timeout().as_millis() as u64,
        "starting backend probe"
    );
    reporter.banner(&config.base_url)?;

    let mut results = Vec::with_capacity(Check::ALL.len());
    let mut success = true;

    for check in Check::ALL {
        reporter.check_started(check)?;
        let check_started = Instant::now();

        let sent = match check.request(config) {
            Ok(request) => client.send(&request).await,
            Err(err) => Err(err),
        };

        let (status, outcome) = match sent {
            Ok(response) => {
                let outcome = check.evaluate(&response);
                reporter.response(check, &response, outcome)?;
                (Some(response.status), outcome)
            }
            Err(err) => {
                let outcome = check.error_outcome();
                reporter.error(check, &err)?;
                (None, outcome)
            }
        };

        let duration_ms = check_started.elapsed().as_millis();
        debug!(
            check = check.number(),
            ?outcome,
            ?status,
            duration_ms = duration_ms as u64,
            "check finished"
        );
        results.push(CheckResult {
            check,
            status,
            outcome,
            duration_ms,
        });

        if outcome == Outcome::Fatal {
            warn!(check = check.number(), "aborting probe run");
            success = false;
            break;
        }
    }

    let report = RunReport {
        base_url: config.base_url.clone(),
        results,
        success,
        duration_ms: started.elapsed().as_millis(),
    };
    reporter.summary(&report, config)?;
    info!(success = report.success, warnings = report.warnings(), "backend probe finished");

    Ok(report)
}
