use std::io::{self, Write};

use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::http::ProbeResponse;

use super::{CORS_HEADER_FRAGMENT, Check, Outcome, RunReport};

const RULE_WIDTH: usize = 50;

/// Writes the human-readable progress report.
pub struct Reporter<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> Reporter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out }
    }

    pub fn banner(&mut self, base_url: &str) -> io::Result<()> {
        self.rule()?;
        writeln!(self.out, "Testing Backend Connection")?;
        self.rule()?;
        writeln!(self.out, "\nTesting: {base_url}")
    }

    pub fn check_started(&mut self, check: Check) -> io::Result<()> {
        writeln!(self.out, "\n{}. {}...", check.number(), check.title())
    }

    pub fn response(
        &mut self,
        check: Check,
        response: &ProbeResponse,
        outcome: Outcome,
    ) -> io::Result<()> {
        writeln!(self.out, "   Status Code: {}", response.status)?;

        match check {
            Check::Health => {
                writeln!(self.out, "   Response: {}", response.body_preview())?;
                if outcome == Outcome::Passed {
                    writeln!(self.out, "   ✓ Health check passed!")
                } else {
                    writeln!(self.out, "   ✗ Health check failed!")
                }
            }
            Check::CorsPreflight => {
                writeln!(self.out, "   CORS Headers:")?;
                for (name, value) in response.headers_containing(CORS_HEADER_FRAGMENT) {
                    writeln!(self.out, "     {name}: {value}")?;
                }
                if outcome == Outcome::Passed {
                    writeln!(self.out, "   ✓ CORS is configured!")
                } else {
                    writeln!(self.out, "   ⚠ CORS headers not found")
                }
            }
            Check::LoginReachability => {
                writeln!(self.out, "   Response: {}", response.body_preview())?;
                if outcome == Outcome::Passed {
                    writeln!(self.out, "   ✓ Endpoint is reachable (got expected response)")
                } else {
                    writeln!(self.out, "   ⚠ Unexpected status code: {}", response.status)
                }
            }
        }
    }

    pub fn error(&mut self, check: Check, err: &ProbeError) -> io::Result<()> {
        match (check, err) {
            (Check::CorsPreflight, _) => writeln!(self.out, "   ⚠ CORS test error: {err}"),
            (Check::Health, ProbeError::Connection { .. }) => {
                writeln!(self.out, "   ✗ Connection Error: {err}")?;
                writeln!(self.out, "   → Backend is not running or not accessible")
            }
            (Check::Health, ProbeError::Timeout { .. }) => {
                writeln!(self.out, "   ✗ Request timed out")
            }
            (_, ProbeError::Connection { .. }) => {
                writeln!(self.out, "   ✗ Connection Error: {err}")
            }
            _ => writeln!(self.out, "   ✗ Error: {err}"),
        }
    }

    pub fn summary(&mut self, report: &RunReport, config: &ProbeConfig) -> io::Result<()> {
        if report.success {
            writeln!(self.out)?;
            self.rule()?;
            writeln!(self.out, "✓ Backend is running and accessible!")?;
            return self.rule();
        }

        writeln!(self.out, "\n💡 Make sure:")?;
        writeln!(self.out, "   1. Backend server is started")?;
        writeln!(self.out, "   2. Backend is listening on {}", config.base_url)?;
        writeln!(self.out, "   3. CORS is configured to allow requests from {}", config.origin)
    }

    fn rule(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))
    }
}
