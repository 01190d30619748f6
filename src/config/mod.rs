//! Built-in target settings for a probe run.
//!
//! The probe always targets the same local backend; these values are not
//! read from files or the environment.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8002";
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum number of characters of a response body shown in the report.
pub const BODY_PREVIEW_CHARS: usize = 200;

pub const HEALTH_PATH: &str = "/health";
pub const LOGIN_PATH: &str = "/api/v1/auth/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub base_url: String,
    pub origin: String,
    pub timeout: Duration,
    pub login: String,
    pub password: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            timeout: DEFAULT_TIMEOUT,
            login: "test".to_string(),
            password: "test".to_string(),
        }
    }
}

impl ProbeConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Joins `path` onto the base URL without doubling the separator.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
