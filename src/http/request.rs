use serde::Serialize;

use crate::error::ProbeError;

use super::method::HttpMethod;

/// A single request against a path of the probed backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ProbeRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn options(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Options, path)
    }

    /// POST with `payload` encoded as JSON and a matching `Content-Type`.
    pub fn post_json<T: Serialize>(
        path: impl Into<String>,
        payload: &T,
    ) -> Result<Self, ProbeError> {
        let body = serde_json::to_string(payload)?;
        let mut request =
            Self::new(HttpMethod::Post, path).with_header("Content-Type", "application/json");
        request.body = Some(body);
        Ok(request)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}
