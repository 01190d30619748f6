use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::config::ProbeConfig;
use crate::error::ProbeError;

use super::request::ProbeRequest;
use super::response::ProbeResponse;

/// Sends probe requests to one backend, one attempt each, bounded by a timeout.
#[derive(Debug, Clone)]
pub struct ProbeClient {
    client: Client,
    config: ProbeConfig,
}

impl ProbeClient {
    pub fn new(config: &ProbeConfig) -> Result<Self, ProbeError> {
        // Each check opens its own connection, so a backend that stops
        // listening mid-run is seen as unreachable.
        let client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|err| ProbeError::invalid(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    pub async fn send(&self, request: &ProbeRequest) -> Result<ProbeResponse, ProbeError> {
        let url = self.config.url(&request.path);
        let headers = build_headers(&request.headers)?;

        let mut builder = self
            .client
            .request(request.method.into(), &url)
            .headers(headers);
        if let Some(ref body) = request.body {
            builder = builder.body(body.clone());
        }

        debug!(method = %request.method, %url, "sending probe request");
        let started = Instant::now();

        let response = match builder.send().await {
            Ok(response) => response,
            Err(err) => {
                let err = ProbeError::from(err);
                warn!(method = %request.method, %url, error = %err, "probe request failed");
                return Err(err);
            }
        };

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    value.to_str().unwrap_or("<binary>").to_string(),
                )
            })
            .collect();
        let bytes = response.bytes().await?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        debug!(
            method = %request.method,
            %url,
            status,
            size = bytes.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "probe response received"
        );

        Ok(ProbeResponse {
            status,
            headers,
            body,
        })
    }
}

fn build_headers(input: &[(String, String)]) -> Result<HeaderMap, ProbeError> {
    let mut headers = HeaderMap::new();

    for (key, value) in input {
        if key.is_empty() {
            continue;
        }

        let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|err| {
            ProbeError::invalid(format!("invalid header name `{key}`: {err}"))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|err| {
            ProbeError::invalid(format!("invalid header value for `{key}`: {err}"))
        })?;
        headers.append(header_name, header_value);
    }

    Ok(headers)
}
