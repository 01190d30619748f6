use std::error::Error as StdError;
use std::io::ErrorKind;

/// Failures a probe can run into.
///
/// `Connection` covers refused, unreachable and dropped connections;
/// `Timeout` means the backend accepted but did not answer in time. Everything
/// else happened mid-exchange or before a request was sent.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("{reason}")]
    Connection { reason: String },

    #[error("request timed out: {reason}")]
    Timeout { reason: String },

    #[error("{reason}")]
    Request { reason: String },

    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl ProbeError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        ProbeError::InvalidRequest {
            reason: reason.into(),
        }
    }

    fn classify(timeout: bool, connect: bool, reason: String) -> Self {
        if connect {
            ProbeError::Connection { reason }
        } else if timeout {
            ProbeError::Timeout { reason }
        } else {
            ProbeError::Request { reason }
        }
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        let reason = describe(&err);
        if err.is_builder() {
            return ProbeError::InvalidRequest { reason };
        }
        // A connect timeout sets both flags and counts as a connection failure.
        let connect = err.is_connect() || is_disconnect(&err);
        ProbeError::classify(err.is_timeout(), connect, reason)
    }
}

/// True when the peer reset or hung up on an established connection.
fn is_disconnect(err: &dyn StdError) -> bool {
    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            if matches!(
                io.kind(),
                ErrorKind::ConnectionReset | ErrorKind::ConnectionAborted | ErrorKind::BrokenPipe
            ) {
                return true;
            }
        }
        source = cause.source();
    }
    false
}

/// Renders an error together with its `source()` chain.
pub fn describe(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
