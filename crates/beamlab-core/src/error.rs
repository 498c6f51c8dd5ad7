// ── Core error types ──
//
// User-facing errors from beamlab-core. Consumers never see reqwest or
// serde failures directly; the `From<beamlab_api::Error>` impl maps them
// into the categories the CLI reports on.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Local validation ─────────────────────────────────────────────
    /// The configuration is out of bounds. Nothing was sent.
    #[error("Invalid configuration: {}", errors.join("; "))]
    Validation { errors: Vec<String> },

    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach simulation backend at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request to simulation backend timed out")]
    Timeout,

    // ── Backend errors ───────────────────────────────────────────────
    #[error("Backend error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// HTTP status carried by a backend error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => *status,
            _ => None,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<beamlab_api::Error> for CoreError {
    fn from(err: beamlab_api::Error) -> Self {
        match err {
            beamlab_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(ToString::to_string)
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            beamlab_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            beamlab_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            beamlab_api::Error::Api { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            beamlab_api::Error::Deserialization { message, .. } => CoreError::Api {
                message: format!("Unexpected response from backend: {message}"),
                status: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_joined() {
        let err = CoreError::Validation {
            errors: vec!["first".into(), "second".into()],
        };
        assert_eq!(err.to_string(), "Invalid configuration: first; second");
    }

    #[test]
    fn backend_status_is_kept() {
        let err = CoreError::from(beamlab_api::Error::Api {
            status: 422,
            message: "bad frequency".into(),
        });
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.to_string(), "Backend error: bad frequency");
    }

    #[test]
    fn bad_body_becomes_api_error() {
        let err = CoreError::from(beamlab_api::Error::Deserialization {
            message: "expected value".into(),
            body: "<html>".into(),
        });
        assert!(matches!(err, CoreError::Api { status: None, .. }));
    }
}
