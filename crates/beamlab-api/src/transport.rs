// Shared transport configuration for building reqwest::Client instances.
//
// The backend is plain HTTP(S) without authentication, so this only
// carries the user agent and the optional request timeout.

use std::time::Duration;

const USER_AGENT: &str = concat!("beamlab/", env!("CARGO_PKG_VERSION"));

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone, Default)]
pub struct TransportConfig {
    /// Per-request timeout. `None` leaves requests unbounded, which is
    /// how the browser client behaved.
    pub timeout: Option<Duration>,
}

impl TransportConfig {
    /// Config with a request timeout applied.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder
            .build()
            .map_err(|e| crate::error::Error::Tls(format!("failed to build HTTP client: {e}")))
    }
}
