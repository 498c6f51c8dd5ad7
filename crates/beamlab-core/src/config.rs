// ── Runtime connection configuration ──
//
// Describes where the simulation backend lives and how long to wait for
// it. Never touches disk; the CLI resolves profiles and hands this in.

use std::time::Duration;

use url::Url;

/// Backend address used when nothing else is configured.
pub const DEFAULT_SERVER: &str = "http://localhost:8000";

/// Configuration for talking to a single simulation backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Backend root URL (e.g., `http://localhost:8000`).
    pub server: Url,
    /// Per-request timeout. `None` waits as long as the transport allows.
    pub timeout: Option<Duration>,
}

impl SessionConfig {
    pub fn new(server: Url) -> Self {
        Self {
            server,
            timeout: None,
        }
    }

    /// Parse `server` and build a config with no timeout.
    pub fn from_server(server: &str) -> Result<Self, url::ParseError> {
        Url::parse(server).map(Self::new)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_server_parses() {
        let config = SessionConfig::from_server(DEFAULT_SERVER).unwrap();
        assert_eq!(config.server.as_str(), "http://localhost:8000/");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn from_server_rejects_garbage() {
        assert!(SessionConfig::from_server("not a url").is_err());
    }

    #[test]
    fn with_timeout_sets_timeout() {
        let config = SessionConfig::from_server("http://sim.lab:9000")
            .unwrap()
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
