// HTTP client for the Beamforming Lab simulation backend.
//
// Endpoints: POST /api/config, GET /api/results, POST /api/range,
// POST /api/compare, GET /health. No auth, no retries: every request is
// fire-and-await and a failure surfaces once to the caller.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::{
    ComparisonResponse, ConfigPayload, HealthResponse, RangeResponse, ResultsResponse,
};

// ── Error response shape (FastAPI) ───────────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the simulation backend.
///
/// Paths are resolved relative to `base_url`, so a backend mounted under
/// a prefix (e.g. `https://host/lab/`) works the same as one at the root.
#[derive(Debug, Clone)]
pub struct SimulatorClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SimulatorClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client for `base_url` using the given transport settings.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Ensure the base path ends with `/` so relative joins append.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn post_no_response<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = body
                    .char_indices()
                    .nth(200)
                    .map_or(body.as_str(), |(i, _)| &body[..i]);
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();

        let message = match serde_json::from_str::<ErrorResponse>(&raw) {
            Ok(ErrorResponse {
                detail: Some(serde_json::Value::String(detail)),
            }) => detail,
            Ok(ErrorResponse {
                detail: Some(detail),
            }) => detail.to_string(),
            _ if raw.is_empty() => status.to_string(),
            _ => raw,
        };

        Error::Api {
            status: status.as_u16(),
            message,
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Submit a link configuration.
    ///
    /// `POST /api/config`. The response body is ignored; success is
    /// inferred from the HTTP status.
    pub async fn submit_config(&self, payload: &ConfigPayload) -> Result<(), Error> {
        debug!(system = %payload.system, frequency_hz = payload.frequency, "submitting configuration");
        self.post_no_response("api/config", payload).await
    }

    /// Fetch the latest simulation results.
    ///
    /// `GET /api/results`
    pub async fn get_results(&self) -> Result<ResultsResponse, Error> {
        self.get("api/results").await
    }

    /// Sweep received power, SNR and path loss over distance.
    ///
    /// `POST /api/range`
    pub async fn get_range(&self, payload: &ConfigPayload) -> Result<RangeResponse, Error> {
        self.post("api/range", payload).await
    }

    /// Compare the configured link across every system generation.
    ///
    /// `POST /api/compare`
    pub async fn compare(&self, payload: &ConfigPayload) -> Result<ComparisonResponse, Error> {
        self.post("api/compare", payload).await
    }

    /// Backend liveness probe.
    ///
    /// `GET /health`
    pub async fn health(&self) -> Result<HealthResponse, Error> {
        self.get("health").await
    }
}
