// ── Session ──
//
// Owns the current link configuration and one observable slot per view
// (results, range, comparison) plus the last submitted record. Each piece
// of state lives in a `watch` channel: consumers subscribe, and dropping
// the receiver unsubscribes.
//
// Overlapping fetches of the same view are not coordinated. Whichever
// response resolves last is what the slot holds.

use std::future::Future;
use std::sync::Arc;

use beamlab_api::{SimulatorClient, TransportConfig};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::convert::to_wire_format;
use crate::error::CoreError;
use crate::model::{
    LinkConfiguration, LinkParams, RangeCurve, SimulationRecord, SimulationResults,
    SystemComparison, ValidationReport,
};

// ── Slot ─────────────────────────────────────────────────────────

/// Fetch state for a single view.
///
/// A failed fetch sets `error` but leaves the last good `data` in place.
#[derive(Debug)]
pub struct Slot<T> {
    pub data: Option<Arc<T>>,
    pub error: Option<String>,
    pub loading: bool,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
        }
    }
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            error: self.error.clone(),
            loading: self.loading,
        }
    }
}

impl<T> Slot<T> {
    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }
}

// ── Session ──────────────────────────────────────────────────────

/// Client-side state for one simulation backend.
///
/// Cheaply cloneable via `Arc<SessionInner>`.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    config: SessionConfig,
    client: SimulatorClient,
    link: watch::Sender<Arc<LinkConfiguration>>,
    record: watch::Sender<Option<Arc<SimulationRecord>>>,
    results: watch::Sender<Slot<SimulationResults>>,
    range: watch::Sender<Slot<RangeCurve>>,
    comparison: watch::Sender<Slot<SystemComparison>>,
}

impl Session {
    /// Build a session and its HTTP client from `config`.
    pub fn new(config: SessionConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            timeout: config.timeout,
        };
        let client = SimulatorClient::new(config.server.as_str(), &transport)?;
        Ok(Self::with_client(config, client))
    }

    /// Build a session around an existing client.
    pub fn with_client(config: SessionConfig, client: SimulatorClient) -> Self {
        let (link, _) = watch::channel(Arc::new(LinkConfiguration::default()));
        let (record, _) = watch::channel(None);
        let (results, _) = watch::channel(Slot::default());
        let (range, _) = watch::channel(Slot::default());
        let (comparison, _) = watch::channel(Slot::default());

        Self {
            inner: Arc::new(SessionInner {
                config,
                client,
                link,
                record,
                results,
                range,
                comparison,
            }),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.inner.config
    }

    pub fn client(&self) -> &SimulatorClient {
        &self.inner.client
    }

    // ── Link configuration ───────────────────────────────────────

    /// Current configuration (cheap `Arc` clone).
    pub fn link(&self) -> Arc<LinkConfiguration> {
        Arc::clone(&self.inner.link.borrow())
    }

    pub fn subscribe_link(&self) -> watch::Receiver<Arc<LinkConfiguration>> {
        self.inner.link.subscribe()
    }

    /// Apply a partial update and return the new configuration.
    ///
    /// Changing the system does not touch the bandwidth.
    pub fn update(&self, params: &LinkParams) -> Arc<LinkConfiguration> {
        let next = Arc::new(self.link().patch(params));
        self.inner.link.send_replace(Arc::clone(&next));
        debug!(?params, "link configuration updated");
        next
    }

    /// Replace the configuration wholesale.
    pub fn set_link(&self, link: LinkConfiguration) {
        self.inner.link.send_replace(Arc::new(link));
    }

    pub fn validate(&self) -> ValidationReport {
        self.link().validate()
    }

    // ── Backend round-trips ──────────────────────────────────────

    /// Validate the current configuration and submit it.
    ///
    /// An invalid configuration is rejected with
    /// [`CoreError::Validation`] before any request is made.
    pub async fn run_simulation(&self) -> Result<Arc<SimulationRecord>, CoreError> {
        let link = *self.link();
        let report = link.validate();
        if !report.is_valid {
            debug!(errors = ?report.errors, "refusing to submit invalid configuration");
            return Err(CoreError::Validation {
                errors: report.errors,
            });
        }

        let record = SimulationRecord::new(link);
        info!(
            simulation_id = %record.simulation_id,
            system = %link.system,
            "submitting simulation"
        );

        if let Err(e) = self.inner.client.submit_config(&to_wire_format(&link)).await {
            warn!(error = %e, "simulation submit failed");
            return Err(e.into());
        }

        let record = Arc::new(record);
        self.inner.record.send_replace(Some(Arc::clone(&record)));
        Ok(record)
    }

    /// Fetch the latest results into the results slot.
    pub async fn fetch_results(&self) -> Result<Arc<SimulationResults>, CoreError> {
        let client = &self.inner.client;
        fill_slot(&self.inner.results, "results", async {
            let results = SimulationResults::from(client.get_results().await?);
            if results.is_empty() {
                debug!("backend has no results yet");
            }
            Ok::<_, CoreError>(results)
        })
        .await
    }

    /// Fetch the distance sweep for the current configuration.
    pub async fn fetch_range(&self) -> Result<Arc<RangeCurve>, CoreError> {
        let client = &self.inner.client;
        let payload = to_wire_format(&self.link());
        fill_slot(&self.inner.range, "range", async move {
            Ok::<_, CoreError>(RangeCurve::from(client.get_range(&payload).await?))
        })
        .await
    }

    /// Fetch the cross-system comparison for the current configuration.
    pub async fn fetch_comparison(&self) -> Result<Arc<SystemComparison>, CoreError> {
        let client = &self.inner.client;
        let payload = to_wire_format(&self.link());
        fill_slot(&self.inner.comparison, "comparison", async move {
            Ok::<_, CoreError>(SystemComparison::from(
                client.compare(&payload).await?.comparison,
            ))
        })
        .await
    }

    // ── Snapshots / subscriptions ────────────────────────────────

    pub fn results(&self) -> Slot<SimulationResults> {
        self.inner.results.borrow().clone()
    }

    pub fn range(&self) -> Slot<RangeCurve> {
        self.inner.range.borrow().clone()
    }

    pub fn comparison(&self) -> Slot<SystemComparison> {
        self.inner.comparison.borrow().clone()
    }

    pub fn last_record(&self) -> Option<Arc<SimulationRecord>> {
        self.inner.record.borrow().clone()
    }

    pub fn subscribe_results(&self) -> watch::Receiver<Slot<SimulationResults>> {
        self.inner.results.subscribe()
    }

    pub fn subscribe_range(&self) -> watch::Receiver<Slot<RangeCurve>> {
        self.inner.range.subscribe()
    }

    pub fn subscribe_comparison(&self) -> watch::Receiver<Slot<SystemComparison>> {
        self.inner.comparison.subscribe()
    }

    pub fn subscribe_record(&self) -> watch::Receiver<Option<Arc<SimulationRecord>>> {
        self.inner.record.subscribe()
    }

    /// Back to the default configuration with every slot cleared.
    pub fn reset(&self) {
        self.inner
            .link
            .send_replace(Arc::new(LinkConfiguration::default()));
        self.inner.record.send_replace(None);
        self.inner.results.send_replace(Slot::default());
        self.inner.range.send_replace(Slot::default());
        self.inner.comparison.send_replace(Slot::default());
        info!("session reset");
    }
}

/// Drive `fetch` and record its outcome in `slot`.
async fn fill_slot<T, F>(
    slot: &watch::Sender<Slot<T>>,
    view: &'static str,
    fetch: F,
) -> Result<Arc<T>, CoreError>
where
    F: Future<Output = Result<T, CoreError>>,
{
    slot.send_modify(|s| s.loading = true);

    match fetch.await {
        Ok(data) => {
            let data = Arc::new(data);
            slot.send_modify(|s| {
                s.data = Some(Arc::clone(&data));
                s.error = None;
                s.loading = false;
            });
            Ok(data)
        }
        Err(e) => {
            warn!(view, error = %e, "fetch failed, keeping previous data");
            let message = e.to_string();
            slot.send_modify(|s| {
                s.error = Some(message);
                s.loading = false;
            });
            Err(e)
        }
    }
}
