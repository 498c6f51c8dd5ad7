//! Link model and session state between `beamlab-api` and the CLI.
//!
//! - **[`LinkConfiguration`]**: Immutable radio-link parameters. Every
//!   change goes through [`patch`](LinkConfiguration::patch) or a `with_*`
//!   method and yields a new value. [`validate`](LinkConfiguration::validate)
//!   checks it against [`LIMITS`] and reports every violation by name.
//!
//! - **[`Session`]**: Holds the current configuration and one
//!   `tokio::sync::watch` slot per view (results, range, comparison).
//!   [`run_simulation`](Session::run_simulation) refuses to submit an invalid
//!   configuration; a failed fetch records its error and keeps the last good
//!   data.
//!
//! - **[`units`]**: Display-unit conversion (dBm/dBW, m/km, Hz to GHz).
//!   Canonical values are what get stored and sent.
//!
//! - **[`convert`]**: Wire payloads out, domain types in. Frequency and
//!   bandwidth leave as Hz.

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod session;
pub mod units;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DEFAULT_SERVER, SessionConfig};
pub use convert::to_wire_format;
pub use error::CoreError;
pub use session::{Session, Slot};
pub use units::{FrequencyUnit, PowerUnit, format_frequency, format_power};

pub use model::{
    AntennaBreakdown, AntennaConfig, ComparisonParameters, LIMITS, Limit, LinkConfiguration,
    LinkParams, Polarization, RangeCurve, RangeSample, RecordSummary, SimulationRecord,
    SimulationResults, SpectrumSample, SystemComparison, SystemGeneration, SystemMetrics,
    ValidationReport, generate_id, validate,
};
