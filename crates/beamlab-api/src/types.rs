// Wire types for the Beamforming Lab backend.
//
// Field names match the JSON the backend speaks (snake_case, SI units on
// the wire: Hz, dBm, meters). Domain conversion lives in beamlab-core.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ── Requests ─────────────────────────────────────────────────────────

/// Per-antenna block of a configuration payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntennaPayload {
    pub gain_dbi: f64,
    /// `"H"` or `"V"`.
    pub polarization: String,
    pub beamwidth_deg: f64,
}

/// Body of `POST /api/config`, `/api/range` and `/api/compare`.
///
/// The antenna and bandwidth fields are omitted from the JSON when
/// unset, which yields the minimal `{frequency, power, distance, system}`
/// shape older backends accept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigPayload {
    /// Carrier frequency in Hz.
    pub frequency: f64,
    /// Transmit power in dBm.
    pub power: f64,
    /// Link distance in meters.
    pub distance: f64,
    /// `"5G"`, `"5G-A"` or `"6G"`.
    pub system: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_antenna: Option<AntennaPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rx_antenna: Option<AntennaPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidth_hz: Option<f64>,
}

impl ConfigPayload {
    /// Strip the antenna and bandwidth blocks.
    pub fn basic(mut self) -> Self {
        self.tx_antenna = None;
        self.rx_antenna = None;
        self.bandwidth_hz = None;
        self
    }
}

// ── /api/results ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumPoint {
    /// Frequency in Hz.
    pub freq: f64,
    /// Magnitude in dB.
    pub magnitude: f64,
}

/// Antenna breakdown reported alongside results by richer backends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntennaReport {
    pub tx_gain_dbi: f64,
    pub rx_gain_dbi: f64,
    pub tx_polarization: String,
    pub rx_polarization: String,
    pub tx_beamwidth_deg: f64,
    pub rx_beamwidth_deg: f64,
    pub polarization_mismatch_loss_db: f64,
    pub antenna_gain_db: f64,
}

/// Body of `GET /api/results`.
///
/// Every metric is nullable: a backend that has not simulated anything
/// yet answers with nulls and an empty spectrum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsResponse {
    pub power_received: Option<f64>,
    pub snr: Option<f64>,
    pub path_loss: Option<f64>,
    #[serde(default)]
    pub spectrum: Vec<SpectrumPoint>,
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub bandwidth_hz: Option<f64>,
    #[serde(default)]
    pub antenna: Option<AntennaReport>,
    #[serde(default)]
    pub power_dbm: Option<f64>,
    #[serde(default)]
    pub frequency_hz: Option<f64>,
    #[serde(default)]
    pub distance_m: Option<f64>,
}

// ── /api/range ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangePoint {
    /// Distance in meters.
    pub distance: f64,
    pub power_received: f64,
    pub snr: f64,
    pub path_loss: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeResponse {
    #[serde(default)]
    pub range_data: Vec<RangePoint>,
}

// ── /api/compare ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMetrics {
    pub power_received: f64,
    pub snr: f64,
    pub path_loss: f64,
    pub bandwidth_hz: f64,
    pub system_gain: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonParameters {
    pub power_dbm: f64,
    pub frequency_hz: f64,
    pub distance_m: f64,
    #[serde(default)]
    pub bandwidth_hz: Option<f64>,
}

/// Cross-system comparison keyed by system tag (`"5G"`, `"5G-A"`, `"6G"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub systems: BTreeMap<String, SystemMetrics>,
    #[serde(default)]
    pub range_data: BTreeMap<String, Vec<RangePoint>>,
    pub parameters: ComparisonParameters,
}

/// Body of `POST /api/compare`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResponse {
    pub comparison: Comparison,
}

// ── /health ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    #[serde(default)]
    pub version: Option<String>,
}
