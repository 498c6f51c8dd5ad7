// ── Simulation output domain types ──
//
// Canonical shapes for what the backend computes. Units are carried in
// field names; `convert` builds these from the wire DTOs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::link::{Polarization, SystemGeneration};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumSample {
    pub freq_hz: f64,
    pub magnitude_db: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntennaBreakdown {
    pub tx_gain_dbi: f64,
    pub rx_gain_dbi: f64,
    pub tx_polarization: Option<Polarization>,
    pub rx_polarization: Option<Polarization>,
    pub tx_beamwidth_deg: f64,
    pub rx_beamwidth_deg: f64,
    pub polarization_mismatch_loss_db: f64,
    pub antenna_gain_db: f64,
}

/// Latest single-link results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationResults {
    pub power_received_dbm: Option<f64>,
    pub snr_db: Option<f64>,
    pub path_loss_db: Option<f64>,
    pub spectrum: Vec<SpectrumSample>,
    pub system: Option<SystemGeneration>,
    pub bandwidth_hz: Option<f64>,
    pub antenna: Option<AntennaBreakdown>,
    pub power_dbm: Option<f64>,
    pub frequency_hz: Option<f64>,
    pub distance_m: Option<f64>,
}

impl SimulationResults {
    /// No metric and no spectrum: nothing has been simulated yet.
    ///
    /// This is an absent-data state, not an error.
    pub fn is_empty(&self) -> bool {
        self.power_received_dbm.is_none()
            && self.snr_db.is_none()
            && self.path_loss_db.is_none()
            && self.spectrum.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSample {
    pub distance_m: f64,
    pub power_received_dbm: f64,
    pub snr_db: f64,
    pub path_loss_db: f64,
}

/// Metrics swept over distance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeCurve {
    pub points: Vec<RangeSample>,
}

impl RangeCurve {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Farthest sampled distance whose SNR is still at least `min_snr_db`.
    pub fn max_distance_with_snr(&self, min_snr_db: f64) -> Option<f64> {
        self.points
            .iter()
            .filter(|p| p.snr_db >= min_snr_db)
            .map(|p| p.distance_m)
            .reduce(f64::max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemMetrics {
    pub power_received_dbm: f64,
    pub snr_db: f64,
    pub path_loss_db: f64,
    pub bandwidth_hz: f64,
    pub system_gain_db: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonParameters {
    pub power_dbm: f64,
    pub frequency_hz: f64,
    pub distance_m: f64,
    pub bandwidth_hz: Option<f64>,
}

/// The same link evaluated under every system generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemComparison {
    pub systems: BTreeMap<SystemGeneration, SystemMetrics>,
    pub range: BTreeMap<SystemGeneration, RangeCurve>,
    pub parameters: ComparisonParameters,
}

impl SystemComparison {
    /// System with the highest SNR at the configured distance.
    pub fn best_by_snr(&self) -> Option<SystemGeneration> {
        self.systems
            .iter()
            .max_by(|a, b| a.1.snr_db.total_cmp(&b.1.snr_db))
            .map(|(system, _)| *system)
    }
}
