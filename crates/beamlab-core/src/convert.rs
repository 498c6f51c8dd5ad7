// ── Wire <-> domain conversion ──
//
// Outbound: `LinkConfiguration` to the exact payload the backend expects
// (frequency and bandwidth in Hz). Inbound: response DTOs to canonical
// domain types. Unknown system or polarization tags are dropped with a
// debug log rather than failing the whole response.

use std::collections::BTreeMap;

use beamlab_api::types::{
    AntennaPayload, AntennaReport, Comparison, ConfigPayload, RangePoint, RangeResponse,
    ResultsResponse, SpectrumPoint,
};
use tracing::debug;

use crate::model::{
    AntennaBreakdown, AntennaConfig, ComparisonParameters, LinkConfiguration, Polarization,
    RangeCurve, RangeSample, SimulationResults, SpectrumSample, SystemComparison,
    SystemGeneration, SystemMetrics,
};

const HZ_PER_MHZ: f64 = 1e6;

// ── Outbound ────────────────────────────────────────────────────────

impl From<&AntennaConfig> for AntennaPayload {
    fn from(a: &AntennaConfig) -> Self {
        Self {
            gain_dbi: a.gain_dbi,
            polarization: a.polarization.tag().to_owned(),
            beamwidth_deg: a.beamwidth_deg,
        }
    }
}

/// Serialize a configuration into the request body for `/api/config`,
/// `/api/range` and `/api/compare`.
pub fn to_wire_format(config: &LinkConfiguration) -> ConfigPayload {
    ConfigPayload {
        frequency: config.frequency_mhz * HZ_PER_MHZ,
        power: config.power_dbm,
        distance: config.distance_m,
        system: config.system.tag().to_owned(),
        tx_antenna: Some(AntennaPayload::from(&config.tx_antenna)),
        rx_antenna: Some(AntennaPayload::from(&config.rx_antenna)),
        bandwidth_hz: Some(config.bandwidth_mhz * HZ_PER_MHZ),
    }
}

impl LinkConfiguration {
    /// Shorthand for [`to_wire_format`].
    pub fn to_wire_format(&self) -> ConfigPayload {
        to_wire_format(self)
    }
}

// ── Inbound ─────────────────────────────────────────────────────────

fn parse_system(tag: &str) -> Option<SystemGeneration> {
    let parsed = tag.parse().ok();
    if parsed.is_none() {
        debug!(tag, "ignoring unknown system tag");
    }
    parsed
}

fn parse_polarization(tag: &str) -> Option<Polarization> {
    let parsed = tag.parse().ok();
    if parsed.is_none() {
        debug!(tag, "ignoring unknown polarization tag");
    }
    parsed
}

impl From<SpectrumPoint> for SpectrumSample {
    fn from(p: SpectrumPoint) -> Self {
        Self {
            freq_hz: p.freq,
            magnitude_db: p.magnitude,
        }
    }
}

impl From<AntennaReport> for AntennaBreakdown {
    fn from(a: AntennaReport) -> Self {
        Self {
            tx_gain_dbi: a.tx_gain_dbi,
            rx_gain_dbi: a.rx_gain_dbi,
            tx_polarization: parse_polarization(&a.tx_polarization),
            rx_polarization: parse_polarization(&a.rx_polarization),
            tx_beamwidth_deg: a.tx_beamwidth_deg,
            rx_beamwidth_deg: a.rx_beamwidth_deg,
            polarization_mismatch_loss_db: a.polarization_mismatch_loss_db,
            antenna_gain_db: a.antenna_gain_db,
        }
    }
}

impl From<ResultsResponse> for SimulationResults {
    fn from(r: ResultsResponse) -> Self {
        Self {
            power_received_dbm: r.power_received,
            snr_db: r.snr,
            path_loss_db: r.path_loss,
            spectrum: r.spectrum.into_iter().map(SpectrumSample::from).collect(),
            system: r.system.as_deref().and_then(parse_system),
            bandwidth_hz: r.bandwidth_hz,
            antenna: r.antenna.map(AntennaBreakdown::from),
            power_dbm: r.power_dbm,
            frequency_hz: r.frequency_hz,
            distance_m: r.distance_m,
        }
    }
}

impl From<RangePoint> for RangeSample {
    fn from(p: RangePoint) -> Self {
        Self {
            distance_m: p.distance,
            power_received_dbm: p.power_received,
            snr_db: p.snr,
            path_loss_db: p.path_loss,
        }
    }
}

fn range_curve(points: Vec<RangePoint>) -> RangeCurve {
    RangeCurve {
        points: points.into_iter().map(RangeSample::from).collect(),
    }
}

impl From<RangeResponse> for RangeCurve {
    fn from(r: RangeResponse) -> Self {
        range_curve(r.range_data)
    }
}

impl From<Comparison> for SystemComparison {
    fn from(c: Comparison) -> Self {
        let systems = c
            .systems
            .into_iter()
            .filter_map(|(tag, m)| {
                let system = parse_system(&tag)?;
                Some((
                    system,
                    SystemMetrics {
                        power_received_dbm: m.power_received,
                        snr_db: m.snr,
                        path_loss_db: m.path_loss,
                        bandwidth_hz: m.bandwidth_hz,
                        system_gain_db: m.system_gain,
                    },
                ))
            })
            .collect();

        let range: BTreeMap<_, _> = c
            .range_data
            .into_iter()
            .filter_map(|(tag, points)| Some((parse_system(&tag)?, range_curve(points))))
            .collect();

        Self {
            systems,
            range,
            parameters: ComparisonParameters {
                power_dbm: c.parameters.power_dbm,
                frequency_hz: c.parameters.frequency_hz,
                distance_m: c.parameters.distance_m,
                bandwidth_hz: c.parameters.bandwidth_hz,
            },
        }
    }
}
