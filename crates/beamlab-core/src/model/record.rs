// ── Simulation record ──
//
// Local wrapper stamped on every submitted configuration: an identifier
// of the form `sim_<epoch ms>_<9 base-36 chars>` plus a UTC timestamp.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::link::LinkConfiguration;

const SUFFIX_LEN: usize = 9;

/// Generate a session-unique simulation identifier.
///
/// The suffix is drawn from the low bits of a v4 UUID, all of which are
/// random, so two ids minted in the same millisecond still differ.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis();
    format!("sim_{millis}_{}", random_suffix())
}

fn random_suffix() -> String {
    let mut bits = Uuid::new_v4().as_u128();
    let mut suffix = String::with_capacity(SUFFIX_LEN);
    for _ in 0..SUFFIX_LEN {
        let digit = u32::try_from(bits % 36).unwrap_or(0);
        suffix.push(char::from_digit(digit, 36).unwrap_or('0'));
        bits /= 36;
    }
    suffix
}

/// A configuration that was handed to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    pub simulation_id: String,
    pub timestamp: DateTime<Utc>,
    pub config: LinkConfiguration,
}

impl SimulationRecord {
    pub fn new(config: LinkConfiguration) -> Self {
        Self {
            simulation_id: generate_id(),
            timestamp: Utc::now(),
            config,
        }
    }

    /// ISO-8601 timestamp with millisecond precision and a `Z` suffix.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Human-oriented summary with unit-suffixed parameters.
    pub fn summary(&self) -> RecordSummary {
        let c = &self.config;
        RecordSummary {
            simulation_id: self.simulation_id.clone(),
            timestamp: self.timestamp_iso(),
            parameters: SummaryParameters {
                frequency: format!("{} MHz", c.frequency_mhz),
                power: format!("{} dBm", c.power_dbm),
                distance: format!("{} m", c.distance_m),
                system: c.system.tag().to_owned(),
                bandwidth: format!("{} MHz", c.bandwidth_mhz),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSummary {
    pub simulation_id: String,
    pub timestamp: String,
    pub parameters: SummaryParameters,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryParameters {
    pub frequency: String,
    pub power: String,
    pub distance: String,
    pub system: String,
    pub bandwidth: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn assert_id_format(id: &str) {
        let mut parts = id.splitn(3, '_');
        assert_eq!(parts.next(), Some("sim"), "{id}");
        let millis = parts.next().unwrap();
        assert!(!millis.is_empty() && millis.chars().all(|c| c.is_ascii_digit()), "{id}");
        let suffix = parts.next().unwrap();
        assert_eq!(suffix.len(), SUFFIX_LEN, "{id}");
        assert!(
            suffix
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()),
            "{id}"
        );
    }

    #[test]
    fn id_has_expected_shape() {
        assert_id_format(&generate_id());
    }

    #[test]
    fn rapid_ids_are_distinct() {
        let ids: std::collections::HashSet<String> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
        for id in &ids {
            assert_id_format(id);
        }
    }

    #[test]
    fn summary_uses_unit_suffixes() {
        let record = SimulationRecord::new(LinkConfiguration::default());
        let summary = record.summary();
        assert_eq!(summary.simulation_id, record.simulation_id);
        assert_eq!(summary.parameters.frequency, "3500 MHz");
        assert_eq!(summary.parameters.power, "23 dBm");
        assert_eq!(summary.parameters.distance, "200 m");
        assert_eq!(summary.parameters.system, "5G");
        assert_eq!(summary.parameters.bandwidth, "20 MHz");
        assert!(summary.timestamp.ends_with('Z'));
    }

    #[test]
    fn timestamp_round_trips_through_json() {
        let record = SimulationRecord::new(LinkConfiguration::default());
        let json = serde_json::to_string(&record).unwrap();
        let back: SimulationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
