// ── Link configuration ──
//
// The one domain entity: carrier, power, geometry, system generation and
// the two antennas. Values are plain data; range checks live in
// `validation` and never run at construction time.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

pub const DEFAULT_FREQUENCY_MHZ: f64 = 3500.0;
pub const DEFAULT_POWER_DBM: f64 = 23.0;
pub const DEFAULT_DISTANCE_M: f64 = 200.0;
pub const DEFAULT_GAIN_DBI: f64 = 15.0;
pub const DEFAULT_BEAMWIDTH_DEG: f64 = 65.0;

// ── SystemGeneration ────────────────────────────────────────────────

/// Radio system generation. Serialized with the backend's tags.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum SystemGeneration {
    #[default]
    #[serde(rename = "5G")]
    #[strum(serialize = "5G", ascii_case_insensitive)]
    FiveG,
    #[serde(rename = "5G-A", alias = "5G-Advanced")]
    #[strum(to_string = "5G-A", serialize = "5G-Advanced", ascii_case_insensitive)]
    FiveGAdvanced,
    #[serde(rename = "6G")]
    #[strum(serialize = "6G", ascii_case_insensitive)]
    SixG,
}

impl SystemGeneration {
    /// Channel bandwidth assumed when the caller gives none.
    pub fn default_bandwidth_mhz(self) -> f64 {
        match self {
            Self::FiveG => 20.0,
            Self::FiveGAdvanced => 80.0,
            Self::SixG => 200.0,
        }
    }

    /// Wire tag (`"5G"`, `"5G-A"`, `"6G"`).
    pub fn tag(self) -> &'static str {
        match self {
            Self::FiveG => "5G",
            Self::FiveGAdvanced => "5G-A",
            Self::SixG => "6G",
        }
    }

    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::FiveG => "5G (Sub-6 GHz)",
            Self::FiveGAdvanced => "5G-A (Advanced)",
            Self::SixG => "6G (Terahertz)",
        }
    }
}

// ── Polarization ────────────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum Polarization {
    #[default]
    #[serde(rename = "H", alias = "Horizontal")]
    #[strum(to_string = "H", serialize = "Horizontal", ascii_case_insensitive)]
    Horizontal,
    #[serde(rename = "V", alias = "Vertical")]
    #[strum(to_string = "V", serialize = "Vertical", ascii_case_insensitive)]
    Vertical,
}

impl Polarization {
    /// Wire tag (`"H"` or `"V"`).
    pub fn tag(self) -> &'static str {
        match self {
            Self::Horizontal => "H",
            Self::Vertical => "V",
        }
    }
}

// ── AntennaConfig ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AntennaConfig {
    pub gain_dbi: f64,
    pub polarization: Polarization,
    pub beamwidth_deg: f64,
}

impl Default for AntennaConfig {
    fn default() -> Self {
        Self {
            gain_dbi: DEFAULT_GAIN_DBI,
            polarization: Polarization::Horizontal,
            beamwidth_deg: DEFAULT_BEAMWIDTH_DEG,
        }
    }
}

// ── LinkParams ──────────────────────────────────────────────────────

/// Optional field set used both to create a configuration and to patch
/// an existing one. `None` means "keep the default / current value".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_mhz: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_dbm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemGeneration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_antenna: Option<AntennaConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rx_antenna: Option<AntennaConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidth_mhz: Option<f64>,
}

// ── LinkConfiguration ───────────────────────────────────────────────

/// A complete link configuration snapshot.
///
/// Never mutated in place: every `with_*` / [`patch`](Self::patch) call
/// returns a fresh value that copies the untouched fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkConfiguration {
    pub frequency_mhz: f64,
    pub power_dbm: f64,
    pub distance_m: f64,
    pub system: SystemGeneration,
    pub bandwidth_mhz: f64,
    pub tx_antenna: AntennaConfig,
    pub rx_antenna: AntennaConfig,
}

impl Default for LinkConfiguration {
    fn default() -> Self {
        Self::create(LinkParams::default())
    }
}

impl LinkConfiguration {
    /// Build a configuration, filling every omitted field with its default.
    ///
    /// An omitted bandwidth comes from the system's table entry; an
    /// explicit one is kept verbatim.
    pub fn create(params: LinkParams) -> Self {
        let system = params.system.unwrap_or_default();
        Self {
            frequency_mhz: params.frequency_mhz.unwrap_or(DEFAULT_FREQUENCY_MHZ),
            power_dbm: params.power_dbm.unwrap_or(DEFAULT_POWER_DBM),
            distance_m: params.distance_m.unwrap_or(DEFAULT_DISTANCE_M),
            system,
            bandwidth_mhz: params
                .bandwidth_mhz
                .unwrap_or_else(|| system.default_bandwidth_mhz()),
            tx_antenna: params.tx_antenna.unwrap_or_default(),
            rx_antenna: params.rx_antenna.unwrap_or_default(),
        }
    }

    /// Return a copy with every `Some` field of `params` applied.
    ///
    /// Changing the system does not recompute the bandwidth.
    pub fn patch(&self, params: &LinkParams) -> Self {
        Self {
            frequency_mhz: params.frequency_mhz.unwrap_or(self.frequency_mhz),
            power_dbm: params.power_dbm.unwrap_or(self.power_dbm),
            distance_m: params.distance_m.unwrap_or(self.distance_m),
            system: params.system.unwrap_or(self.system),
            bandwidth_mhz: params.bandwidth_mhz.unwrap_or(self.bandwidth_mhz),
            tx_antenna: params.tx_antenna.unwrap_or(self.tx_antenna),
            rx_antenna: params.rx_antenna.unwrap_or(self.rx_antenna),
        }
    }

    pub fn with_frequency_mhz(&self, frequency_mhz: f64) -> Self {
        Self {
            frequency_mhz,
            ..*self
        }
    }

    pub fn with_power_dbm(&self, power_dbm: f64) -> Self {
        Self { power_dbm, ..*self }
    }

    pub fn with_distance_m(&self, distance_m: f64) -> Self {
        Self {
            distance_m,
            ..*self
        }
    }

    /// Switch system generation, keeping the current bandwidth.
    pub fn with_system(&self, system: SystemGeneration) -> Self {
        Self { system, ..*self }
    }

    pub fn with_bandwidth_mhz(&self, bandwidth_mhz: f64) -> Self {
        Self {
            bandwidth_mhz,
            ..*self
        }
    }

    pub fn with_tx_antenna(&self, tx_antenna: AntennaConfig) -> Self {
        Self {
            tx_antenna,
            ..*self
        }
    }

    pub fn with_rx_antenna(&self, rx_antenna: AntennaConfig) -> Self {
        Self {
            rx_antenna,
            ..*self
        }
    }

    /// Carrier frequency in Hz.
    pub fn frequency_hz(&self) -> f64 {
        self.frequency_mhz * 1e6
    }

    /// Channel bandwidth in Hz.
    pub fn bandwidth_hz(&self) -> f64 {
        self.bandwidth_mhz * 1e6
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_configuration_matches_documented_values() {
        let config = LinkConfiguration::default();
        assert_eq!(config.frequency_mhz, 3500.0);
        assert_eq!(config.power_dbm, 23.0);
        assert_eq!(config.distance_m, 200.0);
        assert_eq!(config.system, SystemGeneration::FiveG);
        assert_eq!(config.bandwidth_mhz, 20.0);
        let antenna = AntennaConfig {
            gain_dbi: 15.0,
            polarization: Polarization::Horizontal,
            beamwidth_deg: 65.0,
        };
        assert_eq!(config.tx_antenna, antenna);
        assert_eq!(config.rx_antenna, antenna);
    }

    #[test]
    fn bandwidth_defaults_per_system() {
        let bw = |system| {
            LinkConfiguration::create(LinkParams {
                system: Some(system),
                ..LinkParams::default()
            })
            .bandwidth_mhz
        };
        assert_eq!(bw(SystemGeneration::FiveG), 20.0);
        assert_eq!(bw(SystemGeneration::FiveGAdvanced), 80.0);
        assert_eq!(bw(SystemGeneration::SixG), 200.0);
    }

    #[test]
    fn explicit_bandwidth_is_kept() {
        let config = LinkConfiguration::create(LinkParams {
            system: Some(SystemGeneration::SixG),
            bandwidth_mhz: Some(50.0),
            ..LinkParams::default()
        });
        assert_eq!(config.bandwidth_mhz, 50.0);
    }

    #[test]
    fn system_change_does_not_recompute_bandwidth() {
        let config = LinkConfiguration::default().with_system(SystemGeneration::SixG);
        assert_eq!(config.system, SystemGeneration::SixG);
        assert_eq!(config.bandwidth_mhz, 20.0);

        let patched = LinkConfiguration::default().patch(&LinkParams {
            system: Some(SystemGeneration::FiveGAdvanced),
            ..LinkParams::default()
        });
        assert_eq!(patched.bandwidth_mhz, 20.0);
    }

    #[test]
    fn updates_return_new_values() {
        let original = LinkConfiguration::default();
        let changed = original.with_distance_m(6000.0);
        assert_eq!(original.distance_m, 200.0);
        assert_eq!(changed.distance_m, 6000.0);
        assert_eq!(changed.frequency_mhz, original.frequency_mhz);
    }

    #[test]
    fn system_generation_parses_tags() {
        assert_eq!(
            "5g-a".parse::<SystemGeneration>().unwrap(),
            SystemGeneration::FiveGAdvanced
        );
        assert_eq!(
            "5G-Advanced".parse::<SystemGeneration>().unwrap(),
            SystemGeneration::FiveGAdvanced
        );
        assert_eq!(SystemGeneration::SixG.to_string(), "6G");
        assert!("4G".parse::<SystemGeneration>().is_err());
    }

    #[test]
    fn polarization_serializes_as_letter() {
        let json = serde_json::to_string(&Polarization::Vertical).unwrap();
        assert_eq!(json, "\"V\"");
        let parsed: Polarization = serde_json::from_str("\"Horizontal\"").unwrap();
        assert_eq!(parsed, Polarization::Horizontal);
    }
}
