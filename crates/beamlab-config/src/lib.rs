//! Shared configuration for Beamforming Lab tools.
//!
//! TOML profiles (one per simulation backend), global output defaults,
//! and default link parameters that seed every `LinkConfiguration` the
//! CLI builds. Loaded with figment: built-in defaults, then the config
//! file, then `BEAMLAB_*` environment variables.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use beamlab_core::{
    AntennaConfig, DEFAULT_SERVER, LinkParams, Polarization, SessionConfig, SystemGeneration,
};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        field: field.into(),
        reason: reason.into(),
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named backend profiles.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,

    /// Link parameters applied before any command-line flag.
    #[serde(default)]
    pub link: LinkDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: BTreeMap::new(),
            link: LinkDefaults::default(),
        }
    }
}

impl Config {
    /// Comma-separated profile names, or `(none)`.
    pub fn available_profiles(&self) -> String {
        if self.profiles.is_empty() {
            "(none)".into()
        } else {
            self.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Request timeout in seconds. Unset means no timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: None,
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

/// A named simulation backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    /// Backend base URL (e.g., "http://localhost:8000").
    #[serde(default = "default_server")]
    pub server: String,

    /// Override timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            server: default_server(),
            timeout: None,
        }
    }
}

fn default_server() -> String {
    DEFAULT_SERVER.into()
}

/// Translate a profile into a `SessionConfig`.
///
/// `timeout` falls back to the global default.
pub fn profile_to_session_config(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<SessionConfig, ConfigError> {
    let mut config = SessionConfig::from_server(&profile.server)
        .map_err(|e| invalid("server", format!("invalid URL '{}': {e}", profile.server)))?;
    if let Some(secs) = profile.timeout.or(defaults.timeout) {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}

// ── Link defaults ───────────────────────────────────────────────────

/// Optional overrides for every link parameter.
///
/// Antenna fields are flat so a single one (say `rx_gain_dbi`) can be
/// set without restating the rest of that antenna.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct LinkDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_mhz: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_dbm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemGeneration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth_mhz: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_gain_dbi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_polarization: Option<Polarization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_beamwidth_deg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_gain_dbi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_polarization: Option<Polarization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_beamwidth_deg: Option<f64>,
}

/// Keys accepted by [`LinkDefaults::set`].
pub const LINK_KEYS: &[&str] = &[
    "frequency_mhz",
    "power_dbm",
    "distance_m",
    "system",
    "bandwidth_mhz",
    "tx_gain_dbi",
    "tx_polarization",
    "tx_beamwidth_deg",
    "rx_gain_dbi",
    "rx_polarization",
    "rx_beamwidth_deg",
];

fn antenna(
    gain_dbi: Option<f64>,
    polarization: Option<Polarization>,
    beamwidth_deg: Option<f64>,
) -> Option<AntennaConfig> {
    if gain_dbi.is_none() && polarization.is_none() && beamwidth_deg.is_none() {
        return None;
    }
    let base = AntennaConfig::default();
    Some(AntennaConfig {
        gain_dbi: gain_dbi.unwrap_or(base.gain_dbi),
        polarization: polarization.unwrap_or(base.polarization),
        beamwidth_deg: beamwidth_deg.unwrap_or(base.beamwidth_deg),
    })
}

impl LinkDefaults {
    /// Field-wise overlay: values set in `self` win over `lower`.
    #[must_use]
    pub fn over(self, lower: &Self) -> Self {
        Self {
            frequency_mhz: self.frequency_mhz.or(lower.frequency_mhz),
            power_dbm: self.power_dbm.or(lower.power_dbm),
            distance_m: self.distance_m.or(lower.distance_m),
            system: self.system.or(lower.system),
            bandwidth_mhz: self.bandwidth_mhz.or(lower.bandwidth_mhz),
            tx_gain_dbi: self.tx_gain_dbi.or(lower.tx_gain_dbi),
            tx_polarization: self.tx_polarization.or(lower.tx_polarization),
            tx_beamwidth_deg: self.tx_beamwidth_deg.or(lower.tx_beamwidth_deg),
            rx_gain_dbi: self.rx_gain_dbi.or(lower.rx_gain_dbi),
            rx_polarization: self.rx_polarization.or(lower.rx_polarization),
            rx_beamwidth_deg: self.rx_beamwidth_deg.or(lower.rx_beamwidth_deg),
        }
    }

    /// Build the partial parameters that seed `LinkConfiguration::create`.
    ///
    /// A partially specified antenna is completed from the antenna
    /// defaults.
    pub fn to_params(&self) -> LinkParams {
        LinkParams {
            frequency_mhz: self.frequency_mhz,
            power_dbm: self.power_dbm,
            distance_m: self.distance_m,
            system: self.system,
            bandwidth_mhz: self.bandwidth_mhz,
            tx_antenna: antenna(self.tx_gain_dbi, self.tx_polarization, self.tx_beamwidth_deg),
            rx_antenna: antenna(self.rx_gain_dbi, self.rx_polarization, self.rx_beamwidth_deg),
        }
    }

    /// Set one field from its string form, as `config set link.<key>` does.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        fn num(key: &str, value: &str) -> Result<Option<f64>, ConfigError> {
            value
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Some)
                .ok_or_else(|| invalid(key, format!("expected a number, got '{value}'")))
        }
        fn pol(key: &str, value: &str) -> Result<Option<Polarization>, ConfigError> {
            value
                .parse()
                .map(Some)
                .map_err(|_| invalid(key, format!("expected H or V, got '{value}'")))
        }

        match key {
            "frequency_mhz" => self.frequency_mhz = num(key, value)?,
            "power_dbm" => self.power_dbm = num(key, value)?,
            "distance_m" => self.distance_m = num(key, value)?,
            "bandwidth_mhz" => self.bandwidth_mhz = num(key, value)?,
            "system" => {
                self.system = Some(value.parse().map_err(|_| {
                    invalid(key, format!("expected 5G, 5G-A or 6G, got '{value}'"))
                })?);
            }
            "tx_gain_dbi" => self.tx_gain_dbi = num(key, value)?,
            "tx_polarization" => self.tx_polarization = pol(key, value)?,
            "tx_beamwidth_deg" => self.tx_beamwidth_deg = num(key, value)?,
            "rx_gain_dbi" => self.rx_gain_dbi = num(key, value)?,
            "rx_polarization" => self.rx_polarization = pol(key, value)?,
            "rx_beamwidth_deg" => self.rx_beamwidth_deg = num(key, value)?,
            other => {
                return Err(invalid(
                    other,
                    format!("unknown link key. Valid keys: {}", LINK_KEYS.join(", ")),
                ));
            }
        }
        Ok(())
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("org", "beamlab", "beamlab").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("beamlab");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from `path` + environment. A missing file is not an error.
///
/// Nested keys use a double underscore: `BEAMLAB_LINK__POWER_DBM=30`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("BEAMLAB_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
