// ── Display-unit conversion ──
//
// Stateless helpers between canonical units (dBm, meters, Hz) and the
// units a user may prefer to read. The canonical value is always the one
// that gets stored and serialized.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

const DBM_PER_DBW: f64 = 30.0;
const METERS_PER_KM: f64 = 1000.0;

pub fn dbm_to_dbw(dbm: f64) -> f64 {
    dbm - DBM_PER_DBW
}

pub fn dbw_to_dbm(dbw: f64) -> f64 {
    dbw + DBM_PER_DBW
}

pub fn m_to_km(meters: f64) -> f64 {
    meters / METERS_PER_KM
}

pub fn km_to_m(km: f64) -> f64 {
    km * METERS_PER_KM
}

// ── Power ───────────────────────────────────────────────────────────

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum PowerUnit {
    #[default]
    #[strum(serialize = "dBm")]
    #[serde(rename = "dBm")]
    Dbm,
    #[strum(serialize = "dBW")]
    #[serde(rename = "dBW")]
    Dbw,
}

impl PowerUnit {
    /// Convert a canonical dBm value into this unit.
    pub fn from_dbm(self, dbm: f64) -> f64 {
        match self {
            Self::Dbm => dbm,
            Self::Dbw => dbm_to_dbw(dbm),
        }
    }

    /// Convert a value in this unit back to dBm.
    pub fn to_dbm(self, value: f64) -> f64 {
        match self {
            Self::Dbm => value,
            Self::Dbw => dbw_to_dbm(value),
        }
    }
}

/// `"23.00 dBm"` / `"-7.00 dBW"`.
pub fn format_power(dbm: f64, unit: PowerUnit) -> String {
    format!("{:.2} {unit}", unit.from_dbm(dbm))
}

// ── Frequency ───────────────────────────────────────────────────────

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum FrequencyUnit {
    #[strum(serialize = "Hz")]
    #[serde(rename = "Hz")]
    Hz,
    #[default]
    #[strum(serialize = "kHz")]
    #[serde(rename = "kHz")]
    KHz,
    #[strum(serialize = "MHz")]
    #[serde(rename = "MHz")]
    MHz,
    #[strum(serialize = "GHz")]
    #[serde(rename = "GHz")]
    GHz,
}

impl FrequencyUnit {
    /// Multiplier applied to a Hz value to express it in this unit.
    pub fn scale(self) -> f64 {
        match self {
            Self::Hz => 1.0,
            Self::KHz => 1e-3,
            Self::MHz => 1e-6,
            Self::GHz => 1e-9,
        }
    }

    pub fn from_hz(self, hz: f64) -> f64 {
        hz * self.scale()
    }

    pub fn to_hz(self, value: f64) -> f64 {
        value / self.scale()
    }
}

/// Frequency rounded to a whole number of `unit`, e.g. `"3500 MHz"`.
pub fn format_frequency(hz: f64, unit: FrequencyUnit) -> String {
    format!("{} {unit}", unit.from_hz(hz).round())
}
