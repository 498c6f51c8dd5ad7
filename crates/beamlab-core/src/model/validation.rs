// ── Link configuration validation ──
//
// Pure range checks. `validate` never fails: it reports every violated
// rule as a message, in a fixed field order, and keeps no state.

use serde::Serialize;

use super::link::LinkConfiguration;

// ── Limits ──────────────────────────────────────────────────────────

/// Inclusive-max range with an optionally exclusive lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Limit {
    pub min: f64,
    pub max: f64,
    /// Slider / prompt increment.
    pub step: f64,
    /// `true` when `min` itself is out of range.
    pub min_exclusive: bool,
    pub unit: &'static str,
}

impl Limit {
    const fn inclusive(min: f64, max: f64, step: f64, unit: &'static str) -> Self {
        Self {
            min,
            max,
            step,
            min_exclusive: false,
            unit,
        }
    }

    const fn exclusive_min(min: f64, max: f64, step: f64, unit: &'static str) -> Self {
        Self {
            min,
            max,
            step,
            min_exclusive: true,
            unit,
        }
    }

    /// Whether `value` lies in range. NaN and infinities never do.
    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() || value > self.max {
            return false;
        }
        if self.min_exclusive {
            value > self.min
        } else {
            value >= self.min
        }
    }

    fn describe(&self, label: &str) -> String {
        if self.min_exclusive {
            format!(
                "{label} must be greater than {} and at most {} {}",
                self.min, self.max, self.unit
            )
        } else {
            format!(
                "{label} must be between {} and {} {}",
                self.min, self.max, self.unit
            )
        }
    }
}

/// Every documented range, grouped by field.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConfigLimits {
    pub frequency_mhz: Limit,
    pub power_dbm: Limit,
    pub distance_m: Limit,
    pub gain_dbi: Limit,
    pub beamwidth_deg: Limit,
    pub bandwidth_mhz: Limit,
}

pub const LIMITS: ConfigLimits = ConfigLimits {
    frequency_mhz: Limit::inclusive(600.0, 7100.0, 100.0, "MHz"),
    power_dbm: Limit::inclusive(-10.0, 46.0, 1.0, "dBm"),
    distance_m: Limit::inclusive(1.0, 5000.0, 10.0, "m"),
    gain_dbi: Limit::inclusive(-10.0, 30.0, 0.5, "dBi"),
    beamwidth_deg: Limit::exclusive_min(0.0, 360.0, 1.0, "degrees"),
    bandwidth_mhz: Limit::exclusive_min(0.0, 1000.0, 10.0, "MHz"),
};

// ── Report ──────────────────────────────────────────────────────────

/// Outcome of [`validate`]. `is_valid` is true iff `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Check every range invariant of `config`.
///
/// Order: frequency, power, distance, tx gain, rx gain, tx beamwidth,
/// rx beamwidth, bandwidth.
pub fn validate(config: &LinkConfiguration) -> ValidationReport {
    let checks: [(&Limit, f64, &str); 8] = [
        (&LIMITS.frequency_mhz, config.frequency_mhz, "Frequency"),
        (&LIMITS.power_dbm, config.power_dbm, "Power"),
        (&LIMITS.distance_m, config.distance_m, "Distance"),
        (&LIMITS.gain_dbi, config.tx_antenna.gain_dbi, "TX antenna gain"),
        (&LIMITS.gain_dbi, config.rx_antenna.gain_dbi, "RX antenna gain"),
        (
            &LIMITS.beamwidth_deg,
            config.tx_antenna.beamwidth_deg,
            "TX antenna beamwidth",
        ),
        (
            &LIMITS.beamwidth_deg,
            config.rx_antenna.beamwidth_deg,
            "RX antenna beamwidth",
        ),
        (&LIMITS.bandwidth_mhz, config.bandwidth_mhz, "Bandwidth"),
    ];

    let errors = checks
        .iter()
        .filter(|(limit, value, _)| !limit.contains(*value))
        .map(|(limit, _, label)| limit.describe(label))
        .collect();

    ValidationReport::from_errors(errors)
}

impl LinkConfiguration {
    /// Shorthand for [`validate`].
    pub fn validate(&self) -> ValidationReport {
        validate(self)
    }
}
