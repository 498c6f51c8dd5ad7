//! CLI configuration: thin wrapper around `beamlab_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides (--server,
//! --timeout, ...) and turns link flags into a `LinkConfiguration`.

use clap::ValueEnum;

use beamlab_core::{LinkConfiguration, Polarization, SessionConfig, SystemGeneration};

use crate::cli::{ColorMode, GlobalOpts, LinkFlags, OutputFormat, PolarizationArg, SystemArg};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use beamlab_config::{
    Config, LINK_KEYS, LinkDefaults, Profile, config_path, load_config, profile_to_session_config,
    save_config,
};

// ── Global defaults ─────────────────────────────────────────────────

/// Fill output and color from `[defaults]` when no flag or env var set them.
///
/// Unparseable values in the file are ignored.
pub fn apply_defaults(global: &mut GlobalOpts, cfg: &Config) {
    if global.output.is_none() {
        global.output = OutputFormat::from_str(&cfg.defaults.output, true).ok();
    }
    if global.color.is_none() {
        global.color = ColorMode::from_str(&cfg.defaults.color, true).ok();
    }
}

// ── Profile resolution ──────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build a `SessionConfig` from flags, the active profile and defaults.
///
/// An explicitly requested profile must exist unless `--server` is also
/// given. A missing default profile falls back to the local backend.
pub fn resolve_session_config(
    global: &GlobalOpts,
    cfg: &Config,
) -> Result<SessionConfig, CliError> {
    let profile_name = active_profile_name(global, cfg);
    let mut profile = match cfg.profiles.get(&profile_name) {
        Some(p) => p.clone(),
        None if global.profile.is_some() && global.server.is_none() => {
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: cfg.available_profiles(),
            });
        }
        None => Profile::default(),
    };

    // Flags and env vars beat the profile; the profile beats [defaults].
    if let Some(ref server) = global.server {
        profile.server.clone_from(server);
    }
    if global.timeout.is_some() {
        profile.timeout = global.timeout;
    }

    Ok(profile_to_session_config(&profile, &cfg.defaults)?)
}

// ── Link resolution ─────────────────────────────────────────────────

impl From<SystemArg> for SystemGeneration {
    fn from(s: SystemArg) -> Self {
        match s {
            SystemArg::FiveG => Self::FiveG,
            SystemArg::FiveGAdvanced => Self::FiveGAdvanced,
            SystemArg::SixG => Self::SixG,
        }
    }
}

impl From<PolarizationArg> for Polarization {
    fn from(p: PolarizationArg) -> Self {
        match p {
            PolarizationArg::Horizontal => Self::Horizontal,
            PolarizationArg::Vertical => Self::Vertical,
        }
    }
}

impl From<&LinkFlags> for LinkDefaults {
    fn from(f: &LinkFlags) -> Self {
        Self {
            frequency_mhz: f.frequency,
            power_dbm: f.power,
            distance_m: f.distance,
            system: f.system.map(Into::into),
            bandwidth_mhz: f.bandwidth,
            tx_gain_dbi: f.tx_gain,
            tx_polarization: f.tx_polarization.map(Into::into),
            tx_beamwidth_deg: f.tx_beamwidth,
            rx_gain_dbi: f.rx_gain,
            rx_polarization: f.rx_polarization.map(Into::into),
            rx_beamwidth_deg: f.rx_beamwidth,
        }
    }
}

/// Flags over `[link]` over built-in defaults.
///
/// The bandwidth follows the resolved system unless one of the layers
/// sets it explicitly.
pub fn resolve_link(flags: &LinkFlags, cfg: &Config) -> LinkConfiguration {
    let layered = LinkDefaults::from(flags).over(&cfg.link);
    LinkConfiguration::create(layered.to_params())
}
