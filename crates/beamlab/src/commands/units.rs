//! Offline unit conversion.

use serde::Serialize;

use beamlab_core::units::{km_to_m, m_to_km};
use beamlab_core::{FrequencyUnit, PowerUnit, format_power};

use crate::cli::{FreqUnitArg, GlobalOpts, PowerUnitArg, UnitsArgs, UnitsCommand};
use crate::error::CliError;
use crate::output;

impl From<PowerUnitArg> for PowerUnit {
    fn from(u: PowerUnitArg) -> Self {
        match u {
            PowerUnitArg::Dbm => Self::Dbm,
            PowerUnitArg::Dbw => Self::Dbw,
        }
    }
}

impl From<FreqUnitArg> for FrequencyUnit {
    fn from(u: FreqUnitArg) -> Self {
        match u {
            FreqUnitArg::Hz => Self::Hz,
            FreqUnitArg::KHz => Self::KHz,
            FreqUnitArg::MHz => Self::MHz,
            FreqUnitArg::GHz => Self::GHz,
        }
    }
}

#[derive(Debug, Serialize)]
struct Converted {
    value: f64,
    unit: String,
}

/// Up to six decimals, trailing zeros dropped.
pub(crate) fn trim_number(value: f64) -> String {
    let s = format!("{value:.6}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".into() } else { s.to_owned() }
}

fn convert(cmd: &UnitsCommand) -> (Converted, String) {
    match *cmd {
        UnitsCommand::Power { value, from } => {
            let from = PowerUnit::from(from);
            let to = match from {
                PowerUnit::Dbm => PowerUnit::Dbw,
                PowerUnit::Dbw => PowerUnit::Dbm,
            };
            let dbm = from.to_dbm(value);
            (
                Converted {
                    value: to.from_dbm(dbm),
                    unit: to.to_string(),
                },
                format_power(dbm, to),
            )
        }

        UnitsCommand::Distance { value, km } => {
            let (value, unit) = if km {
                (km_to_m(value), "m")
            } else {
                (m_to_km(value), "km")
            };
            (
                Converted {
                    value,
                    unit: unit.into(),
                },
                format!("{} {unit}", trim_number(value)),
            )
        }

        UnitsCommand::Frequency { value, from, to } => {
            let to = FrequencyUnit::from(to);
            let value = to.from_hz(FrequencyUnit::from(from).to_hz(value));
            (
                Converted {
                    value,
                    unit: to.to_string(),
                },
                format!("{} {to}", trim_number(value)),
            )
        }
    }
}

pub fn handle(args: &UnitsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let (converted, line) = convert(&args.command);
    let out = output::render_single(&global.format(), &converted, |_| line.clone(), |_| {
        line.clone()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}
