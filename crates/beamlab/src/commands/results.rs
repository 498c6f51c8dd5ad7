//! Latest simulation results.

use tabled::Tabled;

use beamlab_core::{
    FrequencyUnit, PowerUnit, SimulationResults, SpectrumSample, SystemGeneration,
    format_frequency, format_power,
};

use crate::cli::{DisplayUnits, GlobalOpts, OutputFormat, ResultsArgs};
use crate::config::Config;
use crate::error::CliError;
use crate::output;

use super::util;

const NO_RESULTS: &str = "No results yet. Run: beamlab run";

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct SpectrumRow {
    #[tabled(rename = "Frequency")]
    frequency: String,
    #[tabled(rename = "Magnitude")]
    magnitude: String,
}

fn spectrum_row(s: &SpectrumSample, unit: FrequencyUnit) -> SpectrumRow {
    SpectrumRow {
        frequency: format!("{:.3} {unit}", unit.from_hz(s.freq_hz)),
        magnitude: format!("{:.2} dB", s.magnitude_db),
    }
}

// ── Detail view ─────────────────────────────────────────────────────

fn db(value: Option<f64>) -> String {
    value.map_or_else(|| "-".into(), |v| format!("{v:.2} dB"))
}

pub(crate) fn detail(r: &SimulationResults, power: PowerUnit, freq: FrequencyUnit) -> String {
    let mut lines = vec![
        format!(
            "System:          {}",
            r.system.map_or("-", SystemGeneration::display_name)
        ),
        format!(
            "Received power:  {}",
            r.power_received_dbm
                .map_or_else(|| "-".into(), |p| format_power(p, power))
        ),
        format!("SNR:             {}", db(r.snr_db)),
        format!("Path loss:       {}", db(r.path_loss_db)),
    ];

    if let Some(hz) = r.frequency_hz {
        lines.push(format!("Frequency:       {}", format_frequency(hz, freq)));
    }
    if let Some(hz) = r.bandwidth_hz {
        let bandwidth = super::units::trim_number(freq.from_hz(hz));
        lines.push(format!("Bandwidth:       {bandwidth} {freq}"));
    }
    if let Some(dbm) = r.power_dbm {
        lines.push(format!("TX power:        {}", format_power(dbm, power)));
    }
    if let Some(m) = r.distance_m {
        lines.push(format!("Distance:        {m} m"));
    }
    if let Some(ref a) = r.antenna {
        lines.push(format!("Antenna gain:    {:.2} dB", a.antenna_gain_db));
        lines.push(format!(
            "Pol. mismatch:   {:.2} dB",
            a.polarization_mismatch_loss_db
        ));
    }
    lines.push(format!("Spectrum:        {} samples", r.spectrum.len()));

    lines.join("\n")
}

/// Print results the way the chosen format wants them.
pub(crate) fn print(
    results: &SimulationResults,
    units: &DisplayUnits,
    spectrum: bool,
    global: &GlobalOpts,
) {
    if results.is_empty() {
        if !global.quiet {
            eprintln!("{NO_RESULTS}");
        }
        return;
    }

    let format = global.format();
    let power = PowerUnit::from(units.power_unit);
    let freq = FrequencyUnit::from(units.freq_unit);

    let out = if spectrum {
        output::render_list(
            &format,
            &results.spectrum,
            |s| spectrum_row(s, freq),
            |s| format!("{}\t{}", s.freq_hz, s.magnitude_db),
        )
    } else {
        output::render_single(
            &format,
            results,
            |r| detail(r, power, freq),
            |r| r.snr_db.map(|v| format!("{v}")).unwrap_or_default(),
        )
    };
    output::print_output(&out, global.quiet);
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: ResultsArgs, cfg: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    let session = util::session(global, cfg, None)?;
    let quiet = global.quiet || global.format() != OutputFormat::Table;
    let results = util::with_spinner("Fetching results", quiet, session.fetch_results()).await?;
    print(&results, &args.units, args.spectrum, global);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_respects_display_units() {
        let results = SimulationResults {
            power_received_dbm: Some(-62.5),
            snr_db: Some(31.25),
            path_loss_db: Some(85.0),
            system: Some(SystemGeneration::SixG),
            frequency_hz: Some(2.8e10),
            ..SimulationResults::default()
        };
        let out = detail(&results, PowerUnit::Dbw, FrequencyUnit::GHz);
        insta::assert_snapshot!(out, @r"
        System:          6G (Terahertz)
        Received power:  -92.50 dBW
        SNR:             31.25 dB
        Path loss:       85.00 dB
        Frequency:       28 GHz
        Spectrum:        0 samples
        ");
    }

    #[test]
    fn bandwidth_keeps_fractional_units() {
        let results = SimulationResults {
            bandwidth_hz: Some(2e7),
            ..SimulationResults::default()
        };
        let out = detail(&results, PowerUnit::Dbm, FrequencyUnit::GHz);
        assert!(out.contains("Bandwidth:       0.02 GHz"), "{out}");

        let out = detail(&results, PowerUnit::Dbm, FrequencyUnit::MHz);
        assert!(out.contains("Bandwidth:       20 MHz"), "{out}");
    }

    #[test]
    fn missing_metrics_render_as_dash() {
        let out = detail(
            &SimulationResults::default(),
            PowerUnit::Dbm,
            FrequencyUnit::MHz,
        );
        assert!(out.contains("SNR:             -"));
    }
}
