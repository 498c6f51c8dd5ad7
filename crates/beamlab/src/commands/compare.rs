//! Cross-system comparison.

use std::fmt::Write;

use tabled::Tabled;

use beamlab_core::{SystemComparison, SystemGeneration, SystemMetrics};

use crate::cli::{CompareArgs, GlobalOpts, OutputFormat};
use crate::config::Config;
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct SystemRow {
    #[tabled(rename = "System")]
    system: String,
    #[tabled(rename = "Received")]
    received: String,
    #[tabled(rename = "SNR")]
    snr: String,
    #[tabled(rename = "Path loss")]
    path_loss: String,
    #[tabled(rename = "Bandwidth")]
    bandwidth: String,
    #[tabled(rename = "System gain")]
    gain: String,
}

fn row(system: SystemGeneration, m: &SystemMetrics, best: bool, color: bool) -> SystemRow {
    let name = if best {
        output::highlight(&format!("{system} *"), color)
    } else {
        system.to_string()
    };
    SystemRow {
        system: name,
        received: format!("{:.2} dBm", m.power_received_dbm),
        snr: format!("{:.2} dB", m.snr_db),
        path_loss: format!("{:.2} dB", m.path_loss_db),
        bandwidth: format!("{} MHz", m.bandwidth_hz / 1e6),
        gain: format!("{:.2} dB", m.system_gain_db),
    }
}

fn table(cmp: &SystemComparison, color: bool) -> String {
    let best = cmp.best_by_snr();
    let rows: Vec<(SystemGeneration, SystemMetrics)> =
        cmp.systems.iter().map(|(s, m)| (*s, *m)).collect();
    let mut out = output::render_list(
        &OutputFormat::Table,
        &rows,
        |(s, m)| row(*s, m, best == Some(*s), color),
        |(s, _)| s.to_string(),
    );
    if let Some(best) = best {
        let _ = write!(
            out,
            "\nBest SNR at {} m: {}",
            cmp.parameters.distance_m,
            best.display_name()
        );
    }
    out
}

pub async fn handle(args: CompareArgs, cfg: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    let session = util::session_with_link(global, cfg, &args.link)?;
    let format = global.format();
    let spinner_quiet = global.quiet || format != OutputFormat::Table;

    let cmp =
        util::with_spinner("Comparing systems", spinner_quiet, session.fetch_comparison()).await?;

    let color = output::should_color(&global.color_mode());
    let out = output::render_single(&format, cmp.as_ref(), |c| table(c, color), |c| {
        c.best_by_snr().map(|s| s.tag().to_owned()).unwrap_or_default()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use beamlab_core::ComparisonParameters;

    use super::*;

    fn comparison() -> SystemComparison {
        let metrics = |snr_db, bandwidth_hz| SystemMetrics {
            power_received_dbm: -60.0,
            snr_db,
            path_loss_db: 80.0,
            bandwidth_hz,
            system_gain_db: 0.0,
        };
        SystemComparison {
            systems: BTreeMap::from([
                (SystemGeneration::FiveG, metrics(30.0, 20e6)),
                (SystemGeneration::SixG, metrics(36.0, 200e6)),
            ]),
            range: BTreeMap::new(),
            parameters: ComparisonParameters {
                power_dbm: 23.0,
                frequency_hz: 3.5e9,
                distance_m: 200.0,
                bandwidth_hz: None,
            },
        }
    }

    #[test]
    fn best_system_is_marked() {
        let out = table(&comparison(), false);
        assert!(out.contains("6G *"));
        assert!(!out.contains("5G *"));
        assert!(out.contains("200 MHz"));
        assert!(out.ends_with("Best SNR at 200 m: 6G (Terahertz)"));
    }
}
