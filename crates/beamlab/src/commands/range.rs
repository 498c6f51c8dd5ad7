//! Distance sweep for the current link.

use tabled::Tabled;

use beamlab_core::{RangeCurve, RangeSample};

use crate::cli::{GlobalOpts, OutputFormat, RangeArgs};
use crate::config::Config;
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct RangeRow {
    #[tabled(rename = "Distance")]
    distance: String,
    #[tabled(rename = "Received")]
    received: String,
    #[tabled(rename = "SNR")]
    snr: String,
    #[tabled(rename = "Path loss")]
    path_loss: String,
}

impl From<&RangeSample> for RangeRow {
    fn from(p: &RangeSample) -> Self {
        Self {
            distance: format!("{:.1} m", p.distance_m),
            received: format!("{:.2} dBm", p.power_received_dbm),
            snr: format!("{:.2} dB", p.snr_db),
            path_loss: format!("{:.2} dB", p.path_loss_db),
        }
    }
}

fn reach_line(curve: &RangeCurve, min_snr: f64) -> String {
    match curve.max_distance_with_snr(min_snr) {
        Some(d) => format!("Max distance with SNR >= {min_snr} dB: {d:.1} m"),
        None => format!("No sampled distance reaches {min_snr} dB SNR"),
    }
}

pub async fn handle(args: RangeArgs, cfg: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    let session = util::session_with_link(global, cfg, &args.link)?;
    let format = global.format();
    let spinner_quiet = global.quiet || format != OutputFormat::Table;

    let curve = util::with_spinner("Sweeping distance", spinner_quiet, session.fetch_range()).await?;

    if curve.is_empty() {
        if !global.quiet {
            eprintln!("Backend returned no range data");
        }
        return Ok(());
    }

    let out = output::render_list(&format, &curve.points, |p| RangeRow::from(p), |p| {
        format!("{}\t{}", p.distance_m, p.snr_db)
    });
    output::print_output(&out, global.quiet);

    if let Some(min_snr) = args.min_snr.filter(|_| format == OutputFormat::Table) {
        output::print_output(&reach_line(&curve, min_snr), global.quiet);
    }
    Ok(())
}
