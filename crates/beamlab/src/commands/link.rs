//! Offline link commands: show, validate, wire, summary.

use beamlab_core::{AntennaConfig, LinkConfiguration, RecordSummary, SimulationRecord};

use crate::cli::{GlobalOpts, LinkArgs, LinkCommand, OutputFormat};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

// ── Detail views ────────────────────────────────────────────────────

fn antenna_line(a: &AntennaConfig) -> String {
    format!(
        "{} dBi, {}, {}°",
        a.gain_dbi, a.polarization, a.beamwidth_deg
    )
}

pub(crate) fn detail(link: &LinkConfiguration) -> String {
    [
        format!("System:     {}", link.system.display_name()),
        format!("Frequency:  {} MHz", link.frequency_mhz),
        format!("Bandwidth:  {} MHz", link.bandwidth_mhz),
        format!("Power:      {} dBm", link.power_dbm),
        format!("Distance:   {} m", link.distance_m),
        format!("TX antenna: {}", antenna_line(&link.tx_antenna)),
        format!("RX antenna: {}", antenna_line(&link.rx_antenna)),
    ]
    .join("\n")
}

fn plain(link: &LinkConfiguration) -> String {
    [
        format!("frequency_mhz={}", link.frequency_mhz),
        format!("power_dbm={}", link.power_dbm),
        format!("distance_m={}", link.distance_m),
        format!("system={}", link.system),
        format!("bandwidth_mhz={}", link.bandwidth_mhz),
    ]
    .join("\n")
}

pub(crate) fn summary_detail(s: &RecordSummary) -> String {
    let p = &s.parameters;
    [
        format!("ID:        {}", s.simulation_id),
        format!("Timestamp: {}", s.timestamp),
        format!("System:    {}", p.system),
        format!("Frequency: {}", p.frequency),
        format!("Bandwidth: {}", p.bandwidth),
        format!("Power:     {}", p.power),
        format!("Distance:  {}", p.distance),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: LinkArgs, cfg: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    let format = global.format();

    match args.command {
        LinkCommand::Show(flags) => {
            let link = config::resolve_link(&flags, cfg);
            let out = output::render_single(&format, &link, detail, plain);
            output::print_output(&out, global.quiet);
            Ok(())
        }

        LinkCommand::Validate(flags) => {
            let link = config::resolve_link(&flags, cfg);
            let report = link.validate();
            let color = output::should_color(&global.color_mode());

            let out = output::render_single(
                &format,
                &report,
                |r| {
                    if r.is_valid {
                        format!("{} Link configuration is valid", output::ok_mark(color))
                    } else {
                        r.errors
                            .iter()
                            .map(|e| format!("{} {e}", output::fail_mark(color)))
                            .collect::<Vec<_>>()
                            .join("\n")
                    }
                },
                |r| {
                    if r.is_valid {
                        "valid".into()
                    } else {
                        r.errors.join("\n")
                    }
                },
            );
            output::print_output(&out, global.quiet);

            if report.is_valid {
                Ok(())
            } else {
                Err(CliError::invalid_link(&report.errors))
            }
        }

        LinkCommand::Wire { link, basic } => {
            let link = config::resolve_link(&link, cfg);
            let mut payload = link.to_wire_format();
            if basic {
                payload = payload.basic();
            }
            // The wire body is JSON in every human-facing format.
            let format = match format {
                OutputFormat::Table => OutputFormat::Json,
                OutputFormat::Plain => OutputFormat::JsonCompact,
                other => other,
            };
            let out = output::render_single(&format, &payload, output::render_json_pretty, |_| {
                String::new()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        LinkCommand::Summary(flags) => {
            let record = SimulationRecord::new(config::resolve_link(&flags, cfg));
            let summary = record.summary();
            let out = output::render_single(&format, &summary, summary_detail, |s| {
                s.simulation_id.clone()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
