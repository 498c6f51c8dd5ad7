//! Submit a link for simulation.

use crate::cli::{DisplayUnits, FreqUnitArg, GlobalOpts, OutputFormat, PowerUnitArg, RunArgs};
use crate::config::Config;
use crate::error::CliError;
use crate::output;

use super::{link, results, util};

pub async fn handle(args: RunArgs, cfg: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    let session = util::session_with_link(global, cfg, &args.link)?;
    let spinner_quiet = global.quiet || global.format() != OutputFormat::Table;

    let record =
        util::with_spinner("Submitting simulation", spinner_quiet, session.run_simulation())
            .await?;
    tracing::info!(simulation_id = %record.simulation_id, "simulation accepted");

    if args.fetch {
        let fetched =
            util::with_spinner("Fetching results", spinner_quiet, session.fetch_results()).await?;
        let units = DisplayUnits {
            power_unit: PowerUnitArg::Dbm,
            freq_unit: FreqUnitArg::MHz,
        };
        results::print(&fetched, &units, false, global);
        return Ok(());
    }

    let summary = record.summary();
    let out = output::render_single(&global.format(), &summary, link::summary_detail, |s| {
        s.simulation_id.clone()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}
