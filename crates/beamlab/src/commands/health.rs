//! Backend liveness probe.

use beamlab_core::CoreError;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::config::Config;
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(cfg: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    let session = util::session(global, cfg, None)?;
    let server = session.config().server.to_string();
    let spinner_quiet = global.quiet || global.format() != OutputFormat::Table;

    let health = util::with_spinner("Contacting backend", spinner_quiet, session.client().health())
        .await
        .map_err(CoreError::from)?;
    tracing::debug!(status = %health.status, "health check answered");

    let color = output::should_color(&global.color_mode());
    let out = output::render_single(
        &global.format(),
        &health,
        |h| {
            let version = h
                .version
                .as_deref()
                .map(|v| format!(" {v}"))
                .unwrap_or_default();
            format!(
                "{} {}{version} at {server}: {}",
                output::ok_mark(color),
                h.service,
                h.status
            )
        },
        |h| h.status.clone(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
