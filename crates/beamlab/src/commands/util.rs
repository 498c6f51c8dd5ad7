//! Shared helpers for command handlers.

use std::future::Future;
use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use beamlab_core::{LinkConfiguration, Session};

use crate::cli::{GlobalOpts, LinkFlags};
use crate::config::{self, Config};
use crate::error::CliError;

/// Open a session against the resolved backend, seeded with `link`.
pub fn session(
    global: &GlobalOpts,
    cfg: &Config,
    link: Option<LinkConfiguration>,
) -> Result<Session, CliError> {
    let session_config = config::resolve_session_config(global, cfg)?;
    tracing::debug!(server = %session_config.server, "opening session");
    let session = Session::new(session_config)?;
    if let Some(link) = link {
        session.set_link(link);
    }
    Ok(session)
}

/// Resolve link flags and open a session carrying the result.
pub fn session_with_link(
    global: &GlobalOpts,
    cfg: &Config,
    flags: &LinkFlags,
) -> Result<Session, CliError> {
    session(global, cfg, Some(config::resolve_link(flags, cfg)))
}

/// Await `fut` behind a spinner on stderr.
///
/// The spinner only shows on an interactive terminal and never in
/// quiet mode, so piped output stays clean.
pub async fn with_spinner<T, F>(message: &str, quiet: bool, fut: F) -> T
where
    F: Future<Output = T>,
{
    if quiet || !std::io::stderr().is_terminal() {
        return fut.await;
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_owned());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let out = fut.await;
    spinner.finish_and_clear();
    out
}
