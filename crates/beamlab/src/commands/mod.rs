//! Command dispatch: bridges CLI args -> session calls -> output formatting.

pub mod compare;
pub mod config_cmd;
pub mod health;
pub mod link;
pub mod range;
pub mod results;
pub mod run;
pub mod units;
pub mod util;

use crate::cli::{Command, GlobalOpts};
use crate::config::Config;
use crate::error::CliError;

/// Dispatch a command that reads the config file to its handler.
pub async fn dispatch(cmd: Command, cfg: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Link(args) => link::handle(args, cfg, global),
        Command::Run(args) => run::handle(args, cfg, global).await,
        Command::Results(args) => results::handle(args, cfg, global).await,
        Command::Range(args) => range::handle(args, cfg, global).await,
        Command::Compare(args) => compare::handle(args, cfg, global).await,
        Command::Health => health::handle(cfg, global).await,
        // Handled before the config file is read
        Command::Units(_) | Command::Config(_) | Command::Completions(_) => Err(
            CliError::Internal("command dispatched after config load".into()),
        ),
    }
}
