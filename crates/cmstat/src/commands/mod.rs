//! Command dispatch: bridges CLI args -> modem queries -> output formatting.

pub mod channels;
pub mod config_cmd;
pub mod info;

use cmstat_core::Modem;

use crate::cli::{Command, GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Per-invocation settings every modem-bound handler needs.
pub struct Ctx<'a> {
    pub global: &'a GlobalOpts,
    pub format: OutputFormat,
    pub color: bool,
}

/// Dispatch a modem-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, modem: &Modem, ctx: &Ctx<'_>) -> Result<(), CliError> {
    match cmd {
        Command::Info => info::handle(modem, ctx).await,
        Command::Channels(args) => channels::handle(modem, &args, ctx).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
