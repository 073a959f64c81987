//! Command dispatch and handler modules.

mod check;
mod env;
mod strip;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Strip {
            file,
            trailing_commas,
            json5,
        } => strip::exec(file.as_deref(), trailing_commas, json5),
        Command::Check {
            env_file,
            settings,
            require_signing,
            strict,
        } => check::exec(
            env_file.as_deref(),
            settings.as_deref(),
            require_signing,
            strict,
        ),
        Command::Env { env_file, reveal } => env::exec(env_file.as_deref(), reveal),
    }
}
