use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{export::export, import::import, init::init, translate::translate},
};
use anyhow::Result;

/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command's summary
/// - `Err` if the command fails (e.g., invalid config, unreadable dictionary)
pub fn run(Arguments { command, translate: args }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Export(cmd)) => export(cmd),
        Some(Command::Import(cmd)) => import(cmd),
        Some(Command::Init) => init(),
        None => translate(args),
    }
}
