use super::{
    args::{Arguments, Command},
    commands::{CommandResult, exists::exists, get::get, init::init, show::show},
};
use anyhow::Result;

/// Dispatch to the handler of the parsed command.
///
/// # Returns
/// - `Ok(CommandResult)` describing what was found
/// - `Err` if the command fails (e.g., invalid config, unwritable directory)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Get(cmd)) => get(cmd),
        Some(Command::Show(cmd)) => show(cmd),
        Some(Command::Exists(cmd)) => exists(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
