use anyhow::Result;

use super::{CommandResult, CommandSummary, GetSummary, context::LookupContext};
use crate::cli::args::GetCommand;

pub fn get(cmd: GetCommand) -> Result<CommandResult> {
    let ctx = LookupContext::new(&cmd.args)?;
    let outcome = ctx.resolver().text(&cmd.language, &cmd.key);

    Ok(CommandResult::new(CommandSummary::Get(GetSummary {
        language: cmd.language,
        key: cmd.key,
        outcome,
    })))
}
