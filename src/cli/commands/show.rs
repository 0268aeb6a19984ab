use anyhow::Result;

use super::{CommandResult, CommandSummary, ShowSummary, context::LookupContext};
use crate::cli::args::ShowCommand;

pub fn show(cmd: ShowCommand) -> Result<CommandResult> {
    let ctx = LookupContext::new(&cmd.args)?;
    let resolution = ctx.resolver().resolve(&cmd.language);

    Ok(CommandResult::new(CommandSummary::Show(ShowSummary {
        requested: cmd.language,
        category: ctx.category,
        resolution,
    })))
}
