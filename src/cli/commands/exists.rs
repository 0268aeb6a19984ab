use anyhow::Result;

use super::{CommandResult, CommandSummary, ExistsSummary, context::LookupContext};
use crate::cli::args::ExistsCommand;

pub fn exists(cmd: ExistsCommand) -> Result<CommandResult> {
    let ctx = LookupContext::new(&cmd.args)?;
    let exists = ctx.resolver().exists(&cmd.language);

    Ok(CommandResult::new(CommandSummary::Exists(ExistsSummary {
        language: cmd.language,
        category: ctx.category,
        exists,
    })))
}
