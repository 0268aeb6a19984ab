use crate::{error::Error, resolver::Resolution};

use super::super::exit_status::ExitStatus;

#[derive(Debug)]
pub enum CommandSummary {
    Get(GetSummary),
    Show(ShowSummary),
    Exists(ExistsSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct GetSummary {
    pub language: String,
    pub key: String,
    /// The text, or why there is none.
    pub outcome: Result<String, Error>,
}

#[derive(Debug)]
pub struct ShowSummary {
    pub requested: String,
    pub category: String,
    /// `None` when neither the language nor the default has a source.
    pub resolution: Option<Resolution>,
}

#[derive(Debug)]
pub struct ExistsSummary {
    pub language: String,
    pub category: String,
    pub exists: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    /// False when a config file was already there.
    pub created: bool,
}

/// Result of running langfall commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self { summary }
    }

    pub fn exit_status(&self) -> ExitStatus {
        let found = match &self.summary {
            CommandSummary::Get(summary) => summary.outcome.is_ok(),
            CommandSummary::Show(summary) => summary.resolution.is_some(),
            CommandSummary::Exists(summary) => summary.exists,
            CommandSummary::Init(summary) => summary.created,
        };
        ExitStatus::from_found(found)
    }
}
