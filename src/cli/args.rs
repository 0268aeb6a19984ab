//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `get`: Print one translated text, falling back to the default language
//! - `show`: Print every text of the source a language resolves to
//! - `exists`: Report whether a language has a source of its own
//! - `init`: Initialize a langfall configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::resolver::DEFAULT_CATEGORY;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Get(cmd)) => cmd.args.common.verbose,
            Some(Command::Show(cmd)) => cmd.args.common.verbose,
            Some(Command::Exists(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all lookup commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory to start the config file search from
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Directory holding the translation sources (overrides config file)
    #[arg(long, env = "LANGFALL_ROOT")]
    pub root: Option<String>,

    /// Default language (overrides config file)
    #[arg(long)]
    pub default_language: Option<String>,

    /// Name of the table holding the texts inside a source (overrides config file)
    #[arg(long)]
    pub convention: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Args)]
pub struct LookupArgs {
    /// Translation category
    #[arg(short, long, default_value = DEFAULT_CATEGORY)]
    pub category: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct GetCommand {
    /// Language code
    pub language: String,
    /// Translation key
    pub key: String,
    #[command(flatten)]
    pub args: LookupArgs,
}

#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Language code
    pub language: String,
    #[command(flatten)]
    pub args: LookupArgs,
}

#[derive(Debug, Args)]
pub struct ExistsCommand {
    /// Language code
    pub language: String,
    #[command(flatten)]
    pub args: LookupArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a translated text, falling back to the default language
    Get(GetCommand),
    /// Print all texts of the source a language resolves to
    Show(ShowCommand),
    /// Check whether a language has a translation source of its own
    Exists(ExistsCommand),
    /// Initialize a new .langfallrc.json configuration file
    Init,
}
