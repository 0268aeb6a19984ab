//! Report formatting and printing utilities.
//!
//! Separate from the lookup logic so langfall can be used as a library.
//! Successful results go to stdout, failures to stderr.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::{
    commands::{
        CommandResult, CommandSummary, ExistsSummary, GetSummary, InitSummary, ShowSummary,
    },
    exit_status::ExitStatus,
};
use crate::{config::CONFIG_FILE_NAME, error::Error};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout, or to stderr when it did not succeed.
pub fn print(result: &CommandResult) {
    if result.exit_status() == ExitStatus::Success {
        print_to(result, &mut io::stdout().lock());
    } else {
        print_to(result, &mut io::stderr().lock());
    }
}

/// Print a command result to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Get(summary) => print_get(summary, writer),
        CommandSummary::Show(summary) => print_show(summary, writer),
        CommandSummary::Exists(summary) => print_exists(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_get<W: Write>(summary: &GetSummary, writer: &mut W) {
    match &summary.outcome {
        Ok(text) => {
            let _ = writeln!(writer, "{}", text);
        }
        Err(err) => print_failure(&err.to_string(), writer),
    }
}

fn print_show<W: Write>(summary: &ShowSummary, writer: &mut W) {
    let Some(resolution) = &summary.resolution else {
        let err = Error::no_source(&summary.requested, &summary.category);
        print_failure(&err.to_string(), writer);
        return;
    };

    let language = if resolution.fell_back {
        format!("{} -> {} (default)", summary.requested, resolution.language)
    } else {
        resolution.language.clone()
    };
    let source = resolution
        .strategy
        .map_or("cache", |strategy| strategy.name());

    let _ = writeln!(writer, "{} {}", "language:".bold(), language);
    let _ = writeln!(writer, "{} {}", "category:".bold(), summary.category);
    let _ = writeln!(writer, "{} {}", "source:".bold(), source);

    let entries = resolution.messages.sorted();
    if entries.is_empty() {
        let _ = writeln!(writer, "{}", "(no entries)".dimmed());
        return;
    }

    // Align values on display width so accented keys line up too
    let key_width = entries
        .iter()
        .map(|(key, _)| UnicodeWidthStr::width(*key))
        .max()
        .unwrap_or(0);
    for (key, text) in entries {
        let padding = key_width - UnicodeWidthStr::width(key);
        let _ = writeln!(
            writer,
            "{}{:padding$} {} {}",
            key.cyan(),
            "",
            "=".dimmed(),
            text,
            padding = padding
        );
    }
}

fn print_exists<W: Write>(summary: &ExistsSummary, writer: &mut W) {
    if summary.exists {
        let msg = format!(
            "'{}' has a source in category '{}'",
            summary.language, summary.category
        );
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
    } else {
        let msg = format!(
            "'{}' has no source in category '{}'",
            summary.language, summary.category
        );
        print_failure(&msg, writer);
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(writer, "Error: {} already exists", CONFIG_FILE_NAME);
    }
}

fn print_failure<W: Write>(msg: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), msg.red());
}
