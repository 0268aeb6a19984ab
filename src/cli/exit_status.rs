use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): The lookup produced what was asked for
/// - `Failure` (1): The lookup ran but the key or source is missing
/// - `Error` (2): Command failed due to internal error (config error, I/O error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The lookup produced what was asked for.
    Success,
    /// The lookup ran but the key or source is missing.
    Failure,
    /// Command failed due to internal error (config error, I/O error, etc.).
    Error,
}

impl ExitStatus {
    pub fn from_found(found: bool) -> Self {
        if found {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
