use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed; generated code is written or up to date
/// - `Failure` (1): Command completed but the project needs attention (stale output, config already exists)
/// - `Error` (2): Compilation, config or I/O error
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
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
