use std::process::ExitCode;

/// Process exit status.
///
/// - `Success` (0): command finished, nothing to report
/// - `Failure` (1): `check` found errors, a `sync` table pass aborted, or
///   `init` found an existing config
/// - `Error` (2): the command could not run (bad config, unreadable workbook)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::SUCCESS,
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
