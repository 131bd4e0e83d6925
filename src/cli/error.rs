//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("course \"{0}\" not found")]
    CourseNotFound(String),

    #[error("{0} prerequisite reference(s) do not resolve")]
    DanglingPrerequisites(usize),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Application(e) => match e {
                ApplicationError::SourceUnavailable { .. } => crate::exitcode::NOINPUT,
                ApplicationError::NoDataFile => crate::exitcode::USAGE,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
            },
            CliError::Io(_) => crate::exitcode::IOERR,
            CliError::CourseNotFound(_) | CliError::DanglingPrerequisites(_) => {
                crate::exitcode::DATAERR
            }
        }
    }
}
