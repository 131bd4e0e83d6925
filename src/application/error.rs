//! Application-level errors

use std::path::PathBuf;
use thiserror::Error;

/// Application errors cover what can stop a single operation.
///
/// Malformed lines, missing courses and dangling prerequisites are not in
/// here: they are reported as data and never abort anything.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("could not open file \"{}\": {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no course file given and no data_file configured")]
    NoDataFile,

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
