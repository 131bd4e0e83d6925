//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors describe course source lines that cannot become records.
///
/// These are reported and skipped during ingestion; none of them abort a load.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("format error (line {line}): need at least course number and title, found {found} column(s)")]
    MissingColumns { line: usize, found: usize },

    #[error("format error (line {line}): course number is empty")]
    EmptyCourseId { line: usize },

    #[error("format error (line {line}): course title is empty")]
    EmptyTitle { line: usize },
}

impl DomainError {
    /// 1-based source line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            DomainError::MissingColumns { line, .. }
            | DomainError::EmptyCourseId { line }
            | DomainError::EmptyTitle { line } => *line,
        }
    }
}
