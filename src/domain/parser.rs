//! Course source parsing: one record per line, comma separated.
//!
//! Line layout: `NUMBER,TITLE[,PREREQ...]`. No header row, no quoting.

use tracing::{debug, instrument};

use crate::domain::entities::{Course, CourseId};
use crate::domain::error::DomainError;

/// Default column separator.
pub const DEFAULT_DELIMITER: char = ',';

/// Result of parsing a whole source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCourses {
    /// Valid records, in source order
    pub courses: Vec<Course>,
    /// Lines that were skipped, with their line numbers
    pub rejected: Vec<DomainError>,
}

/// Parse all lines of `content`.
///
/// Blank lines are skipped silently. Malformed lines are collected in
/// [`ParsedCourses::rejected`] and parsing continues with the next line.
#[instrument(level = "debug", skip(content))]
pub fn parse_courses(content: &str, delimiter: char) -> ParsedCourses {
    let mut parsed = ParsedCourses::default();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(idx + 1, line, delimiter) {
            Ok(course) => parsed.courses.push(course),
            Err(e) => {
                debug!("{}", e);
                parsed.rejected.push(e);
            }
        }
    }

    parsed
}

/// Parse a single non-blank line. `line_number` is 1-based and only used for errors.
pub fn parse_line(line_number: usize, line: &str, delimiter: char) -> Result<Course, DomainError> {
    let columns: Vec<&str> = line.split(delimiter).collect();
    if columns.len() < 2 {
        return Err(DomainError::MissingColumns {
            line: line_number,
            found: columns.len(),
        });
    }

    let id = CourseId::new(columns[0]);
    if id.is_empty() {
        return Err(DomainError::EmptyCourseId { line: line_number });
    }

    let title = columns[1].trim();
    if title.is_empty() {
        return Err(DomainError::EmptyTitle { line: line_number });
    }

    let prerequisites = columns[2..]
        .iter()
        .map(|column| column.trim())
        .filter(|column| !column.is_empty())
        .map(CourseId::new)
        .collect();

    Ok(Course {
        id,
        title: title.to_string(),
        prerequisites,
    })
}
