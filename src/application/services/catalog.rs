//! Catalog session service
//!
//! Owns the one catalog of a session and runs the collaborators around it:
//! ingestion from a course file, prerequisite validation and detail lookup.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use itertools::Itertools;
use tracing::{debug, info, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{
    dangling_prerequisites, parse_courses, Catalog, Course, CourseId, DanglingPrerequisite,
    DomainError, Iter, Traversal,
};
use crate::infrastructure::traits::FileSystem;

/// Outcome of loading one course file.
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// File that was read
    pub source: PathBuf,
    /// Growth of the catalog (new course numbers)
    pub added: usize,
    /// Records that overwrote an existing course number
    pub replaced: usize,
    /// Skipped lines
    pub rejected: Vec<DomainError>,
    /// Unresolved prerequisites after the load (empty when validation is off)
    pub dangling: Vec<DanglingPrerequisite>,
}

/// A prerequisite as shown in a course detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrerequisiteLabel {
    pub id: CourseId,
    pub resolved: bool,
}

impl fmt::Display for PrerequisiteLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.resolved {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{} (not found)", self.id)
        }
    }
}

/// A course together with its resolved prerequisite labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDetail {
    pub course: Course,
    pub prerequisites: Vec<PrerequisiteLabel>,
}

impl fmt::Display for CourseDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.course)?;
        if self.prerequisites.is_empty() {
            write!(f, "Prerequisites: None")
        } else {
            write!(f, "Prerequisites: {}", self.prerequisites.iter().join(", "))
        }
    }
}

/// Service for one catalog session.
pub struct CatalogService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
    catalog: Catalog,
    loaded: bool,
}

impl CatalogService {
    /// Create a service with an empty catalog.
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self {
            fs,
            settings,
            catalog: Catalog::new(),
            loaded: false,
        }
    }

    /// Read `path` and insert every valid line into the catalog.
    ///
    /// An unreadable source fails the call and leaves the catalog as it was.
    /// Malformed lines are skipped and listed in the report. Loading on top
    /// of earlier data overwrites matching course numbers.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&mut self, path: &Path) -> ApplicationResult<LoadReport> {
        let content = self.fs.read_to_string(path).with_path_context(path)?;
        let parsed = parse_courses(&content, self.settings.delimiter);

        let before = self.catalog.len();
        let mut replaced = 0;
        for course in parsed.courses {
            if self.catalog.insert(course).is_some() {
                replaced += 1;
            }
        }
        let added = self.catalog.len() - before;
        self.loaded = true;

        let dangling = if self.settings.validate_on_load {
            self.validate()
        } else {
            Vec::new()
        };

        info!(
            "loaded {} course(s) from {} ({} replaced, {} line(s) rejected)",
            added,
            path.display(),
            replaced,
            parsed.rejected.len()
        );

        Ok(LoadReport {
            source: path.to_path_buf(),
            added,
            replaced,
            rejected: parsed.rejected,
            dangling,
        })
    }

    /// Prerequisite references that do not resolve to a stored course.
    pub fn validate(&self) -> Vec<DanglingPrerequisite> {
        let dangling = dangling_prerequisites(&self.catalog);
        for reference in &dangling {
            debug!("{}", reference);
        }
        dangling
    }

    /// Look up a course by user input (any case, surrounding whitespace ignored).
    #[instrument(level = "debug", skip(self))]
    pub fn course_detail(&self, raw: &str) -> Option<CourseDetail> {
        let id = CourseId::new(raw);
        if id.is_empty() {
            return None;
        }

        let course = self.catalog.search(&id)?;
        let prerequisites = course
            .prerequisites
            .iter()
            .map(|prerequisite| match self.catalog.search(prerequisite) {
                Some(found) => PrerequisiteLabel {
                    id: found.id.clone(),
                    resolved: true,
                },
                None => PrerequisiteLabel {
                    id: prerequisite.clone(),
                    resolved: false,
                },
            })
            .collect();

        Some(CourseDetail {
            course: course.clone(),
            prerequisites,
        })
    }

    /// Remove a course by user input; `None` when it was not stored.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, raw: &str) -> Option<Course> {
        let removed = self.catalog.remove(raw);
        if removed.is_none() {
            debug!("nothing to remove");
        }
        removed
    }

    /// Walk the catalog in the given order.
    pub fn listing(&self, order: Traversal) -> Iter<'_> {
        self.catalog.iter(order)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// True once any load succeeded in this session.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
