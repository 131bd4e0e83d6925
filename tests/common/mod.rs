//! Helpers shared by the integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use course_planner::application::services::CatalogService;
use course_planner::config::Settings;
use course_planner::infrastructure::di::ServiceContainer;
use course_planner::infrastructure::traits::FileSystem;

pub const SAMPLE: &str = "tests/resources/courses.csv";
pub const BROKEN: &str = "tests/resources/broken.csv";

/// In-memory filesystem holding a fixed set of files.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: HashMap<PathBuf, String>,
}

impl MemoryFileSystem {
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "file does not exist"))
    }
}

/// Catalog service over an in-memory filesystem.
pub fn memory_service(fs: MemoryFileSystem, settings: Settings) -> CatalogService {
    ServiceContainer::with_deps(settings, Arc::new(fs)).catalog_service()
}

/// Catalog service over the real filesystem with default settings.
pub fn disk_service() -> CatalogService {
    ServiceContainer::new(Settings::default()).catalog_service()
}
