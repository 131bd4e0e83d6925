//! Referential checks across the catalog.

use tracing::{debug, instrument};

use crate::domain::catalog::Catalog;
use crate::domain::entities::DanglingPrerequisite;

/// Every prerequisite reference that does not resolve to a stored course.
///
/// Courses are checked in ascending order, prerequisites in listed order.
#[instrument(level = "debug", skip(catalog))]
pub fn dangling_prerequisites(catalog: &Catalog) -> Vec<DanglingPrerequisite> {
    let mut dangling = Vec::new();

    for course in catalog.collect() {
        for prerequisite in &course.prerequisites {
            if catalog.search(prerequisite).is_none() {
                dangling.push(DanglingPrerequisite {
                    course: course.id.clone(),
                    prerequisite: prerequisite.clone(),
                });
            }
        }
    }

    debug!("found {} dangling prerequisite(s)", dangling.len());
    dangling
}
