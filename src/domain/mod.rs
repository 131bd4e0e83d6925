//! Domain layer: course records, the ordered catalog, and line parsing
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod catalog;
pub mod entities;
pub mod error;
pub mod parser;
pub mod render;
pub mod validation;

pub use catalog::{Catalog, CatalogNode, Iter};
pub use entities::*;
pub use error::DomainError;
pub use parser::{parse_courses, parse_line, ParsedCourses, DEFAULT_DELIMITER};
pub use render::TreeDisplay;
pub use validation::dangling_prerequisites;
