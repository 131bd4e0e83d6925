//! Course planner: an ordered in-memory course catalog.
//!
//! The catalog is an unbalanced binary search tree keyed by course number
//! ([`domain::Catalog`]). Around it sit a line-oriented loader, a
//! prerequisite validator and a numbered terminal menu.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
