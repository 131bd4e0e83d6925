//! Domain entities: course records and their identifiers

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Case-normalized course number, e.g. `CSCI200`.
///
/// Construction trims surrounding whitespace and uppercases, so `" csci200 "`
/// and `"CSCI200"` name the same course. Ordering is byte-wise lexicographic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CourseId(String);

impl CourseId {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CourseId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CourseId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<&String> for CourseId {
    fn from(raw: &String) -> Self {
        Self::new(raw)
    }
}

impl From<String> for CourseId {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&CourseId> for CourseId {
    fn from(id: &CourseId) -> Self {
        id.clone()
    }
}

/// A single catalog entry.
///
/// Prerequisites may name courses that are not in the catalog; that is a
/// detectable state (see [`crate::domain::dangling_prerequisites`]), not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Unique key
    pub id: CourseId,
    /// Human readable course title
    pub title: String,
    /// Prerequisite course numbers, in the order they were listed
    pub prerequisites: Vec<CourseId>,
}

impl Course {
    pub fn new(id: impl Into<CourseId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            prerequisites: Vec::new(),
        }
    }

    pub fn with_prerequisites<I, P>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<CourseId>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }
}

/// One-line listing form: `ID, Title`.
impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.id, self.title)
    }
}

/// Depth-first visitation order over the catalog.
///
/// The orders differ only in where the node itself is visited relative to
/// its left and right subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Traversal {
    /// Left, node, right: ascending course number
    #[default]
    #[serde(alias = "inorder", alias = "ascending")]
    In,
    /// Node, left, right
    #[serde(alias = "preorder")]
    Pre,
    /// Left, right, node
    #[serde(alias = "postorder")]
    Post,
}

impl FromStr for Traversal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "in" | "inorder" | "ascending" => Ok(Traversal::In),
            "pre" | "preorder" => Ok(Traversal::Pre),
            "post" | "postorder" => Ok(Traversal::Post),
            other => Err(format!("unknown traversal order: {other}")),
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Traversal::In => "in",
            Traversal::Pre => "pre",
            Traversal::Post => "post",
        };
        f.write_str(name)
    }
}

/// A prerequisite reference with no stored course behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingPrerequisite {
    /// Course listing the prerequisite
    pub course: CourseId,
    /// The unresolved prerequisite number
    pub prerequisite: CourseId,
}

impl fmt::Display for DanglingPrerequisite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lists missing prerequisite {}",
            self.course, self.prerequisite
        )
    }
}
