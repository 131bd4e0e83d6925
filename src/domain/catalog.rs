//! Ordered course catalog: an unbalanced binary search tree keyed by course number.
//!
//! Nodes live in a generational arena and refer to their children by index.
//! Every parent exclusively owns its two child links and the catalog owns the
//! root link, so there are no back references and no shared ownership.
//! Dropping the catalog drops the arena, which releases every node without
//! recursion.

use std::cmp::Ordering;
use std::mem;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument, trace};

use crate::domain::entities::{Course, CourseId, Traversal};

/// Tree node in the arena-based catalog.
#[derive(Debug)]
pub struct CatalogNode {
    /// Record stored at this node
    pub course: Course,
    /// Subtree holding course numbers less than this node's
    pub left: Option<Index>,
    /// Subtree holding course numbers greater than this node's
    pub right: Option<Index>,
}

/// The slot a node hangs from: the catalog root or one side of a parent.
#[derive(Debug, Clone, Copy)]
enum Link {
    Root,
    Left(Index),
    Right(Index),
}

/// Binary search tree of courses keyed by [`crate::domain::CourseId`].
///
/// Invariant: for every node, all course numbers in its left subtree compare
/// less than its own and all in its right subtree compare greater. Every index
/// reachable from `root` is live in `arena`.
///
/// No rebalancing is performed; depth is O(n) in the worst case.
#[derive(Debug)]
pub struct Catalog {
    arena: Arena<CatalogNode>,
    root: Option<Index>,
    len: usize,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Inserts `course`, keyed by its course number.
    ///
    /// A new course number becomes a new leaf. An existing one has its record
    /// overwritten in place and the previous record is returned.
    #[instrument(level = "trace", skip(self, course), fields(id = %course.id))]
    pub fn insert(&mut self, course: Course) -> Option<Course> {
        let mut link = Link::Root;
        let mut current = self.root;

        while let Some(idx) = current {
            let node = &mut self.arena[idx];
            match course.id.cmp(&node.course.id) {
                Ordering::Less => {
                    link = Link::Left(idx);
                    current = node.left;
                }
                Ordering::Greater => {
                    link = Link::Right(idx);
                    current = node.right;
                }
                Ordering::Equal => {
                    trace!("overwriting existing record");
                    return Some(mem::replace(&mut node.course, course));
                }
            }
        }

        let idx = self.arena.insert(CatalogNode {
            course,
            left: None,
            right: None,
        });
        self.set_link(link, Some(idx));
        self.len += 1;
        None
    }

    /// Looks up a course by course number in O(depth).
    ///
    /// The number goes through [`CourseId`] normalization, so `"csci100"`
    /// finds `CSCI100`. Absence is an ordinary outcome, e.g. for
    /// prerequisites that name courses outside the catalog.
    pub fn search(&self, id: impl Into<CourseId>) -> Option<&Course> {
        let id = id.into();
        trace!(%id, "search");
        self.locate(&id).map(|(_, idx)| &self.arena[idx].course)
    }

    pub fn contains(&self, id: impl Into<CourseId>) -> bool {
        self.locate(&id.into()).is_some()
    }

    /// Removes the course with the given number and returns its record.
    ///
    /// Missing course numbers are a no-op. A node with two children keeps its
    /// place in the tree and takes over the record of its in-order successor,
    /// whose own node (never having a left child) is spliced out instead.
    pub fn remove(&mut self, id: impl Into<CourseId>) -> Option<Course> {
        let id = id.into();
        trace!(%id, "remove");
        let (link, idx) = self.locate(&id)?;
        let (left, right) = {
            let node = &self.arena[idx];
            (node.left, node.right)
        };

        let removed = match (left, right) {
            (Some(_), Some(right)) => {
                let (successor_link, successor) = self.leftmost(Link::Right(idx), right);
                let successor = self.splice_out(successor_link, successor)?;
                debug!(successor = %successor.id, "relocating in-order successor");
                mem::replace(&mut self.arena[idx].course, successor)
            }
            _ => self.splice_out(link, idx)?,
        };

        self.len -= 1;
        Some(removed)
    }

    /// Number of stored courses.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every stored course.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Number of nodes on the longest root-to-leaf path, 0 for an empty catalog.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(Index, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();

        while let Some((idx, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            let node = &self.arena[idx];
            stack.extend(node.left.into_iter().chain(node.right).map(|child| (child, depth + 1)));
        }

        max_depth
    }

    /// Lazy depth-first walk in the given order.
    ///
    /// Every call starts a fresh walk; the catalog cannot be mutated while one
    /// is alive.
    pub fn iter(&self, order: Traversal) -> Iter<'_> {
        Iter::new(self, order)
    }

    /// Ascending course number order.
    pub fn iter_in_order(&self) -> Iter<'_> {
        self.iter(Traversal::In)
    }

    pub fn iter_pre_order(&self) -> Iter<'_> {
        self.iter(Traversal::Pre)
    }

    pub fn iter_post_order(&self) -> Iter<'_> {
        self.iter(Traversal::Post)
    }

    /// Snapshot of all courses in ascending course number order.
    pub fn collect(&self) -> Vec<Course> {
        self.iter_in_order().cloned().collect()
    }

    pub(crate) fn root(&self) -> Option<Index> {
        self.root
    }

    pub(crate) fn node(&self, idx: Index) -> Option<&CatalogNode> {
        self.arena.get(idx)
    }

    fn locate(&self, id: &CourseId) -> Option<(Link, Index)> {
        let mut link = Link::Root;
        let mut current = self.root;

        while let Some(idx) = current {
            let node = &self.arena[idx];
            match id.cmp(&node.course.id) {
                Ordering::Less => {
                    link = Link::Left(idx);
                    current = node.left;
                }
                Ordering::Greater => {
                    link = Link::Right(idx);
                    current = node.right;
                }
                Ordering::Equal => return Some((link, idx)),
            }
        }

        None
    }

    /// Follows left links from `idx` down to the smallest node of that subtree.
    fn leftmost(&self, mut link: Link, mut idx: Index) -> (Link, Index) {
        while let Some(left) = self.arena[idx].left {
            link = Link::Left(idx);
            idx = left;
        }
        (link, idx)
    }

    /// Detaches a node with at most one child, handing its slot to that child.
    fn splice_out(&mut self, link: Link, idx: Index) -> Option<Course> {
        let node = self.arena.remove(idx)?;
        debug_assert!(node.left.is_none() || node.right.is_none());
        self.set_link(link, node.left.or(node.right));
        Some(node.course)
    }

    fn set_link(&mut self, link: Link, child: Option<Index>) {
        match link {
            Link::Root => self.root = child,
            Link::Left(parent) => self.arena[parent].left = child,
            Link::Right(parent) => self.arena[parent].right = child,
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Course;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_in_order()
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Descend(Index),
    Visit(Index),
}

/// Depth-first iterator over catalog records.
///
/// One explicit stack serves all three orders; only the position of the
/// visit step relative to the two descents changes.
pub struct Iter<'a> {
    catalog: &'a Catalog,
    order: Traversal,
    stack: Vec<Step>,
}

impl<'a> Iter<'a> {
    fn new(catalog: &'a Catalog, order: Traversal) -> Self {
        Self {
            catalog,
            order,
            stack: catalog.root.map(Step::Descend).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        let catalog = self.catalog;
        while let Some(step) = self.stack.pop() {
            match step {
                Step::Visit(idx) => return Some(&catalog.arena[idx].course),
                Step::Descend(idx) => {
                    let node = &catalog.arena[idx];
                    let left = node.left.map(Step::Descend);
                    let right = node.right.map(Step::Descend);
                    let visit = Some(Step::Visit(idx));
                    // Pushed in reverse: the last frame runs first.
                    let frames = match self.order {
                        Traversal::Pre => [right, left, visit],
                        Traversal::In => [right, visit, left],
                        Traversal::Post => [visit, right, left],
                    };
                    self.stack.extend(frames.into_iter().flatten());
                }
            }
        }
        None
    }
}
