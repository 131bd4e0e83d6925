//! Shape rendering for the catalog tree, used by the `tree` command.

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::catalog::Catalog;

pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeDisplay for Catalog {
    /// Builds a `termtree` view of the search tree.
    ///
    /// Children carry an `L:`/`R:` prefix since a lone child would otherwise
    /// not show which side it hangs from.
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        fn build(catalog: &Catalog, idx: Index, label: String) -> Tree<String> {
            let mut tree = Tree::new(label);
            if let Some(node) = catalog.node(idx) {
                let sides = [("L", node.left), ("R", node.right)];
                for (side, child) in sides {
                    if let Some(child_idx) = child {
                        if let Some(child_node) = catalog.node(child_idx) {
                            let label = format!("{side}: {}", child_node.course);
                            tree.push(build(catalog, child_idx, label));
                        }
                    }
                }
            }
            tree
        }

        match self.root().and_then(|idx| self.node(idx).map(|node| (idx, node))) {
            Some((root_idx, root)) => build(self, root_idx, root.course.to_string()),
            None => Tree::new("Empty catalog".to_string()),
        }
    }
}
