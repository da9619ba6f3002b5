//! Complete binary tree stored in an array.
//!
//! The node at index `i` has children at `2i+1` and `2i+2`. Nodes are only
//! ever appended or removed from the end, so the tree never has gaps.

use crate::error::{OpError, Result};
use crate::node::{IdAllocator, Node, NodeId, NodeStore};
use crate::traits::Structure;

const NAME: &str = "binary tree";

#[derive(Debug, Clone, Default)]
pub struct ArrayTree {
    store: NodeStore,
    ids: IdAllocator,
}

impl ArrayTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node at the next free index.
    pub fn append_at_end(&mut self, value: impl Into<String>) -> NodeId {
        let id = self.ids.allocate();
        let value = value.into();
        let value = if value.is_empty() { id.to_string() } else { value };
        self.store.push(Node { id, value });
        id
    }

    /// Removes the node with the highest index.
    pub fn remove_last(&mut self) -> Result<Node> {
        self.store.pop().ok_or(OpError::Empty { structure: NAME })
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.store.position(id)
    }

    /// Indices of the in-bounds children of `index`.
    pub fn child_indices(&self, index: usize) -> impl Iterator<Item = usize> {
        let len = self.store.len();
        [2 * index + 1, 2 * index + 2].into_iter().filter(move |&c| c < len)
    }
}

/// Parent index of `index`, or `None` for the root.
pub fn parent_index(index: usize) -> Option<usize> {
    index.checked_sub(1).map(|i| i / 2)
}

impl Structure for ArrayTree {
    fn display_name(&self) -> &'static str {
        NAME
    }

    fn nodes(&self) -> &[Node] {
        self.store.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_remove_last() {
        let mut tree = ArrayTree::new();
        for _ in 0..5 {
            tree.append_at_end("");
        }
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.remove_last().unwrap().id, NodeId(5));
        assert_eq!(tree.position(NodeId(4)), Some(3));
    }

    #[test]
    fn test_remove_last_on_empty() {
        let mut tree = ArrayTree::new();
        assert_eq!(tree.remove_last(), Err(OpError::Empty { structure: "binary tree" }));
    }

    #[test]
    fn test_child_indices_respect_bounds() {
        let mut tree = ArrayTree::new();
        for _ in 0..4 {
            tree.append_at_end("");
        }
        assert_eq!(tree.child_indices(0).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(tree.child_indices(1).collect::<Vec<_>>(), vec![3]);
        assert_eq!(tree.child_indices(2).count(), 0);
    }

    #[test]
    fn test_parent_index() {
        assert_eq!(parent_index(0), None);
        assert_eq!(parent_index(1), Some(0));
        assert_eq!(parent_index(2), Some(0));
        assert_eq!(parent_index(6), Some(2));
    }
}
