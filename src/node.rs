//! Node identity and the owning node store shared by lists and the array tree.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Stable node identity. Assigned at creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single element of a list or tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub value: String,
}

/// Hands out monotonically increasing ids starting at 1.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns a fresh id.
    pub fn allocate(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to [`allocate`](Self::allocate) will return.
    pub fn peek(&self) -> NodeId {
        NodeId(self.next)
    }
}

/// Dense, ordered node storage with an id → index map.
///
/// Order in `nodes` is the only source of truth for adjacency. The index map
/// is rebuilt from the mutated position onwards after every structural change.
#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn as_slice(&self) -> &[Node] {
        &self.nodes
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Position of the node with the given id.
    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn push(&mut self, node: Node) {
        self.index.insert(node.id, self.nodes.len());
        self.nodes.push(node);
    }

    pub fn pop(&mut self) -> Option<Node> {
        let node = self.nodes.pop()?;
        self.index.remove(&node.id);
        Some(node)
    }

    /// Inserts `node` at `at`, shifting later nodes right.
    pub fn insert(&mut self, at: usize, node: Node) {
        self.nodes.insert(at, node);
        self.reindex_from(at);
    }

    /// Removes and returns the node at `at`.
    pub fn remove(&mut self, at: usize) -> Node {
        let node = self.nodes.remove(at);
        self.index.remove(&node.id);
        self.reindex_from(at);
        node
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|n| n.id)
    }

    fn reindex_from(&mut self, start: usize) {
        for (offset, node) in self.nodes[start..].iter().enumerate() {
            self.index.insert(node.id, start + offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: u64) -> Node {
        Node { id: NodeId(id), value: id.to_string() }
    }

    #[test]
    fn test_allocator_is_monotonic() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.peek(), NodeId(1));
        assert_eq!(ids.allocate(), NodeId(1));
        assert_eq!(ids.allocate(), NodeId(2));
        assert_eq!(ids.peek(), NodeId(3));
    }

    #[test]
    fn test_index_follows_insert_and_remove() {
        let mut store = NodeStore::new();
        store.push(node(1));
        store.push(node(2));
        store.push(node(3));

        store.insert(1, node(9));
        assert_eq!(store.ids().collect::<Vec<_>>(), vec![NodeId(1), NodeId(9), NodeId(2), NodeId(3)]);
        assert_eq!(store.position(NodeId(3)), Some(3));

        let removed = store.remove(0);
        assert_eq!(removed.id, NodeId(1));
        assert_eq!(store.position(NodeId(1)), None);
        assert_eq!(store.position(NodeId(9)), Some(0));
        assert_eq!(store.position(NodeId(3)), Some(2));
    }

    #[test]
    fn test_pop_and_clear() {
        let mut store = NodeStore::new();
        store.push(node(4));
        store.push(node(5));
        assert_eq!(store.pop().map(|n| n.id), Some(NodeId(5)));
        assert!(!store.contains(NodeId(5)));
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.pop(), None);
    }
}
