//! Linked-sequence model backing both the singly and the doubly linked list.
//!
//! Links are never stored: the successor of a node is whatever follows it in
//! the store, and for doubly linked lists the predecessor is whatever precedes
//! it.

use crate::error::{OpError, Result};
use crate::node::{IdAllocator, Node, NodeId, NodeStore};
use crate::traits::Structure;
use serde::{Deserialize, Serialize};

/// Which link directions the list exposes and draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    Singly,
    Doubly,
}

impl ListKind {
    pub fn display_name(self) -> &'static str {
        match self {
            ListKind::Singly => "singly linked list",
            ListKind::Doubly => "doubly linked list",
        }
    }
}

/// Ordered sequence of nodes; insertion order is list order.
#[derive(Debug, Clone)]
pub struct LinkedSequence {
    kind: ListKind,
    store: NodeStore,
    ids: IdAllocator,
}

impl LinkedSequence {
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            store: NodeStore::new(),
            ids: IdAllocator::new(),
        }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Appends a node at the tail. An empty value displays the id instead.
    pub fn append_at_end(&mut self, value: impl Into<String>) -> NodeId {
        let node = self.make_node(value.into());
        let id = node.id;
        self.store.push(node);
        id
    }

    /// Removes the tail node.
    pub fn remove_at_end(&mut self) -> Result<Node> {
        self.store.pop().ok_or(self.empty_error())
    }

    /// Inserts a new node directly after `target`, returning the new id.
    pub fn insert_after(&mut self, target: NodeId, value: impl Into<String>) -> Result<NodeId> {
        let at = self.store.position(target).ok_or(OpError::TargetNotFound(target))?;
        let node = self.make_node(value.into());
        let id = node.id;
        self.store.insert(at + 1, node);
        Ok(id)
    }

    /// Removes the node with the given id, returning it with its former index.
    pub fn remove_by_id(&mut self, target: NodeId) -> Result<(usize, Node)> {
        if self.store.is_empty() {
            return Err(self.empty_error());
        }
        let at = self.store.position(target).ok_or(OpError::TargetNotFound(target))?;
        Ok((at, self.store.remove(at)))
    }

    /// Drops every node. Ids keep counting up.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.store.position(id)
    }

    pub fn successor(&self, id: NodeId) -> Option<&Node> {
        let at = self.store.position(id)?;
        self.store.get(at + 1)
    }

    /// Previous node; only meaningful for doubly linked lists.
    pub fn predecessor(&self, id: NodeId) -> Option<&Node> {
        if self.kind == ListKind::Singly {
            return None;
        }
        let at = self.store.position(id)?;
        at.checked_sub(1).and_then(|prev| self.store.get(prev))
    }

    pub fn ids(&self) -> Vec<NodeId> {
        self.store.ids().collect()
    }

    fn make_node(&mut self, value: String) -> Node {
        let id = self.ids.allocate();
        let value = if value.is_empty() { id.to_string() } else { value };
        Node { id, value }
    }

    fn empty_error(&self) -> OpError {
        OpError::Empty { structure: self.kind.display_name() }
    }
}

impl Structure for LinkedSequence {
    fn display_name(&self) -> &'static str {
        self.kind.display_name()
    }

    fn nodes(&self) -> &[Node] {
        self.store.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(n: usize) -> LinkedSequence {
        let mut list = LinkedSequence::new(ListKind::Singly);
        for _ in 0..n {
            list.append_at_end("");
        }
        list
    }

    #[test]
    fn test_append_keeps_call_order() {
        let list = list_of(4);
        assert_eq!(list.ids(), vec![NodeId(1), NodeId(2), NodeId(3), NodeId(4)]);
        assert_eq!(list.nodes()[2].value, "3");
    }

    #[test]
    fn test_remove_at_end_is_lifo() {
        let mut list = list_of(3);
        let removed: Vec<NodeId> = (0..3).map(|_| list.remove_at_end().unwrap().id).collect();
        assert_eq!(removed, vec![NodeId(3), NodeId(2), NodeId(1)]);
        assert!(list.is_empty());
        assert_eq!(
            list.remove_at_end(),
            Err(OpError::Empty { structure: "singly linked list" })
        );
    }

    #[test]
    fn test_insert_after_becomes_successor() {
        let mut list = list_of(3);
        let id = list.insert_after(NodeId(2), "x").unwrap();
        assert_eq!(id, NodeId(4));
        let succ = list.successor(NodeId(2)).unwrap();
        assert_eq!(succ.value, "x");
        assert_eq!(list.successor(id).map(|n| n.id), Some(NodeId(3)));
    }

    #[test]
    fn test_insert_after_missing_target_leaves_model() {
        let mut list = list_of(2);
        assert_eq!(list.insert_after(NodeId(42), "x"), Err(OpError::TargetNotFound(NodeId(42))));
        assert_eq!(list.ids(), vec![NodeId(1), NodeId(2)]);
        // the failed insert must not burn an id either
        assert_eq!(list.append_at_end(""), NodeId(3));
    }

    #[test]
    fn test_remove_by_id() {
        let mut list = list_of(3);
        let (at, node) = list.remove_by_id(NodeId(2)).unwrap();
        assert_eq!((at, node.id), (1, NodeId(2)));
        assert_eq!(list.ids(), vec![NodeId(1), NodeId(3)]);
        assert_eq!(list.remove_by_id(NodeId(2)), Err(OpError::TargetNotFound(NodeId(2))));

        let mut empty = LinkedSequence::new(ListKind::Doubly);
        assert_eq!(
            empty.remove_by_id(NodeId(1)),
            Err(OpError::Empty { structure: "doubly linked list" })
        );
    }

    #[test]
    fn test_clear_is_idempotent_and_ids_are_not_reused() {
        let mut list = list_of(2);
        list.clear();
        assert!(list.is_empty());
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.append_at_end(""), NodeId(3));
    }

    #[test]
    fn test_predecessor_only_for_doubly() {
        let mut doubly = LinkedSequence::new(ListKind::Doubly);
        doubly.append_at_end("a");
        doubly.append_at_end("b");
        assert_eq!(doubly.predecessor(NodeId(2)).map(|n| n.id), Some(NodeId(1)));
        assert!(doubly.predecessor(NodeId(1)).is_none());

        let singly = list_of(2);
        assert!(singly.predecessor(NodeId(2)).is_none());
    }
}
