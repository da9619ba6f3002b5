//! Traversal engine over the fixed 15-node demo tree.
//!
//! Ids run 1..=15 and node `k` has children `2k` and `2k + 1`, so the shape
//! never changes. Only the per-node marks move between runs.

use crate::node::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Number of nodes in the demo tree.
pub const DEMO_NODE_COUNT: usize = 15;

/// Traversal orders the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraversalKind {
    Preorder,
    Inorder,
    Postorder,
    Levelorder,
}

impl TraversalKind {
    pub const ALL: [TraversalKind; 4] = [
        TraversalKind::Preorder,
        TraversalKind::Inorder,
        TraversalKind::Postorder,
        TraversalKind::Levelorder,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TraversalKind::Preorder => "Preorder",
            TraversalKind::Inorder => "Inorder",
            TraversalKind::Postorder => "Postorder",
            TraversalKind::Levelorder => "Level order",
        }
    }
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Highlight state of a demo node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Normal,
    Current,
    Visited,
}

#[derive(Debug, Clone)]
struct TreeNode {
    id: NodeId,
    parent: Option<usize>,
    left: Option<usize>,
    right: Option<usize>,
}

/// The fixed demo tree together with its last visit order and marks.
#[derive(Debug, Clone)]
pub struct TraversalTree {
    nodes: Vec<TreeNode>,
    marks: Vec<Mark>,
    visit_order: Vec<NodeId>,
}

impl Default for TraversalTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TraversalTree {
    /// Builds the 15-node complete tree. Slot `i` holds id `i + 1`.
    pub fn new() -> Self {
        let nodes = (0..DEMO_NODE_COUNT)
            .map(|slot| {
                let child = |c: usize| (c < DEMO_NODE_COUNT).then_some(c);
                TreeNode {
                    id: NodeId(slot as u64 + 1),
                    parent: slot.checked_sub(1).map(|s| s / 2),
                    left: child(2 * slot + 1),
                    right: child(2 * slot + 2),
                }
            })
            .collect();

        Self {
            nodes,
            marks: vec![Mark::Normal; DEMO_NODE_COUNT],
            visit_order: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.nodes[0].id
    }

    /// All ids in slot order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|n| n.id)
    }

    /// Array slot of `id`, which doubles as its layout index.
    pub fn slot_of(&self, id: NodeId) -> Option<usize> {
        let slot = usize::try_from(id.0).ok()?.checked_sub(1)?;
        (slot < self.nodes.len()).then_some(slot)
    }

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        let slot = self.slot_of(id)?;
        self.nodes[slot].parent.map(|p| self.nodes[p].id)
    }

    pub fn mark(&self, id: NodeId) -> Mark {
        self.slot_of(id).map(|s| self.marks[s]).unwrap_or_default()
    }

    pub fn set_mark(&mut self, id: NodeId, mark: Mark) {
        if let Some(slot) = self.slot_of(id) {
            self.marks[slot] = mark;
        }
    }

    /// Clears all marks and the previous visit order.
    pub fn reset_marks(&mut self) {
        self.marks.fill(Mark::Normal);
        self.visit_order.clear();
    }

    pub fn visit_order(&self) -> &[NodeId] {
        &self.visit_order
    }

    pub fn preorder(&mut self) -> &[NodeId] {
        self.run(TraversalKind::Preorder)
    }

    pub fn inorder(&mut self) -> &[NodeId] {
        self.run(TraversalKind::Inorder)
    }

    pub fn postorder(&mut self) -> &[NodeId] {
        self.run(TraversalKind::Postorder)
    }

    pub fn levelorder(&mut self) -> &[NodeId] {
        self.run(TraversalKind::Levelorder)
    }

    /// Replaces the visit order with a fresh traversal of the given kind.
    pub fn run(&mut self, kind: TraversalKind) -> &[NodeId] {
        self.reset_marks();
        let mut order = Vec::with_capacity(self.nodes.len());
        match kind {
            TraversalKind::Levelorder => self.bfs(&mut order),
            dfs => self.dfs(Some(0), dfs, &mut order),
        }
        self.visit_order = order;
        &self.visit_order
    }

    fn dfs(&self, slot: Option<usize>, kind: TraversalKind, out: &mut Vec<NodeId>) {
        let Some(slot) = slot else { return };
        let node = &self.nodes[slot];
        if kind == TraversalKind::Preorder {
            out.push(node.id);
        }
        self.dfs(node.left, kind, out);
        if kind == TraversalKind::Inorder {
            out.push(node.id);
        }
        self.dfs(node.right, kind, out);
        if kind == TraversalKind::Postorder {
            out.push(node.id);
        }
    }

    fn bfs(&self, out: &mut Vec<NodeId>) {
        let mut queue = VecDeque::from([0usize]);
        while let Some(slot) = queue.pop_front() {
            let node = &self.nodes[slot];
            out.push(node.id);
            queue.extend(node.left);
            queue.extend(node.right);
        }
    }

    /// Root-to-node path of ids.
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut cursor = self.slot_of(id);
        while let Some(slot) = cursor {
            path.push(self.nodes[slot].id);
            cursor = self.nodes[slot].parent;
        }
        path.reverse();
        path
    }
}

/// Formats a path as `"1 -> 2 -> 4"`.
pub fn format_path(path: &[NodeId]) -> String {
    path.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId).collect()
    }

    #[test]
    fn test_preorder() {
        let mut tree = TraversalTree::new();
        assert_eq!(tree.preorder(), ids(&[1, 2, 4, 8, 9, 5, 10, 11, 3, 6, 12, 13, 7, 14, 15]).as_slice());
    }

    #[test]
    fn test_inorder() {
        let mut tree = TraversalTree::new();
        assert_eq!(tree.inorder(), ids(&[8, 4, 9, 2, 10, 5, 11, 1, 12, 6, 13, 3, 14, 7, 15]).as_slice());
    }

    #[test]
    fn test_postorder() {
        let mut tree = TraversalTree::new();
        assert_eq!(tree.postorder(), ids(&[8, 9, 4, 10, 11, 5, 2, 12, 13, 6, 14, 15, 7, 3, 1]).as_slice());
    }

    #[test]
    fn test_levelorder() {
        let mut tree = TraversalTree::new();
        let expected: Vec<NodeId> = (1..=15).map(NodeId).collect();
        assert_eq!(tree.levelorder(), expected.as_slice());
    }

    #[test]
    fn test_run_replaces_previous_order_and_marks() {
        let mut tree = TraversalTree::new();
        tree.preorder();
        tree.set_mark(NodeId(4), Mark::Visited);
        tree.inorder();
        assert_eq!(tree.mark(NodeId(4)), Mark::Normal);
        assert_eq!(tree.visit_order().first(), Some(&NodeId(8)));
        assert_eq!(tree.visit_order().len(), DEMO_NODE_COUNT);
    }

    #[test]
    fn test_path_to() {
        let tree = TraversalTree::new();
        assert_eq!(format_path(&tree.path_to(NodeId(13))), "1 -> 3 -> 6 -> 13");
        assert_eq!(format_path(&tree.path_to(NodeId(1))), "1");
        assert!(tree.path_to(NodeId(99)).is_empty());
        assert_eq!(tree.parent_of(NodeId(9)), Some(NodeId(4)));
        assert_eq!(tree.parent_of(tree.root()), None);
    }
}
