//! Controllers for every page that shows a structure.
//!
//! Each page owns its controller for the whole session, so switching tabs
//! keeps the lists, the tree and the traversal progress intact.

use dsvis::{Controller, ListController, ListKind, TraversalController, TreeController, VisualizerConfig};

use crate::state::Page;

/// One controller per structure page.
#[derive(Debug)]
pub struct StructureState {
    singly: ListController,
    doubly: ListController,
    tree: TreeController,
    traversal: TraversalController,
}

impl StructureState {
    pub fn new(config: VisualizerConfig) -> Self {
        Self {
            singly: ListController::new(ListKind::Singly, config.clone()),
            doubly: ListController::new(ListKind::Doubly, config.clone()),
            tree: TreeController::new(config.clone()),
            traversal: TraversalController::new(config),
        }
    }

    // ===== Queries =====

    /// Controller behind `page`, or `None` for pages without a structure.
    pub fn controller(&self, page: Page) -> Option<&dyn Controller> {
        match page {
            Page::SinglyList => Some(&self.singly),
            Page::DoublyList => Some(&self.doubly),
            Page::BinaryTree => Some(&self.tree),
            Page::Traversal => Some(&self.traversal),
            Page::Graph => None,
        }
    }

    pub fn list(&self, kind: ListKind) -> &ListController {
        match kind {
            ListKind::Singly => &self.singly,
            ListKind::Doubly => &self.doubly,
        }
    }

    pub fn tree(&self) -> &TreeController {
        &self.tree
    }

    pub fn traversal(&self) -> &TraversalController {
        &self.traversal
    }

    /// True while any page is still animating.
    pub fn any_animating(&self) -> bool {
        self.iter().any(|c| c.is_animating())
    }

    fn iter(&self) -> impl Iterator<Item = &dyn Controller> {
        [
            &self.singly as &dyn Controller,
            &self.doubly,
            &self.tree,
            &self.traversal,
        ]
        .into_iter()
    }

    // ===== Mutations =====

    pub fn controller_mut(&mut self, page: Page) -> Option<&mut dyn Controller> {
        match page {
            Page::SinglyList => Some(&mut self.singly),
            Page::DoublyList => Some(&mut self.doubly),
            Page::BinaryTree => Some(&mut self.tree),
            Page::Traversal => Some(&mut self.traversal),
            Page::Graph => None,
        }
    }

    /// Every controller, for per-frame ticking.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut dyn Controller> {
        [
            &mut self.singly as &mut dyn Controller,
            &mut self.doubly,
            &mut self.tree,
            &mut self.traversal,
        ]
        .into_iter()
    }

    /// Pushes a new config into every controller.
    pub fn set_config(&mut self, config: &VisualizerConfig) {
        self.singly.set_config(config.clone());
        self.doubly.set_config(config.clone());
        self.tree.set_config(config.clone());
        self.traversal.set_config(config.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsvis::Command;

    #[test]
    fn test_graph_page_has_no_controller() {
        let mut state = StructureState::new(VisualizerConfig::default());
        assert!(state.controller(Page::Graph).is_none());
        assert!(state.controller_mut(Page::Graph).is_none());
        assert_eq!(state.controller(Page::DoublyList).map(|c| c.name()), Some("doubly linked list"));
    }

    #[test]
    fn test_pages_are_independent() {
        let mut state = StructureState::new(VisualizerConfig::default());
        if let Some(singly) = state.controller_mut(Page::SinglyList) {
            singly.apply(Command::AddAtEnd, 0).unwrap();
        }
        assert_eq!(state.list(ListKind::Singly).model_nodes().len(), 1);
        assert!(state.list(ListKind::Doubly).model_nodes().is_empty());
        assert!(state.any_animating());
    }
}
