//! Page selection and control-bar input state.
//!
//! This module encapsulates the state of the header tabs and the text field
//! that supplies target ids to the list pages.

use serde::{Deserialize, Serialize};

/// One tab of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    SinglyList,
    DoublyList,
    BinaryTree,
    Traversal,
    Graph,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::SinglyList,
        Page::DoublyList,
        Page::BinaryTree,
        Page::Traversal,
        Page::Graph,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Page::SinglyList => "Singly Linked List",
            Page::DoublyList => "Doubly Linked List",
            Page::BinaryTree => "Binary Tree",
            Page::Traversal => "Tree Traversal",
            Page::Graph => "Graph",
        }
    }

    /// Whether the page has add-after/remove controls fed by the target field.
    pub fn takes_target(self) -> bool {
        matches!(self, Page::SinglyList | Page::DoublyList)
    }
}

/// State of the page tabs and per-page inputs.
///
/// Responsibilities:
/// - Tracking the selected page
/// - Holding the target id text buffer
/// - Remembering which auxiliary windows are open
#[derive(Debug, Clone, Default)]
pub struct PageState {
    /// Currently shown page
    current: Page,
    /// Raw contents of the target id field
    target_text: String,
    /// Whether the settings window is open
    show_settings: bool,
    /// Whether the traversal overview thumbnail is shown
    show_overview: bool,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            show_overview: true,
            ..Self::default()
        }
    }

    /// Creates a page state starting on `page`.
    pub fn with_page(page: Page) -> Self {
        Self {
            current: page,
            ..Self::new()
        }
    }

    // ===== Queries =====

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn target_text(&self) -> &str {
        &self.target_text
    }

    pub fn show_settings(&self) -> bool {
        self.show_settings
    }

    pub fn show_overview(&self) -> bool {
        self.show_overview
    }

    // ===== Mutations =====

    /// Switches page. The target field is cleared so ids from one list are
    /// not accidentally sent to another.
    pub fn select(&mut self, page: Page) {
        if self.current != page {
            self.current = page;
            self.target_text.clear();
        }
    }

    pub(crate) fn target_text_mut(&mut self) -> &mut String {
        &mut self.target_text
    }

    pub(crate) fn show_settings_mut(&mut self) -> &mut bool {
        &mut self.show_settings
    }

    pub(crate) fn show_overview_mut(&mut self) -> &mut bool {
        &mut self.show_overview
    }
}
