//! Centralized application state for the visualizer.
//!
//! The state is composed of focused components that each manage one aspect of
//! the application, so UI code can borrow them independently.

use dsvis::Notice;

use crate::state::{Page, PageState, SettingsState, StructureState, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Selected page and control-bar inputs
    pub page: PageState,

    /// One controller per structure page
    pub structures: StructureState,

    /// Animation settings
    pub settings: SettingsState,

    /// Theme and styling state
    pub theme: ThemeState,

    // ===== Top-Level State =====
    /// Notice waiting to be acknowledged in the modal dialog
    pub notice: Option<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::restore(SettingsState::new(), ThemeState::new(), Page::default())
    }

    /// Creates the state from values loaded from storage.
    pub fn restore(settings: SettingsState, theme: ThemeState, page: Page) -> Self {
        Self {
            page: PageState::with_page(page),
            structures: StructureState::new(settings.effective_config()),
            settings,
            theme,
            notice: None,
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Shows `notice`, replacing any notice not yet dismissed.
    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
