//! Theme and styling state management.
//!
//! This module encapsulates all state related to visual theming,
//! including the theme manager and the currently selected theme.

use dsvis::{ThemeColors, ThemeManager};

/// State related to visual theme and styling.
///
/// The manager is the single source of truth for the selection; unknown names
/// coming from storage fall back to the default theme.
pub struct ThemeState {
    theme_manager: ThemeManager,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name())
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            theme_manager: ThemeManager::new(),
        }
    }

    /// Creates a theme state with `theme_name` selected if it exists.
    ///
    /// # Arguments
    /// * `theme_name` - The name of the theme to use
    pub fn with_theme(theme_name: &str) -> Self {
        let mut state = Self::new();
        state.set_theme(theme_name);
        state
    }

    // ===== Theme Queries =====

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current_theme_name(&self) -> &str {
        &self.theme_manager.current_theme().name
    }

    pub fn colors(&self) -> &ThemeColors {
        &self.theme_manager.current_theme().colors
    }

    // ===== Theme Mutations =====

    /// Selects a theme by name; unknown names are logged and ignored.
    pub fn set_theme(&mut self, theme_name: &str) {
        if let Err(err) = self.theme_manager.set_current_theme(theme_name) {
            tracing::warn!(%err, "keeping current theme");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let state = ThemeState::with_theme("Nonexistent");
        assert_eq!(state.current_theme_name(), ThemeManager::DEFAULT_THEME);
    }

    #[test]
    fn test_set_theme() {
        let mut state = ThemeState::new();
        state.set_theme("Dracula");
        assert_eq!(state.current_theme_name(), "Dracula");
    }
}
