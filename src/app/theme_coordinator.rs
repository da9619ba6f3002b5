//! Theme management and persistence coordination.
//!
//! Handles theme selection, application, and persistent storage across sessions.

use dsvis::ThemeManager;

use crate::app::AppState;

const THEME_KEY: &str = "theme_preference";

/// Themes drawn on top of egui's light visuals; everything else starts dark.
const LIGHT_THEMES: &[&str] = &["Classic"];

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the theme preference, defaulting to [`ThemeManager::DEFAULT_THEME`].
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> String {
        storage
            .and_then(|s| s.get_string(THEME_KEY))
            .unwrap_or_else(|| ThemeManager::DEFAULT_THEME.to_string())
    }

    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme_name: &str) {
        storage.set_string(THEME_KEY, theme_name.to_string());
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame so a selection made in the header shows immediately.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let manager = state.theme.theme_manager();
        let theme = manager.current_theme();
        let mut visuals = if LIGHT_THEMES.contains(&theme.name.as_str()) {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };
        manager.apply_theme(theme, &mut visuals);
        ctx.set_visuals(visuals);
    }
}
