//! Header panel UI rendering
//!
//! Handles the top bar with the page tabs, the settings toggle and the theme
//! selector.

use eframe::egui;

use crate::app::AppState;
use crate::state::Page;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked a page tab
    PageSelected(Page),
}

/// Renders the application header with page tabs and the theme selector
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        let mut selected = state.page.current();
        for page in Page::ALL {
            ui.selectable_value(&mut selected, page, page.label());
        }
        if selected != state.page.current() {
            interaction = Some(HeaderInteraction::PageSelected(selected));
        }

        // Push settings and theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(&current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
            ui.separator();
            ui.toggle_value(state.page.show_settings_mut(), "⚙ Settings");
        });
    });

    interaction
}
