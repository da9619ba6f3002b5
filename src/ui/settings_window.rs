//! Settings window UI rendering
//!
//! Floating window with the animation speed and traversal delay.

use eframe::egui;

use dsvis::VisualizerConfig;

use crate::app::AppState;
use crate::state::SettingsState;

/// Renders the settings window while it is open
///
/// # Arguments
/// * `ctx` - The egui context
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `bool` - True if any setting changed this frame
pub fn render_settings_window(ctx: &egui::Context, state: &mut AppState) -> bool {
    let mut open = state.page.show_settings();
    if !open {
        return false;
    }

    let mut changed = false;
    egui::Window::new("Settings")
        .open(&mut open)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            egui::Grid::new("settings_grid").num_columns(2).show(ui, |ui| {
                ui.label("Animation duration");
                changed |= ui
                    .add(
                        egui::Slider::new(
                            state.settings.speed_mut(),
                            SettingsState::MIN_SPEED..=SettingsState::MAX_SPEED,
                        )
                        .logarithmic(true)
                        .suffix("×"),
                    )
                    .changed();
                ui.end_row();

                ui.label("Traversal delay");
                changed |= ui
                    .add(
                        egui::Slider::new(
                            state.settings.traversal_delay_mut(),
                            VisualizerConfig::MIN_TRAVERSAL_DELAY_MS..=VisualizerConfig::MAX_TRAVERSAL_DELAY_MS,
                        )
                        .logarithmic(true)
                        .suffix(" ms"),
                    )
                    .changed();
                ui.end_row();
            });

            ui.separator();
            if ui.button("Restore defaults").clicked() {
                state.settings.reset();
                changed = true;
            }
            ui.label(egui::RichText::new("Changes apply to the next animation.").weak());
        });

    *state.page.show_settings_mut() = open;
    changed
}
