//! Status bar UI rendering
//!
//! Handles the bottom status bar: memory usage and the state of the current
//! page's structure.

use eframe::egui;
use egui::RichText;

use dsvis::Controller;

use crate::app::AppState;
use crate::state::Page;
use crate::utils::{format_memory_mb, format_ms, get_current_memory_mb};

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());

        let page = state.page.current();
        let Some(controller) = state.structures.controller(page) else {
            ui.label(RichText::new(format!("{} | nothing to show", page.label())).strong());
            return;
        };

        let activity = match controller.pending_visuals() {
            _ if !controller.is_animating() => "Idle".to_string(),
            0 | 1 => "Animating".to_string(),
            n => format!("Animating ({} queued)", n - 1),
        };
        ui.label(
            RichText::new(format!(
                "{} | Nodes: {} | {}",
                controller.name(),
                controller.model_nodes().len(),
                activity
            ))
            .strong(),
        );

        if page == Page::Traversal {
            let traversal = state.structures.traversal();
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(format!("Step every {}", format_ms(traversal.config().traversal_delay_ms))).strong());
            if let Some(current) = traversal.current() {
                ui.label(RichText::new("|").strong());
                ui.label(RichText::new(format!("Current node: {current}")).strong());
            }
        }
    });
}
