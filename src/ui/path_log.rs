//! Read-only traversal path log.

use eframe::egui;
use egui::{RichText, ScrollArea};

use dsvis::TraversalController;

/// Renders one line per visited node, newest at the bottom
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `traversal` - Controller whose log is shown
pub fn render_path_log(ui: &mut egui::Ui, traversal: &TraversalController) {
    let title = match traversal.kind() {
        Some(kind) => format!("Path log: {kind}"),
        None => "Path log".to_string(),
    };
    ui.heading(title);
    ui.separator();

    if traversal.log().is_empty() {
        ui.label(RichText::new("Pick a traversal to start").weak());
        return;
    }

    ScrollArea::vertical()
        .id_salt("path_log")
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for (step, line) in traversal.log().iter().enumerate() {
                ui.label(RichText::new(format!("{:>2}. {line}", step + 1)).monospace());
            }
        });
}
