//! Placeholder page for graphs.

use eframe::egui;
use egui::RichText;

pub fn render_graph_page(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(RichText::new("Graph visualization is not available yet.").heading().weak());
    });
}
