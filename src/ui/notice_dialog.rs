//! Modal dialog for notices raised by operations.
//!
//! Only one notice is shown at a time; it blocks the rest of the UI until the
//! user acknowledges it.

use eframe::egui;
use egui::RichText;

use dsvis::{Notice, Severity, ThemeColors};

use crate::presentation::color_mapping::severity_color;

/// Renders `notice` in a modal and reports whether it was dismissed
///
/// # Arguments
/// * `ctx` - The egui context
/// * `notice` - The notice to show
/// * `colors` - The current theme's palette
///
/// # Returns
/// * `bool` - True once the user clicked OK, pressed Escape or clicked outside
pub fn render_notice_dialog(ctx: &egui::Context, notice: &Notice, colors: &ThemeColors) -> bool {
    let mut dismissed = false;
    let icon = match notice.severity {
        Severity::Info => "ℹ",
        Severity::Warning => "⚠",
    };

    let modal = egui::Modal::new(egui::Id::new("notice_dialog")).show(ctx, |ui| {
        ui.set_min_width(260.0);
        ui.heading(
            RichText::new(format!("{icon} {}", notice.title)).color(severity_color(notice.severity, colors)),
        );
        ui.add_space(6.0);
        ui.label(&notice.message);
        ui.add_space(10.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    });

    dismissed || modal.should_close()
}
