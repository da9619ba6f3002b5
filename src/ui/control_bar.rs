//! Control bar UI rendering
//!
//! The row of buttons above the canvas. Which buttons appear depends on the
//! page; list pages also get the target id field.

use eframe::egui;

use dsvis::{Command, TraversalKind};

use crate::app::{AppState, TargetedCommand};
use crate::state::Page;

/// Result of user interaction with the control bar
pub enum ControlInteraction {
    /// A command that needs no target
    Command(Command),
    /// A command whose target comes from the text field
    Targeted(TargetedCommand),
}

/// Renders the controls for the current page
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state (for the target field)
///
/// # Returns
/// * `Option<ControlInteraction>` - The button that was clicked, if any
pub fn render_control_bar(ui: &mut egui::Ui, state: &mut AppState) -> Option<ControlInteraction> {
    let mut interaction = None;
    let page = state.page.current();

    ui.horizontal_wrapped(|ui| match page {
        Page::SinglyList | Page::DoublyList => {
            if ui.button("➕ Add at end").clicked() {
                interaction = Some(ControlInteraction::Command(Command::AddAtEnd));
            }
            if ui.button("➖ Remove at end").clicked() {
                interaction = Some(ControlInteraction::Command(Command::RemoveAtEnd));
            }

            ui.separator();
            ui.label("Target id:");
            let response = egui::TextEdit::singleline(state.page.target_text_mut())
                .desired_width(60.0)
                .hint_text("e.g. 3")
                .show(ui)
                .response;
            if ui.button("Insert after").clicked() {
                interaction = Some(ControlInteraction::Targeted(TargetedCommand::AddAfter));
            }
            if ui.button("Delete").clicked() {
                interaction = Some(ControlInteraction::Targeted(TargetedCommand::Remove));
            }
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                interaction = Some(ControlInteraction::Targeted(TargetedCommand::AddAfter));
            }

            ui.separator();
            if ui.button("🗑 Clear").clicked() {
                interaction = Some(ControlInteraction::Command(Command::Clear));
            }
        }
        Page::BinaryTree => {
            if ui.button("➕ Add node").clicked() {
                interaction = Some(ControlInteraction::Command(Command::AddAtEnd));
            }
            if ui.button("➖ Remove last").clicked() {
                interaction = Some(ControlInteraction::Command(Command::RemoveAtEnd));
            }
            ui.separator();
            if ui.button("🗑 Clear").clicked() {
                interaction = Some(ControlInteraction::Command(Command::Clear));
            }
        }
        Page::Traversal => {
            for kind in TraversalKind::ALL {
                if ui.button(kind.label()).clicked() {
                    interaction = Some(ControlInteraction::Command(Command::Traverse(kind)));
                }
            }
            ui.separator();
            if ui.button("↺ Reset").clicked() {
                interaction = Some(ControlInteraction::Command(Command::Clear));
            }
            ui.checkbox(state.page.show_overview_mut(), "Overview");
        }
        Page::Graph => {
            ui.label("No controls yet");
        }
    });

    interaction
}
