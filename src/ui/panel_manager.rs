//! Panel orchestration and layout management.
//!
//! Lays out the header, status bar, control bar, path log and canvas, and
//! funnels their interactions into a single [`PanelInteraction`].

use dsvis::Command;

use crate::app::{AppState, TargetedCommand};
use crate::state::Page;
use crate::ui::{canvas_panel, control_bar, graph_page, header, notice_dialog, path_log, settings_window, status_bar};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User picked another page
    PageSelected(Page),
    /// User clicked a button that maps to a command
    CommandRequested(Command),
    /// User clicked a button whose target comes from the text field
    TargetedCommandRequested(TargetedCommand),
    /// Animation settings were edited
    SettingsChanged,
    /// The notice dialog was acknowledged
    NoticeDismissed,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header::HeaderInteraction::PageSelected(page)) = header::render_header(ui, state) {
                interaction = Some(PanelInteraction::PageSelected(page));
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let page = state.page.current();
        if page != Page::Graph {
            egui::TopBottomPanel::top("control_bar").show(ctx, |ui| {
                if let Some(control) = control_bar::render_control_bar(ui, state) {
                    interaction = Some(match control {
                        control_bar::ControlInteraction::Command(command) => {
                            PanelInteraction::CommandRequested(command)
                        }
                        control_bar::ControlInteraction::Targeted(command) => {
                            PanelInteraction::TargetedCommandRequested(command)
                        }
                    });
                }
            });
        }

        if page == Page::Traversal {
            egui::SidePanel::right("path_log")
                .default_width(220.0)
                .resizable(true)
                .show(ctx, |ui| {
                    path_log::render_path_log(ui, state.structures.traversal());
                });
        }

        let canvas_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default().frame(canvas_frame).show(ctx, |ui| match page {
            Page::Graph => graph_page::render_graph_page(ui),
            _ => canvas_panel::render_canvas(ui, state),
        });

        if settings_window::render_settings_window(ctx, state) {
            interaction = Some(PanelInteraction::SettingsChanged);
        }

        if let Some(notice) = &state.notice {
            if notice_dialog::render_notice_dialog(ctx, notice, state.theme.colors()) {
                interaction = Some(PanelInteraction::NoticeDismissed);
            }
        }

        interaction
    }
}
