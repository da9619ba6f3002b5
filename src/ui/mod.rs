//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the visualizer:
//! - Header panel (page tabs, settings toggle, theme selector)
//! - Control bar (per-page buttons and the target id field)
//! - Canvas panel (scrollable scene view with the traversal overview)
//! - Path log (traversal output)
//! - Status bar (memory, node count, animation state)
//! - Notice dialog and settings window
//! - Graph placeholder page
//! - Panel manager (panel orchestration and layout)

pub mod canvas_panel;
pub mod control_bar;
pub mod graph_page;
pub mod header;
pub mod notice_dialog;
pub mod panel_manager;
pub mod path_log;
pub mod settings_window;
pub mod status_bar;
