//! Canvas panel UI rendering
//!
//! A scrollable area sized to the scene's layout extent, painted by the scene
//! renderer for the current page.

use eframe::egui;
use egui::{Rect, Vec2};

use dsvis::layout::{list_extent, tree_extent};
use dsvis::{Controller, ListKind};

use crate::app::AppState;
use crate::rendering::overview_renderer::render_overview;
use crate::rendering::scene_renderer::{render_list, render_tree, CanvasTransform};
use crate::state::Page;

const CANVAS_MARGIN: f32 = 20.0;
const OVERVIEW_SIZE: Vec2 = Vec2::new(200.0, 110.0);

/// Renders the scene of the current page
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_canvas(ui: &mut egui::Ui, state: &AppState) {
    let page = state.page.current();
    let colors = state.theme.colors();
    let structures = &state.structures;

    let (scene, extent, list_kind, cfg) = match page {
        Page::SinglyList | Page::DoublyList => {
            let kind = if page == Page::SinglyList { ListKind::Singly } else { ListKind::Doubly };
            let ctl = structures.list(kind);
            let extent = list_extent(ctl.scene().len(), ctl.config());
            (ctl.scene(), extent, Some(kind), ctl.config())
        }
        Page::BinaryTree => {
            let ctl = structures.tree();
            (ctl.scene(), tree_extent(ctl.scene().len(), ctl.config()), None, ctl.config())
        }
        Page::Traversal => {
            let ctl = structures.traversal();
            (ctl.scene(), tree_extent(ctl.scene().len(), ctl.config()), None, ctl.config())
        }
        Page::Graph => return,
    };

    let viewport = ui.max_rect();
    egui::ScrollArea::both()
        .id_salt("canvas_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let size = (extent + Vec2::splat(CANVAS_MARGIN * 2.0)).max(ui.available_size());
            let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::hover());
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 0.0, colors.canvas_background);

            let transform = CanvasTransform::new(rect.min + Vec2::splat(CANVAS_MARGIN), 1.0);
            match list_kind {
                Some(kind) => render_list(&painter, transform, scene, kind, cfg, colors),
                None => render_tree(&painter, transform, scene, cfg, colors),
            }
        });

    if page == Page::Traversal && state.page.show_overview() {
        let rect = Rect::from_min_size(viewport.right_bottom() - OVERVIEW_SIZE - Vec2::splat(8.0), OVERVIEW_SIZE);
        render_overview(ui, rect, scene, extent, cfg, colors);
    }
}
