//! Thumbnail overview of a tree scene.
//!
//! Draws the whole scene scaled down into a fixed box so traversal progress
//! stays visible while the main canvas is scrolled.

use eframe::egui;
use egui::{Rect, Stroke, Vec2};

use dsvis::{Scene, ThemeColors, VisualizerConfig};

use crate::rendering::scene_renderer::{render_tree, CanvasTransform};

/// Scale that fits a canvas of `extent` into `frame`, never enlarging.
pub fn fit_scale(extent: Vec2, frame: Vec2) -> f32 {
    if extent.x <= 0.0 || extent.y <= 0.0 {
        return 1.0;
    }
    (frame.x / extent.x).min(frame.y / extent.y).min(1.0)
}

/// Renders `scene` scaled into `rect`.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `rect` - Screen area reserved for the thumbnail
/// * `scene` - The tree scene to draw
/// * `extent` - Canvas size the scene was laid out in
/// * `cfg` - Geometry config
/// * `colors` - The current theme's palette
pub fn render_overview(
    ui: &egui::Ui,
    rect: Rect,
    scene: &Scene,
    extent: Vec2,
    cfg: &VisualizerConfig,
    colors: &ThemeColors,
) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, colors.canvas_background);
    painter.rect_stroke(rect, 4.0, Stroke::new(1.0, colors.border), egui::StrokeKind::Inside);

    let inner = rect.shrink(6.0);
    let scale = fit_scale(extent, inner.size());
    let offset = (inner.size() - extent * scale) / 2.0;
    render_tree(&painter, CanvasTransform::new(inner.min + offset, scale), scene, cfg, colors);
}
