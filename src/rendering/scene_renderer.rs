//! Scene rendering logic
//!
//! Draws a controller's scene with egui's painter API. Lists are rows of
//! rectangles joined by arrows, trees are circles joined by clipped edges.
//! Edges are never stored; they are derived from glyph order every frame.

use eframe::egui;
use egui::{vec2, Align2, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use dsvis::layout::{arrow_head, doubly_lane_offset, list_link, tree_edges};
use dsvis::{faded, Glyph, ListKind, Scene, ThemeColors, VisualizerConfig};

use crate::presentation::color_mapping::{edge_color, glyph_colors};

const LINE_WIDTH: f32 = 2.0;
const LABEL_SIZE: f32 = 14.0;
/// Labels are skipped below this scale; they would be unreadable.
const MIN_LABEL_SCALE: f32 = 0.4;
const POINTER_SIZE: f32 = 14.0;

/// Maps canvas coordinates to screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    pub origin: Pos2,
    pub scale: f32,
}

impl CanvasTransform {
    pub fn new(origin: Pos2, scale: f32) -> Self {
        Self { origin, scale }
    }

    pub fn to_screen(&self, p: Pos2) -> Pos2 {
        self.origin + p.to_vec2() * self.scale
    }

    pub fn size(&self, v: Vec2) -> Vec2 {
        v * self.scale
    }
}

/// Renders a singly or doubly linked list scene.
///
/// # Arguments
/// * `painter` - Painter clipped to the canvas
/// * `transform` - Canvas to screen mapping
/// * `scene` - Glyphs and pointer to draw
/// * `kind` - Decides single arrows or forward/backward lanes
/// * `cfg` - Geometry config
/// * `colors` - The current theme's palette
pub fn render_list(
    painter: &Painter,
    transform: CanvasTransform,
    scene: &Scene,
    kind: ListKind,
    cfg: &VisualizerConfig,
    colors: &ThemeColors,
) {
    let glyphs = scene.glyphs();
    for pair in glyphs.windows(2) {
        render_list_links(painter, transform, &pair[0], &pair[1], kind, cfg, colors);
    }

    let size = transform.size(Vec2::from(cfg.list_node_size));
    for glyph in glyphs {
        let palette = glyph_colors(glyph.mark, glyph.opacity, colors);
        let rect = Rect::from_center_size(transform.to_screen(glyph.centre), size);
        painter.rect_filled(rect, 2.0, palette.fill);
        painter.rect_stroke(rect, 2.0, Stroke::new(1.0, palette.stroke), egui::StrokeKind::Inside);
        render_label(painter, transform, rect.center(), glyph, palette.text);
    }

    if let Some(tip) = scene.pointer() {
        render_pointer(painter, transform.to_screen(tip), kind, colors);
    }
}

fn render_list_links(
    painter: &Painter,
    transform: CanvasTransform,
    a: &Glyph,
    b: &Glyph,
    kind: ListKind,
    cfg: &VisualizerConfig,
    colors: &ThemeColors,
) {
    let opacity = a.opacity.min(b.opacity);
    let (right_of_a, left_of_b) = list_link(a.centre, b.centre, cfg);
    match kind {
        ListKind::Singly => {
            render_arrow(painter, transform, right_of_a, left_of_b, faded(colors.edge, opacity), cfg);
        }
        ListKind::Doubly => {
            let lane = doubly_lane_offset(cfg);
            let forward = faded(colors.link_forward, opacity);
            let backward = faded(colors.link_backward, opacity);
            render_arrow(painter, transform, right_of_a - lane, left_of_b - lane, forward, cfg);
            render_arrow(painter, transform, left_of_b + lane, right_of_a + lane, backward, cfg);
        }
    }
}

fn render_arrow(
    painter: &Painter,
    transform: CanvasTransform,
    from: Pos2,
    to: Pos2,
    color: egui::Color32,
    cfg: &VisualizerConfig,
) {
    let from = transform.to_screen(from);
    let to = transform.to_screen(to);
    painter.line_segment([from, to], Stroke::new(LINE_WIDTH * transform.scale, color));
    let head = arrow_head(from, to, cfg.arrow_size * transform.scale);
    painter.add(Shape::convex_polygon(head.to_vec(), color, Stroke::NONE));
}

/// Triangle whose tip touches the glyph; it hangs above the row for singly
/// lists and sits below it for doubly lists.
fn render_pointer(painter: &Painter, tip: Pos2, kind: ListKind, colors: &ThemeColors) {
    let direction = match kind {
        ListKind::Singly => -1.0,
        ListKind::Doubly => 1.0,
    };
    let base = tip + vec2(0.0, POINTER_SIZE * direction);
    let half = POINTER_SIZE / 2.0;
    let points = vec![tip, base + vec2(-half, 0.0), base + vec2(half, 0.0)];
    painter.add(Shape::convex_polygon(points, colors.pointer, Stroke::NONE));
}

/// Renders an array-ordered tree scene: circles joined by clipped edges.
///
/// The edge into a node takes the active colour once the node is marked,
/// which is how traversal progress shows on the tree's edges.
pub fn render_tree(
    painter: &Painter,
    transform: CanvasTransform,
    scene: &Scene,
    cfg: &VisualizerConfig,
    colors: &ThemeColors,
) {
    let glyphs = scene.glyphs();
    let centres = scene.centres();
    for edge in tree_edges(&centres, cfg.node_radius) {
        let child = &glyphs[edge.child];
        let opacity = glyphs[edge.parent].opacity.min(child.opacity);
        let color = faded(edge_color(child.mark, colors), opacity);
        painter.line_segment(
            [transform.to_screen(edge.from), transform.to_screen(edge.to)],
            Stroke::new(LINE_WIDTH * transform.scale, color),
        );
    }

    let radius = cfg.node_radius * transform.scale;
    for glyph in glyphs {
        let palette = glyph_colors(glyph.mark, glyph.opacity, colors);
        let centre = transform.to_screen(glyph.centre);
        painter.circle_filled(centre, radius, palette.fill);
        painter.circle_stroke(centre, radius, Stroke::new(LINE_WIDTH * transform.scale, palette.stroke));
        render_label(painter, transform, centre, glyph, palette.text);
    }
}

fn render_label(painter: &Painter, transform: CanvasTransform, at: Pos2, glyph: &Glyph, color: egui::Color32) {
    if transform.scale < MIN_LABEL_SCALE {
        return;
    }
    painter.text(
        at,
        Align2::CENTER_CENTER,
        &glyph.label,
        FontId::proportional(LABEL_SIZE * transform.scale),
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_transform_scales_around_origin() {
        let transform = CanvasTransform::new(pos2(10.0, 20.0), 0.5);
        assert_eq!(transform.to_screen(pos2(100.0, 40.0)), pos2(60.0, 40.0));
        assert_eq!(transform.size(vec2(80.0, 40.0)), vec2(40.0, 20.0));
    }
}
