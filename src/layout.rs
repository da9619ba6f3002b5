//! Layout engine: pure functions from structural indices to canvas coordinates.
//!
//! All positions returned here are glyph centres in canvas space.

use egui::{pos2, vec2, Pos2, Vec2};

use crate::config::VisualizerConfig;
use crate::linked_list::ListKind;

/// Where an array index sits inside its tree level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeSlot {
    pub level: u32,
    pub index_in_level: usize,
    pub count_in_level: usize,
}

/// Level arithmetic for 0-based array index `index`.
pub fn tree_slot(index: usize) -> TreeSlot {
    let level = (index + 1).ilog2();
    let first_in_level = (1usize << level) - 1;
    TreeSlot {
        level,
        index_in_level: index - first_in_level,
        count_in_level: 1usize << level,
    }
}

/// Centre of the tree glyph at `index`.
///
/// Each level is split into `count_in_level + 1` equal gaps across the canvas
/// width and the node sits on gap boundary `index_in_level + 1`.
pub fn tree_position(index: usize, cfg: &VisualizerConfig) -> Pos2 {
    let slot = tree_slot(index);
    let x_gap = cfg.canvas_width / (slot.count_in_level as f32 + 1.0);
    let x = x_gap * (slot.index_in_level as f32 + 1.0);
    let y = slot.level as f32 * cfg.level_gap + cfg.node_radius;
    pos2(x, y)
}

/// Shortens the segment between two circle centres so it starts and ends on
/// the circles' boundaries.
pub fn clip_between_circles(from: Pos2, to: Pos2, radius: f32) -> (Pos2, Pos2) {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    let offset = vec2(angle.cos(), angle.sin()) * radius;
    (from + offset, to - offset)
}

/// A parent → child edge of the array tree, already clipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeEdge {
    pub parent: usize,
    pub child: usize,
    pub from: Pos2,
    pub to: Pos2,
}

/// Edges for a tree whose glyph centres are `centres`, in array order.
///
/// Only in-bounds children produce an edge.
pub fn tree_edges(centres: &[Pos2], radius: f32) -> Vec<TreeEdge> {
    let n = centres.len();
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    for parent in 0..n {
        for child in [2 * parent + 1, 2 * parent + 2] {
            if child < n {
                let (from, to) = clip_between_circles(centres[parent], centres[child], radius);
                edges.push(TreeEdge { parent, child, from, to });
            }
        }
    }
    edges
}

/// Centre of the list glyph at `index` once the row has settled.
pub fn list_position(index: usize, cfg: &VisualizerConfig) -> Pos2 {
    let [w, h] = cfg.list_node_size;
    pos2(
        cfg.list_start_x + index as f32 * cfg.list_spacing + w / 2.0,
        cfg.list_row_y + h / 2.0,
    )
}

/// Link from the right edge of glyph `a` to the left edge of glyph `b`.
pub fn list_link(a: Pos2, b: Pos2, cfg: &VisualizerConfig) -> (Pos2, Pos2) {
    let half_w = cfg.list_node_size[0] / 2.0;
    (a + vec2(half_w, 0.0), b - vec2(half_w, 0.0))
}

/// Vertical offset separating the forward and backward links of a doubly list.
pub fn doubly_lane_offset(cfg: &VisualizerConfig) -> Vec2 {
    vec2(0.0, cfg.list_node_size[1] / 5.0)
}

/// Triangle for an arrow head whose tip sits on `to`, with 30° flanks.
pub fn arrow_head(from: Pos2, to: Pos2, size: f32) -> [Pos2; 3] {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    let flank = std::f32::consts::FRAC_PI_6;
    let left = to - vec2((angle - flank).cos(), (angle - flank).sin()) * size;
    let right = to - vec2((angle + flank).cos(), (angle + flank).sin()) * size;
    [to, left, right]
}

/// Gap between a list glyph and the tip of the traversal pointer.
const POINTER_GAP: f32 = 6.0;

/// Tip of the traversal pointer for the glyph centred at `centre`.
///
/// Singly lists show the pointer above the row, doubly lists below it.
pub fn pointer_anchor(centre: Pos2, kind: ListKind, cfg: &VisualizerConfig) -> Pos2 {
    let half_h = cfg.list_node_size[1] / 2.0;
    match kind {
        ListKind::Singly => centre - vec2(0.0, half_h + POINTER_GAP),
        ListKind::Doubly => centre + vec2(0.0, half_h + POINTER_GAP),
    }
}

/// Canvas size needed to show a list of `len` glyphs.
pub fn list_extent(len: usize, cfg: &VisualizerConfig) -> Vec2 {
    let width = cfg.list_start_x * 2.0 + len as f32 * cfg.list_spacing;
    let height = cfg.list_row_y + cfg.list_node_size[1] + cfg.lift_px + 60.0;
    vec2(width.max(cfg.canvas_width), height)
}

/// Canvas size needed to show a tree of `len` glyphs.
pub fn tree_extent(len: usize, cfg: &VisualizerConfig) -> Vec2 {
    let levels = if len == 0 { 1 } else { tree_slot(len - 1).level + 1 };
    let height = (levels - 1) as f32 * cfg.level_gap + cfg.node_radius * 2.0 + 40.0;
    vec2(cfg.canvas_width, height)
}
