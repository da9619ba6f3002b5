//! Colour mapping for glyphs, edges and notices.
//!
//! Maps traversal marks and notice severities to theme colours and folds a
//! glyph's opacity into the result.

use dsvis::{faded, Mark, Severity, ThemeColors};
use egui::Color32;

/// Fill and label colours for a glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphColors {
    pub fill: Color32,
    pub stroke: Color32,
    pub text: Color32,
}

/// Returns the colours for a glyph with `mark` drawn at `opacity`.
///
/// # Arguments
/// * `mark` - Traversal state of the node
/// * `opacity` - Current opacity of the glyph in `[0, 1]`
/// * `colors` - The current theme's palette
pub fn glyph_colors(mark: Mark, opacity: f32, colors: &ThemeColors) -> GlyphColors {
    let (fill, text) = match mark {
        Mark::Normal => (colors.node_fill, colors.node_text),
        Mark::Current => (colors.node_current, colors.node_marked_text),
        Mark::Visited => (colors.node_visited, colors.node_marked_text),
    };
    GlyphColors {
        fill: faded(fill, opacity),
        stroke: faded(colors.node_stroke, opacity),
        text: faded(text, opacity),
    }
}

/// Colour of the edge leading into a node with `mark`.
pub fn edge_color(child_mark: Mark, colors: &ThemeColors) -> Color32 {
    match child_mark {
        Mark::Normal => colors.edge,
        Mark::Current | Mark::Visited => colors.edge_active,
    }
}

pub fn severity_color(severity: Severity, colors: &ThemeColors) -> Color32 {
    match severity {
        Severity::Info => colors.info,
        Severity::Warning => colors.warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsvis::ThemeManager;

    #[test]
    fn test_marked_nodes_use_highlight_fill() {
        let manager = ThemeManager::new();
        let colors = &manager.current_theme().colors;
        assert_eq!(glyph_colors(Mark::Current, 1.0, colors).fill, colors.node_current);
        assert_eq!(glyph_colors(Mark::Normal, 1.0, colors).fill, colors.node_fill);
        assert_eq!(glyph_colors(Mark::Visited, 0.0, colors).fill, Color32::TRANSPARENT);
    }

    #[test]
    fn test_visited_edges_stay_active() {
        let manager = ThemeManager::new();
        let colors = &manager.current_theme().colors;
        assert_eq!(edge_color(Mark::Visited, colors), colors.edge_active);
        assert_eq!(edge_color(Mark::Normal, colors), colors.edge);
    }
}
