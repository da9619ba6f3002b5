//! Geometry and timing constants shared by layout, animation and rendering.
//!
//! One parameterised config covers every structure. It is persisted as JSON in
//! eframe storage by the GUI, so every field has a serde default.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Width the tree layout spreads each level across
    pub canvas_width: f32,
    /// Vertical distance between tree levels
    pub level_gap: f32,
    /// Radius of circular tree glyphs
    pub node_radius: f32,

    /// X of the first list glyph's left edge
    pub list_start_x: f32,
    /// Y of the list row's top edge
    pub list_row_y: f32,
    /// Horizontal distance between consecutive list glyphs
    pub list_spacing: f32,
    /// Size of rectangular list glyphs [width, height]
    pub list_node_size: [f32; 2],

    pub fade_ms: u64,
    pub move_ms: u64,
    pub relayout_ms: u64,
    pub pointer_hop_ms: u64,
    pub pointer_pause_ms: u64,
    /// Distance a doubly-list glyph rises before deletion and drops after insertion
    pub lift_px: f32,
    pub arrow_size: f32,

    /// Delay between consecutive traversal highlights
    pub traversal_delay_ms: u64,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            level_gap: 100.0,
            node_radius: 20.0,
            list_start_x: 20.0,
            list_row_y: 150.0,
            list_spacing: 100.0,
            list_node_size: [80.0, 40.0],
            fade_ms: 500,
            move_ms: 500,
            relayout_ms: 500,
            pointer_hop_ms: 300,
            pointer_pause_ms: 200,
            lift_px: 30.0,
            arrow_size: 10.0,
            traversal_delay_ms: 1000,
        }
    }
}

impl VisualizerConfig {
    pub const MIN_TRAVERSAL_DELAY_MS: u64 = 50;
    pub const MAX_TRAVERSAL_DELAY_MS: u64 = 5000;
    /// Longest single list/tree animation step
    pub const MAX_ANIMATION_MS: u64 = 60_000;
    pub const MIN_SPEED: f32 = 0.25;
    pub const MAX_SPEED: f32 = 4.0;

    /// Returns a copy with out-of-range values pulled back to something drawable.
    ///
    /// Storage may hold values written by hand or by an older version.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let positive = |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };

        Self {
            canvas_width: positive(self.canvas_width, defaults.canvas_width),
            level_gap: positive(self.level_gap, defaults.level_gap),
            node_radius: positive(self.node_radius, defaults.node_radius),
            list_start_x: if self.list_start_x.is_finite() { self.list_start_x } else { defaults.list_start_x },
            list_row_y: if self.list_row_y.is_finite() { self.list_row_y } else { defaults.list_row_y },
            list_spacing: positive(self.list_spacing, defaults.list_spacing),
            list_node_size: [
                positive(self.list_node_size[0], defaults.list_node_size[0]),
                positive(self.list_node_size[1], defaults.list_node_size[1]),
            ],
            fade_ms: self.fade_ms.min(Self::MAX_ANIMATION_MS),
            move_ms: self.move_ms.min(Self::MAX_ANIMATION_MS),
            relayout_ms: self.relayout_ms.min(Self::MAX_ANIMATION_MS),
            pointer_hop_ms: self.pointer_hop_ms.min(Self::MAX_ANIMATION_MS),
            pointer_pause_ms: self.pointer_pause_ms.min(Self::MAX_ANIMATION_MS),
            lift_px: if self.lift_px.is_finite() { self.lift_px.max(0.0) } else { defaults.lift_px },
            arrow_size: positive(self.arrow_size, defaults.arrow_size),
            traversal_delay_ms: self
                .traversal_delay_ms
                .clamp(Self::MIN_TRAVERSAL_DELAY_MS, Self::MAX_TRAVERSAL_DELAY_MS),
        }
    }

    /// Multiplies every list/tree animation duration by `factor`, clamped to
    /// `MIN_SPEED..=MAX_SPEED`. A non-finite factor leaves durations unchanged.
    pub fn with_speed(&self, factor: f32) -> Self {
        let factor = if factor.is_finite() { factor.clamp(Self::MIN_SPEED, Self::MAX_SPEED) } else { 1.0 };
        let scale = |ms: u64| ((ms as f32) * factor).round() as u64;
        Self {
            fade_ms: scale(self.fade_ms),
            move_ms: scale(self.move_ms),
            relayout_ms: scale(self.relayout_ms),
            pointer_hop_ms: scale(self.pointer_hop_ms),
            pointer_pause_ms: scale(self.pointer_pause_ms),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let cfg: VisualizerConfig = serde_json::from_str(r#"{"fade_ms": 250}"#).unwrap();
        assert_eq!(cfg.fade_ms, 250);
        assert_eq!(cfg.canvas_width, 800.0);
        assert_eq!(cfg.traversal_delay_ms, 1000);
    }

    #[test]
    fn test_sanitized_clamps() {
        let cfg = VisualizerConfig {
            node_radius: -4.0,
            canvas_width: f32::NAN,
            traversal_delay_ms: 0,
            ..Default::default()
        };
        let clean = cfg.sanitized();
        assert_eq!(clean.node_radius, 20.0);
        assert_eq!(clean.canvas_width, 800.0);
        assert_eq!(clean.traversal_delay_ms, VisualizerConfig::MIN_TRAVERSAL_DELAY_MS);
    }

    #[test]
    fn test_with_speed_leaves_traversal_delay() {
        let fast = VisualizerConfig::default().with_speed(0.5);
        assert_eq!(fast.fade_ms, 250);
        assert_eq!(fast.pointer_hop_ms, 150);
        assert_eq!(fast.traversal_delay_ms, 1000);
    }

    #[test]
    fn test_with_speed_clamps_factor() {
        let slow = VisualizerConfig::default().with_speed(1e30).sanitized();
        assert_eq!(slow.fade_ms, 2000);
        assert_eq!(slow.pointer_pause_ms, 800);

        let fast = VisualizerConfig::default().with_speed(0.0);
        assert_eq!(fast.fade_ms, 125);

        let unchanged = VisualizerConfig::default().with_speed(f32::NAN);
        assert_eq!(unchanged, VisualizerConfig::default());
    }

    #[test]
    fn test_sanitized_caps_durations() {
        let cfg = VisualizerConfig { fade_ms: u64::MAX, move_ms: 700, ..Default::default() };
        let clean = cfg.sanitized();
        assert_eq!(clean.fade_ms, VisualizerConfig::MAX_ANIMATION_MS);
        assert_eq!(clean.move_ms, 700);
    }
}
