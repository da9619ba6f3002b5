//! Builders for the timelines each operation plays.
//!
//! Every builder is pure: it reads the current scene and config and returns a
//! [`Timeline`] of [`SceneEffect`]s whose finish offset is the moment the
//! owning controller may continue with its next action.

use egui::vec2;

use crate::config::VisualizerConfig;
use crate::layout::{list_position, pointer_anchor, tree_position};
use crate::linked_list::ListKind;
use crate::node::NodeId;
use crate::scene::{Scene, SceneEffect};
use crate::timeline::Timeline;

/// Walks the pointer from the first glyph to glyph `target_index`.
///
/// One move per hop, `pointer_pause_ms` between hops, and the pointer is
/// hidden when the walk ends. Yields an empty timeline if the index is not in
/// the scene.
pub fn pointer_walk(
    scene: &Scene,
    target_index: usize,
    kind: ListKind,
    cfg: &VisualizerConfig,
) -> Timeline<SceneEffect> {
    let centres = scene.resting_centres();
    let mut timeline = Timeline::new();
    if target_index >= centres.len() {
        return timeline;
    }

    timeline.push(0, SceneEffect::ShowPointer { at: pointer_anchor(centres[0], kind, cfg) });
    let mut t = 0;
    for (hop, centre) in centres.iter().take(target_index + 1).enumerate() {
        timeline.push(
            t,
            SceneEffect::MovePointer {
                to: pointer_anchor(*centre, kind, cfg),
                duration_ms: cfg.pointer_hop_ms,
            },
        );
        t = t.saturating_add(cfg.pointer_hop_ms);
        if hop < target_index {
            t = t.saturating_add(cfg.pointer_pause_ms);
        }
    }
    timeline.push(t, SceneEffect::HidePointer);
    timeline
}

/// Fades a new list glyph into scene slot `index` and shifts its neighbours.
///
/// Doubly lists spawn the glyph `lift_px` above the row and drop it into place
/// once the fade has finished.
pub fn list_insertion(
    kind: ListKind,
    index: usize,
    id: NodeId,
    label: String,
    cfg: &VisualizerConfig,
) -> Timeline<SceneEffect> {
    let slot = list_position(index, cfg);
    let (spawn_at, settle_at, settle_ms) = match kind {
        ListKind::Singly => (slot, 0, cfg.relayout_ms),
        ListKind::Doubly => (slot - vec2(0.0, cfg.lift_px), cfg.fade_ms, cfg.move_ms),
    };

    Timeline::new()
        .at(0, SceneEffect::Spawn { index, id, label, at: spawn_at, opacity: 0.0 })
        .at(0, SceneEffect::Fade { id, to: 1.0, duration_ms: cfg.fade_ms })
        .at(settle_at, SceneEffect::Relayout { duration_ms: settle_ms })
        .finish_at(cfg.fade_ms.max(settle_at.saturating_add(settle_ms)))
}

/// Fades out a list glyph, removes it and closes the gap.
///
/// Doubly lists lift the glyph by `lift_px` before fading it.
pub fn list_removal(kind: ListKind, id: NodeId, cfg: &VisualizerConfig) -> Timeline<SceneEffect> {
    let mut timeline = Timeline::new().at(0, SceneEffect::Detach { id });
    let fade_start = match kind {
        ListKind::Singly => 0,
        ListKind::Doubly => {
            timeline.push(
                0,
                SceneEffect::MoveBy { id, delta: vec2(0.0, -cfg.lift_px), duration_ms: cfg.move_ms },
            );
            cfg.move_ms
        }
    };
    let gone = fade_start.saturating_add(cfg.fade_ms);
    timeline
        .at(fade_start, SceneEffect::Fade { id, to: 0.0, duration_ms: cfg.fade_ms })
        .at(gone, SceneEffect::Despawn { id })
        .at(gone, SceneEffect::Relayout { duration_ms: cfg.relayout_ms })
        .finish_at(gone.saturating_add(cfg.relayout_ms))
}

/// Fades a new tree glyph in at its array slot.
pub fn tree_insertion(index: usize, id: NodeId, label: String, cfg: &VisualizerConfig) -> Timeline<SceneEffect> {
    Timeline::new()
        .at(0, SceneEffect::Spawn { index, id, label, at: tree_position(index, cfg), opacity: 0.0 })
        .at(0, SceneEffect::Fade { id, to: 1.0, duration_ms: cfg.fade_ms })
        .finish_at(cfg.fade_ms)
}

/// Fades out the last tree glyph and removes it.
pub fn tree_removal(id: NodeId, cfg: &VisualizerConfig) -> Timeline<SceneEffect> {
    Timeline::new()
        .at(0, SceneEffect::Detach { id })
        .at(0, SceneEffect::Fade { id, to: 0.0, duration_ms: cfg.fade_ms })
        .at(cfg.fade_ms, SceneEffect::Despawn { id })
        .finish_at(cfg.fade_ms)
}

/// Step `k` highlights `order[k]` at `k * delay_ms`; completion at `N * delay_ms`.
pub fn highlight_plan(order: &[NodeId], delay_ms: u64) -> Timeline<SceneEffect> {
    let mut timeline = Timeline::new();
    for (k, &id) in order.iter().enumerate() {
        timeline.push(k as u64 * delay_ms, SceneEffect::Highlight { id });
    }
    timeline.finish_at(order.len() as u64 * delay_ms)
}
