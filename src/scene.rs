//! Plain-data visual state sampled by the renderer.
//!
//! A scene is an ordered list of glyphs plus an optional traversal pointer.
//! Glyph order mirrors structural order; edges are never stored and are
//! derived from that order at draw time. Opacity and position changes are
//! tweens sampled from the same logical clock that drives the sequencer.

use egui::{Pos2, Vec2};
use std::fmt;

use crate::node::NodeId;
use crate::traversal::Mark;

/// Linear interpolation between two values of the same type.
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Pos2 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

/// A value moving from `from` to `to` over `duration_ms` starting at `start_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub start_ms: u64,
    pub duration_ms: u64,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, start_ms: u64, duration_ms: u64) -> Self {
        Self { from, to, start_ms, duration_ms }
    }

    pub fn progress(&self, now_ms: u64) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms) as f32;
        (elapsed / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now_ms: u64) -> T {
        self.from.lerp(self.to, self.progress(now_ms))
    }

    pub fn is_finished(&self, now_ms: u64) -> bool {
        now_ms >= self.start_ms.saturating_add(self.duration_ms)
    }
}

/// One drawable node.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub id: NodeId,
    pub label: String,
    pub centre: Pos2,
    pub opacity: f32,
    pub mark: Mark,
    /// Set once the node has left the model and the glyph is on its way out
    pub ghost: bool,
    motion: Option<Tween<Pos2>>,
    fade: Option<Tween<f32>>,
}

impl Glyph {
    pub fn new(id: NodeId, label: impl Into<String>, centre: Pos2, opacity: f32) -> Self {
        Self {
            id,
            label: label.into(),
            centre,
            opacity,
            mark: Mark::Normal,
            ghost: false,
            motion: None,
            fade: None,
        }
    }

    /// Where the glyph will be once its current motion ends.
    pub fn resting_centre(&self) -> Pos2 {
        self.motion.map(|m| m.to).unwrap_or(self.centre)
    }

    pub fn is_moving(&self) -> bool {
        self.motion.is_some() || self.fade.is_some()
    }
}

/// The traversal pointer shown while walking a list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub tip: Pos2,
    motion: Option<Tween<Pos2>>,
}

/// A visual mutation the sequencer schedules.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEffect {
    /// Inserts a glyph at `index` in scene order
    Spawn { index: usize, id: NodeId, label: String, at: Pos2, opacity: f32 },
    Fade { id: NodeId, to: f32, duration_ms: u64 },
    MoveBy { id: NodeId, delta: Vec2, duration_ms: u64 },
    /// Flags the glyph as no longer part of the model
    Detach { id: NodeId },
    /// Physically removes the glyph
    Despawn { id: NodeId },
    /// Moves every non-ghost glyph to its settled layout slot
    Relayout { duration_ms: u64 },
    ShowPointer { at: Pos2 },
    MovePointer { to: Pos2, duration_ms: u64 },
    HidePointer,
    /// Marks `id` current and demotes the previous current glyph to visited
    Highlight { id: NodeId },
}

impl fmt::Display for SceneEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneEffect::Spawn { index, id, at, .. } => {
                write!(f, "spawn node {id} at slot {index} ({:.0}, {:.0})", at.x, at.y)
            }
            SceneEffect::Fade { id, to, duration_ms } => {
                write!(f, "fade node {id} to {to:.1} over {duration_ms} ms")
            }
            SceneEffect::MoveBy { id, delta, duration_ms } => {
                write!(f, "move node {id} by ({:.0}, {:.0}) over {duration_ms} ms", delta.x, delta.y)
            }
            SceneEffect::Detach { id } => write!(f, "detach node {id}"),
            SceneEffect::Despawn { id } => write!(f, "despawn node {id}"),
            SceneEffect::Relayout { duration_ms } => write!(f, "relayout over {duration_ms} ms"),
            SceneEffect::ShowPointer { at } => write!(f, "show pointer at ({:.0}, {:.0})", at.x, at.y),
            SceneEffect::MovePointer { to, duration_ms } => {
                write!(f, "move pointer to ({:.0}, {:.0}) over {duration_ms} ms", to.x, to.y)
            }
            SceneEffect::HidePointer => write!(f, "hide pointer"),
            SceneEffect::Highlight { id } => write!(f, "highlight node {id}"),
        }
    }
}

/// Ordered glyphs and the optional pointer of one controller.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    glyphs: Vec<Glyph>,
    pointer: Option<Pointer>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn pointer(&self) -> Option<Pos2> {
        self.pointer.map(|p| p.tip)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.glyphs.iter().position(|g| g.id == id)
    }

    pub fn glyph(&self, id: NodeId) -> Option<&Glyph> {
        self.glyphs.iter().find(|g| g.id == id)
    }

    fn glyph_mut(&mut self, id: NodeId) -> Option<&mut Glyph> {
        self.glyphs.iter_mut().find(|g| g.id == id)
    }

    /// Settled centres in scene order.
    pub fn resting_centres(&self) -> Vec<Pos2> {
        self.glyphs.iter().map(Glyph::resting_centre).collect()
    }

    /// Current centres in scene order.
    pub fn centres(&self) -> Vec<Pos2> {
        self.glyphs.iter().map(|g| g.centre).collect()
    }

    /// True while any tween is still running.
    pub fn is_moving(&self) -> bool {
        self.glyphs.iter().any(Glyph::is_moving)
            || self.pointer.is_some_and(|p| p.motion.is_some())
    }

    pub fn push(&mut self, glyph: Glyph) {
        self.glyphs.push(glyph);
    }

    pub fn clear(&mut self) {
        self.glyphs.clear();
        self.pointer = None;
    }

    pub fn set_mark(&mut self, id: NodeId, mark: Mark) {
        if let Some(glyph) = self.glyph_mut(id) {
            glyph.mark = mark;
        }
    }

    pub fn reset_marks(&mut self) {
        for glyph in &mut self.glyphs {
            glyph.mark = Mark::Normal;
        }
    }

    /// Applies one effect at `now_ms`.
    ///
    /// `place` maps an index among non-ghost glyphs to its settled centre and
    /// is only consulted by [`SceneEffect::Relayout`].
    pub fn apply(&mut self, effect: SceneEffect, now_ms: u64, place: impl Fn(usize) -> Pos2) {
        match effect {
            SceneEffect::Spawn { index, id, label, at, opacity } => {
                let index = index.min(self.glyphs.len());
                self.glyphs.insert(index, Glyph::new(id, label, at, opacity));
            }
            SceneEffect::Fade { id, to, duration_ms } => {
                if let Some(glyph) = self.glyph_mut(id) {
                    glyph.fade = Some(Tween::new(glyph.opacity, to, now_ms, duration_ms));
                }
            }
            SceneEffect::MoveBy { id, delta, duration_ms } => {
                if let Some(glyph) = self.glyph_mut(id) {
                    let target = glyph.resting_centre() + delta;
                    glyph.motion = Some(Tween::new(glyph.centre, target, now_ms, duration_ms));
                }
            }
            SceneEffect::Detach { id } => {
                if let Some(glyph) = self.glyph_mut(id) {
                    glyph.ghost = true;
                }
            }
            SceneEffect::Despawn { id } => {
                self.glyphs.retain(|g| g.id != id);
            }
            SceneEffect::Relayout { duration_ms } => {
                for (slot, glyph) in self.glyphs.iter_mut().filter(|g| !g.ghost).enumerate() {
                    let target = place(slot);
                    if glyph.resting_centre() != target {
                        glyph.motion = Some(Tween::new(glyph.centre, target, now_ms, duration_ms));
                    }
                }
            }
            SceneEffect::ShowPointer { at } => {
                self.pointer = Some(Pointer { tip: at, motion: None });
            }
            SceneEffect::MovePointer { to, duration_ms } => {
                if let Some(pointer) = &mut self.pointer {
                    pointer.motion = Some(Tween::new(pointer.tip, to, now_ms, duration_ms));
                }
            }
            SceneEffect::HidePointer => {
                self.pointer = None;
            }
            SceneEffect::Highlight { id } => {
                for glyph in &mut self.glyphs {
                    if glyph.mark == Mark::Current {
                        glyph.mark = Mark::Visited;
                    }
                }
                self.set_mark(id, Mark::Current);
            }
        }
        self.update(now_ms);
    }

    /// Samples every running tween at `now_ms` and retires finished ones.
    pub fn update(&mut self, now_ms: u64) {
        for glyph in &mut self.glyphs {
            if let Some(fade) = glyph.fade {
                glyph.opacity = fade.sample(now_ms);
                if fade.is_finished(now_ms) {
                    glyph.fade = None;
                }
            }
            if let Some(motion) = glyph.motion {
                glyph.centre = motion.sample(now_ms);
                if motion.is_finished(now_ms) {
                    glyph.motion = None;
                }
            }
        }
        if let Some(pointer) = &mut self.pointer {
            if let Some(motion) = pointer.motion {
                pointer.tip = motion.sample(now_ms);
                if motion.is_finished(now_ms) {
                    pointer.motion = None;
                }
            }
        }
    }
}
