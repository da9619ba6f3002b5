//! Per-structure controllers.
//!
//! Each controller owns one model, one scene and one sequencer. Commands are
//! validated and applied to the model immediately; the matching visual
//! sequence is queued and played once everything queued before it has
//! finished. The traversal controller instead cancels and restarts.

mod list;
mod traversal;
mod tree;

pub use list::ListController;
pub use traversal::TraversalController;
pub use tree::TreeController;

use crate::command::Event;
use crate::scene::{Scene, SceneEffect};
use crate::timeline::{Cue, Sequencer, Timeline};
use egui::Pos2;
use std::collections::VecDeque;

/// FIFO of pending visual sequences in front of a sequencer.
///
/// `V` describes a pending visual; it is turned into a timeline only when it
/// reaches the front, so it sees the scene as the previous sequence left it.
/// A visual starts at the later of its command time and the previous
/// sequence's completion, never at the tick that happens to notice it.
#[derive(Debug)]
pub(crate) struct VisualQueue<V> {
    pending: VecDeque<(V, u64)>,
    sequencer: Sequencer<SceneEffect>,
    last_finish_ms: u64,
}

impl<V> Default for VisualQueue<V> {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
            sequencer: Sequencer::new(),
            last_finish_ms: 0,
        }
    }
}

impl<V> VisualQueue<V> {
    /// Queues `visual` for a command applied at `now_ms`.
    pub(crate) fn push(&mut self, visual: V, now_ms: u64) {
        self.pending.push_back((visual, now_ms));
    }

    pub(crate) fn clear(&mut self) {
        self.pending.clear();
        self.sequencer.cancel();
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.sequencer.is_running() || !self.pending.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len() + usize::from(self.sequencer.is_running())
    }

    /// Plays due cues against `scene`, starting queued visuals as earlier ones finish.
    ///
    /// `plan` turns a visual into a timeline; `place` settles glyphs on relayout.
    pub(crate) fn drive(
        &mut self,
        scene: &mut Scene,
        now_ms: u64,
        mut plan: impl FnMut(&Scene, V) -> Timeline<SceneEffect>,
        place: impl Fn(usize) -> Pos2,
    ) -> Vec<Event> {
        let mut events = Vec::new();
        if !self.sequencer.is_running() {
            self.start_next(scene, &mut plan);
        }

        while self.sequencer.is_running() {
            let mut finished_at = None;
            for cue in self.sequencer.poll(now_ms) {
                match cue {
                    Cue::Step { at_ms, effect, .. } => {
                        scene.apply(effect.clone(), at_ms, &place);
                        events.push(Event::Effect { at_ms, effect });
                    }
                    Cue::Finished { at_ms } => {
                        events.push(Event::Finished { at_ms });
                        finished_at = Some(at_ms);
                    }
                }
            }
            match finished_at {
                Some(at_ms) => {
                    self.last_finish_ms = at_ms;
                    if !self.start_next(scene, &mut plan) {
                        break;
                    }
                }
                None => break,
            }
        }

        scene.update(now_ms);
        events
    }

    fn start_next(
        &mut self,
        scene: &Scene,
        plan: &mut impl FnMut(&Scene, V) -> Timeline<SceneEffect>,
    ) -> bool {
        match self.pending.pop_front() {
            Some((visual, queued_ms)) => {
                let at_ms = queued_ms.max(self.last_finish_ms);
                let timeline = plan(scene, visual);
                tracing::trace!(steps = timeline.len(), finish_ms = timeline.finish_ms(), "starting visual sequence");
                self.sequencer.start(timeline, at_ms);
                true
            }
            None => false,
        }
    }
}
