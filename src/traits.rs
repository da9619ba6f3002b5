//! Core traits shared by every visualized structure.
//!
//! `Structure` is implemented by the models, `Controller` by the per-structure
//! controllers that pair a model with a scene and a sequencer. The GUI and the
//! replay tool only talk to these two seams.

use crate::command::{Command, Event};
use crate::error::Result;
use crate::node::Node;
use crate::scene::Scene;

/// Read access to the nodes of a model, in structural order.
pub trait Structure {
    /// Human readable name used in notices.
    fn display_name(&self) -> &'static str;

    /// Nodes in structural order (list order, or array order for trees).
    fn nodes(&self) -> &[Node];

    fn len(&self) -> usize {
        self.nodes().len()
    }

    fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }
}

/// A model + scene + sequencer driven by commands and a logical clock.
pub trait Controller {
    /// Short name shown in the status bar and replay output.
    fn name(&self) -> &'static str;

    /// Validates and applies a command at logical time `now_ms`.
    ///
    /// On error the model is left unchanged.
    fn apply(&mut self, command: Command, now_ms: u64) -> Result<()>;

    /// Advances the clock, applying every effect that has become due.
    fn tick(&mut self, now_ms: u64) -> Vec<Event>;

    /// True while a visual sequence is playing or queued.
    fn is_animating(&self) -> bool;

    /// Visual sequences playing or waiting their turn.
    fn pending_visuals(&self) -> usize {
        usize::from(self.is_animating())
    }

    /// Visual state to draw.
    fn scene(&self) -> &Scene;

    /// Nodes of the underlying model.
    fn model_nodes(&self) -> &[Node];
}
