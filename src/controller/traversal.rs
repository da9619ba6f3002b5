use crate::animation::highlight_plan;
use crate::command::{Command, Event};
use crate::config::VisualizerConfig;
use crate::error::{Notice, OpError, Result};
use crate::layout::tree_position;
use crate::node::{Node, NodeId};
use crate::scene::{Glyph, Scene, SceneEffect};
use crate::timeline::{Cue, Sequencer};
use crate::traits::Controller;
use crate::traversal::{format_path, Mark, TraversalKind, TraversalTree};

/// Animates traversals of the fixed demo tree.
///
/// Starting a traversal while one is playing cancels it and starts over with
/// fresh marks and an empty path log.
#[derive(Debug)]
pub struct TraversalController {
    tree: TraversalTree,
    nodes: Vec<Node>,
    scene: Scene,
    sequencer: Sequencer<SceneEffect>,
    log: Vec<String>,
    current: Option<NodeId>,
    kind: Option<TraversalKind>,
    config: VisualizerConfig,
}

impl TraversalController {
    pub fn new(config: VisualizerConfig) -> Self {
        let tree = TraversalTree::new();
        let nodes: Vec<Node> = tree.ids().map(|id| Node { id, value: id.to_string() }).collect();
        let mut scene = Scene::new();
        for (slot, node) in nodes.iter().enumerate() {
            scene.push(Glyph::new(node.id, node.value.clone(), tree_position(slot, &config), 1.0));
        }

        Self {
            tree,
            nodes,
            scene,
            sequencer: Sequencer::new(),
            log: Vec::new(),
            current: None,
            kind: None,
            config,
        }
    }

    pub fn tree(&self) -> &TraversalTree {
        &self.tree
    }

    /// Path lines appended so far, oldest first.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// The traversal playing or last played.
    pub fn kind(&self) -> Option<TraversalKind> {
        self.kind
    }

    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Takes effect from the next traversal on.
    pub fn set_config(&mut self, config: VisualizerConfig) {
        self.config = config;
    }

    fn reset(&mut self) {
        self.sequencer.cancel();
        self.tree.reset_marks();
        self.scene.reset_marks();
        self.log.clear();
        self.current = None;
    }

    fn start(&mut self, kind: TraversalKind, now_ms: u64) {
        if self.sequencer.is_running() {
            tracing::debug!(previous = ?self.kind, "cancelling running traversal");
        }
        self.reset();
        let order = self.tree.run(kind).to_vec();
        let plan = highlight_plan(&order, self.config.traversal_delay_ms);
        tracing::debug!(%kind, steps = plan.len(), finish_ms = plan.finish_ms(), "starting traversal");
        self.kind = Some(kind);
        self.sequencer.start(plan, now_ms);
    }

    fn highlight(&mut self, id: NodeId, at_ms: u64) -> String {
        if let Some(previous) = self.current.replace(id) {
            self.tree.set_mark(previous, Mark::Visited);
        }
        self.tree.set_mark(id, Mark::Current);
        let line = format_path(&self.tree.path_to(id));
        tracing::trace!(%id, at_ms, path = %line, "visited");
        self.log.push(line.clone());
        line
    }

    fn finish(&mut self) -> Notice {
        if let Some(last) = self.current.take() {
            self.tree.set_mark(last, Mark::Visited);
            self.scene.set_mark(last, Mark::Visited);
        }
        let label = self.kind.map(TraversalKind::label).unwrap_or("Traversal");
        tracing::info!(kind = label, visited = self.log.len(), "traversal complete");
        Notice::info("Traversal complete", format!("{label} traversal visited {} nodes", self.log.len()))
    }
}

impl Controller for TraversalController {
    fn name(&self) -> &'static str {
        "traversal demo"
    }

    fn apply(&mut self, command: Command, now_ms: u64) -> Result<()> {
        match command {
            Command::Traverse(kind) => {
                self.start(kind, now_ms);
                Ok(())
            }
            Command::Clear => {
                self.reset();
                tracing::debug!(at_ms = now_ms, "traversal reset");
                Ok(())
            }
            other => Err(OpError::UnsupportedCommand {
                command: other.name(),
                structure: self.name(),
            }),
        }
    }

    fn tick(&mut self, now_ms: u64) -> Vec<Event> {
        let mut events = Vec::new();
        for cue in self.sequencer.poll(now_ms) {
            match cue {
                Cue::Step { at_ms, effect, .. } => {
                    let visited = match effect {
                        SceneEffect::Highlight { id } => Some(id),
                        _ => None,
                    };
                    self.scene.apply(effect.clone(), at_ms, |slot| tree_position(slot, &self.config));
                    events.push(Event::Effect { at_ms, effect });
                    if let Some(id) = visited {
                        let line = self.highlight(id, at_ms);
                        events.push(Event::Log { at_ms, line });
                    }
                }
                Cue::Finished { at_ms } => {
                    let notice = self.finish();
                    events.push(Event::Finished { at_ms });
                    events.push(Event::Notice(notice));
                }
            }
        }
        self.scene.update(now_ms);
        events
    }

    fn is_animating(&self) -> bool {
        self.sequencer.is_running()
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn model_nodes(&self) -> &[Node] {
        &self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> TraversalController {
        TraversalController::new(VisualizerConfig::default())
    }

    #[test]
    fn test_scene_prebuilt_at_tree_slots() {
        let ctl = controller();
        assert_eq!(ctl.scene().len(), 15);
        assert_eq!(ctl.scene().glyphs()[0].centre, tree_position(0, ctl.config()));
        assert_eq!(ctl.model_nodes()[14].value, "15");
    }

    #[test]
    fn test_highlight_steps_follow_delay() {
        let mut ctl = controller();
        ctl.apply(Command::Traverse(TraversalKind::Inorder), 0).unwrap();

        let first = ctl.tick(0);
        assert!(first.contains(&Event::Log { at_ms: 0, line: "1 -> 2 -> 4 -> 8".into() }));
        assert_eq!(ctl.current(), Some(NodeId(8)));

        ctl.tick(999);
        assert_eq!(ctl.log().len(), 1);
        ctl.tick(1000);
        assert_eq!(ctl.log(), ["1 -> 2 -> 4 -> 8", "1 -> 2 -> 4"]);
        assert_eq!(ctl.tree().mark(NodeId(8)), Mark::Visited);
        assert_eq!(ctl.scene().glyph(NodeId(4)).map(|g| g.mark), Some(Mark::Current));
    }

    #[test]
    fn test_finish_demotes_last_and_notifies() {
        let mut ctl = controller();
        ctl.apply(Command::Traverse(TraversalKind::Levelorder), 0).unwrap();
        assert_eq!(ctl.pending_visuals(), 1);
        let events = ctl.tick(15_000);

        let finished: Vec<_> = events.iter().filter(|e| matches!(e, Event::Finished { .. })).collect();
        assert_eq!(finished, vec![&Event::Finished { at_ms: 15_000 }]);
        assert!(events
            .iter()
            .any(|e| matches!(e, Event::Notice(n) if n.title == "Traversal complete")));
        assert!(!ctl.is_animating());
        assert_eq!(ctl.pending_visuals(), 0);
        assert!(ctl.scene().glyphs().iter().all(|g| g.mark == Mark::Visited));
        assert_eq!(ctl.log().len(), 15);
        assert!(ctl.tick(20_000).is_empty());
    }

    #[test]
    fn test_restart_cancels_previous_run() {
        let mut ctl = controller();
        ctl.apply(Command::Traverse(TraversalKind::Preorder), 0).unwrap();
        ctl.tick(2_500);
        assert_eq!(ctl.log().len(), 3);

        ctl.apply(Command::Traverse(TraversalKind::Postorder), 2_500).unwrap();
        assert!(ctl.log().is_empty());
        assert!(ctl.scene().glyphs().iter().all(|g| g.mark == Mark::Normal));

        ctl.tick(2_500);
        assert_eq!(ctl.current(), Some(NodeId(8)));
        assert_eq!(ctl.kind(), Some(TraversalKind::Postorder));
    }

    #[test]
    fn test_clear_resets_marks_and_log() {
        let mut ctl = controller();
        ctl.apply(Command::Traverse(TraversalKind::Preorder), 0).unwrap();
        ctl.tick(1_000);
        ctl.apply(Command::Clear, 1_000).unwrap();
        assert!(ctl.log().is_empty());
        assert!(!ctl.is_animating());
        assert_eq!(ctl.tree().mark(NodeId(1)), Mark::Normal);
        assert!(ctl.tick(5_000).is_empty());
    }

    #[test]
    fn test_structural_commands_unsupported() {
        let mut ctl = controller();
        assert!(matches!(
            ctl.apply(Command::AddAtEnd, 0),
            Err(OpError::UnsupportedCommand { structure: "traversal demo", .. })
        ));
    }
}
