use crate::animation::{tree_insertion, tree_removal};
use crate::array_tree::ArrayTree;
use crate::command::{Command, Event};
use crate::config::VisualizerConfig;
use crate::controller::VisualQueue;
use crate::error::{OpError, Result};
use crate::layout::tree_position;
use crate::node::{Node, NodeId};
use crate::scene::{Scene, SceneEffect};
use crate::timeline::Timeline;
use crate::traits::{Controller, Structure};

#[derive(Debug, Clone)]
enum TreeVisual {
    Grow { id: NodeId, label: String },
    Shrink { id: NodeId },
}

/// Drives the array-backed binary tree.
#[derive(Debug)]
pub struct TreeController {
    tree: ArrayTree,
    scene: Scene,
    visuals: VisualQueue<TreeVisual>,
    config: VisualizerConfig,
}

impl TreeController {
    pub fn new(config: VisualizerConfig) -> Self {
        Self {
            tree: ArrayTree::new(),
            scene: Scene::new(),
            visuals: VisualQueue::default(),
            config,
        }
    }

    pub fn tree(&self) -> &ArrayTree {
        &self.tree
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: VisualizerConfig) {
        self.config = config;
    }

    fn plan(cfg: &VisualizerConfig, scene: &Scene, visual: TreeVisual) -> Timeline<SceneEffect> {
        match visual {
            TreeVisual::Grow { id, label } => tree_insertion(scene.len(), id, label, cfg),
            TreeVisual::Shrink { id } => tree_removal(id, cfg),
        }
    }
}

impl Controller for TreeController {
    fn name(&self) -> &'static str {
        self.tree.display_name()
    }

    fn apply(&mut self, command: Command, now_ms: u64) -> Result<()> {
        match command {
            Command::AddAtEnd => {
                let id = self.tree.append_at_end("");
                let label = self.tree.nodes().last().map(|n| n.value.clone()).unwrap_or_default();
                tracing::debug!(%id, index = self.tree.len() - 1, "added tree node");
                self.visuals.push(TreeVisual::Grow { id, label }, now_ms);
            }
            Command::RemoveAtEnd => {
                let node = self.tree.remove_last()?;
                tracing::debug!(id = %node.id, "removed last tree node");
                self.visuals.push(TreeVisual::Shrink { id: node.id }, now_ms);
            }
            Command::Clear => {
                self.tree.clear();
                self.visuals.clear();
                self.scene.clear();
                tracing::debug!(at_ms = now_ms, "cleared binary tree");
            }
            Command::AddAfter(_) | Command::Remove(_) | Command::Traverse(_) => {
                return Err(OpError::UnsupportedCommand {
                    command: command.name(),
                    structure: self.tree.display_name(),
                });
            }
        }
        Ok(())
    }

    fn tick(&mut self, now_ms: u64) -> Vec<Event> {
        let cfg = &self.config;
        self.visuals.drive(
            &mut self.scene,
            now_ms,
            |scene, visual| Self::plan(cfg, scene, visual),
            |slot| tree_position(slot, cfg),
        )
    }

    fn is_animating(&self) -> bool {
        self.visuals.is_busy() || self.scene.is_moving()
    }

    fn pending_visuals(&self) -> usize {
        self.visuals.len()
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn model_nodes(&self) -> &[Node] {
        self.tree.nodes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until_idle(ctl: &mut TreeController, mut now: u64) -> u64 {
        loop {
            ctl.tick(now);
            if !ctl.is_animating() {
                return now;
            }
            now += 20;
        }
    }

    #[test]
    fn test_glyphs_sit_at_array_slots() {
        let mut ctl = TreeController::new(VisualizerConfig::default());
        for _ in 0..6 {
            ctl.apply(Command::AddAtEnd, 0).unwrap();
        }
        run_until_idle(&mut ctl, 0);

        assert_eq!(ctl.scene().len(), 6);
        for (i, glyph) in ctl.scene().glyphs().iter().enumerate() {
            assert_eq!(glyph.centre, tree_position(i, ctl.config()));
            assert_eq!(glyph.opacity, 1.0);
            assert_eq!(glyph.label, (i + 1).to_string());
        }
    }

    #[test]
    fn test_remove_last_fades_out_tail() {
        let mut ctl = TreeController::new(VisualizerConfig::default());
        ctl.apply(Command::AddAtEnd, 0).unwrap();
        ctl.apply(Command::AddAtEnd, 0).unwrap();
        let now = run_until_idle(&mut ctl, 0);

        ctl.apply(Command::RemoveAtEnd, now).unwrap();
        assert_eq!(ctl.model_nodes().len(), 1);
        ctl.tick(now + 250);
        assert!(ctl.scene().glyph(NodeId(2)).is_some_and(|g| g.ghost && g.opacity < 1.0));

        run_until_idle(&mut ctl, now + 250);
        assert!(ctl.scene().glyph(NodeId(2)).is_none());
    }

    #[test]
    fn test_targeted_commands_are_rejected() {
        let mut ctl = TreeController::new(VisualizerConfig::default());
        assert_eq!(ctl.apply(Command::RemoveAtEnd, 0), Err(OpError::Empty { structure: "binary tree" }));
        assert!(matches!(
            ctl.apply(Command::Remove(NodeId(1)), 0),
            Err(OpError::UnsupportedCommand { command: "remove", .. })
        ));
        assert!(matches!(
            ctl.apply(Command::AddAfter(NodeId(1)), 0),
            Err(OpError::UnsupportedCommand { command: "add-after", .. })
        ));
    }

    #[test]
    fn test_ids_continue_after_clear() {
        let mut ctl = TreeController::new(VisualizerConfig::default());
        ctl.apply(Command::AddAtEnd, 0).unwrap();
        ctl.apply(Command::Clear, 0).unwrap();
        ctl.apply(Command::AddAtEnd, 0).unwrap();
        assert_eq!(ctl.model_nodes()[0].id, NodeId(2));
    }
}
