use crate::animation::{list_insertion, list_removal, pointer_walk};
use crate::command::{Command, Event};
use crate::config::VisualizerConfig;
use crate::controller::VisualQueue;
use crate::error::{OpError, Result};
use crate::layout::list_position;
use crate::linked_list::{LinkedSequence, ListKind};
use crate::node::{Node, NodeId};
use crate::scene::{Scene, SceneEffect};
use crate::timeline::Timeline;
use crate::traits::{Controller, Structure};

/// Visual work waiting for its turn.
#[derive(Debug, Clone)]
enum ListVisual {
    Append { id: NodeId, label: String },
    InsertAfter { id: NodeId, label: String, after: NodeId },
    Remove { id: NodeId },
}

/// Drives a singly or doubly linked list.
#[derive(Debug)]
pub struct ListController {
    list: LinkedSequence,
    scene: Scene,
    visuals: VisualQueue<ListVisual>,
    config: VisualizerConfig,
}

impl ListController {
    pub fn new(kind: ListKind, config: VisualizerConfig) -> Self {
        Self {
            list: LinkedSequence::new(kind),
            scene: Scene::new(),
            visuals: VisualQueue::default(),
            config,
        }
    }

    pub fn kind(&self) -> ListKind {
        self.list.kind()
    }

    pub fn list(&self) -> &LinkedSequence {
        &self.list
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Replaces the config; sequences already playing keep their timing.
    pub fn set_config(&mut self, config: VisualizerConfig) {
        self.config = config;
    }

    fn label_of(&self, id: NodeId) -> String {
        self.list
            .position(id)
            .and_then(|at| self.list.nodes().get(at))
            .map(|n| n.value.clone())
            .unwrap_or_else(|| id.to_string())
    }

    fn plan(kind: ListKind, cfg: &VisualizerConfig, scene: &Scene, visual: ListVisual) -> Timeline<SceneEffect> {
        match visual {
            ListVisual::Append { id, label } => list_insertion(kind, scene.len(), id, label, cfg),
            ListVisual::InsertAfter { id, label, after } => {
                let Some(target) = scene.index_of(after) else {
                    tracing::warn!(%after, "insert target has no glyph, appending instead");
                    return list_insertion(kind, scene.len(), id, label, cfg);
                };
                let mut timeline = pointer_walk(scene, target, kind, cfg);
                let walked = timeline.finish_ms();
                timeline.append(walked, list_insertion(kind, target + 1, id, label, cfg));
                timeline
            }
            ListVisual::Remove { id } => {
                let mut timeline = match scene.index_of(id) {
                    Some(index) => pointer_walk(scene, index, kind, cfg),
                    None => Timeline::new(),
                };
                let walked = timeline.finish_ms();
                timeline.append(walked, list_removal(kind, id, cfg));
                timeline
            }
        }
    }
}

impl Controller for ListController {
    fn name(&self) -> &'static str {
        self.list.display_name()
    }

    fn apply(&mut self, command: Command, now_ms: u64) -> Result<()> {
        match command {
            Command::AddAtEnd => {
                let id = self.list.append_at_end("");
                let label = self.label_of(id);
                tracing::debug!(%id, list = self.name(), "appended node");
                self.visuals.push(ListVisual::Append { id, label }, now_ms);
            }
            Command::RemoveAtEnd => {
                let node = self.list.remove_at_end()?;
                tracing::debug!(id = %node.id, list = self.name(), "removed tail node");
                self.visuals.push(ListVisual::Remove { id: node.id }, now_ms);
            }
            Command::AddAfter(after) => {
                let id = self.list.insert_after(after, "")?;
                let label = self.label_of(id);
                tracing::debug!(%id, %after, list = self.name(), "inserted node");
                self.visuals.push(ListVisual::InsertAfter { id, label, after }, now_ms);
            }
            Command::Remove(target) => {
                let (index, node) = self.list.remove_by_id(target)?;
                tracing::debug!(id = %node.id, index, list = self.name(), "removed node");
                self.visuals.push(ListVisual::Remove { id: node.id }, now_ms);
            }
            Command::Clear => {
                self.list.clear();
                self.visuals.clear();
                self.scene.clear();
                tracing::debug!(list = self.name(), at_ms = now_ms, "cleared");
            }
            Command::Traverse(_) => {
                return Err(OpError::UnsupportedCommand {
                    command: command.name(),
                    structure: self.list.display_name(),
                });
            }
        }
        Ok(())
    }

    fn tick(&mut self, now_ms: u64) -> Vec<Event> {
        let kind = self.list.kind();
        let cfg = &self.config;
        self.visuals.drive(
            &mut self.scene,
            now_ms,
            |scene, visual| Self::plan(kind, cfg, scene, visual),
            |slot| list_position(slot, cfg),
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
        self.list.nodes()
    }
}
