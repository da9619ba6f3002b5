use anyhow::Result;
use dsvis::script::{self, Pacing};
use dsvis::{
    Command, Controller, Event, ListController, ListKind, Mark, NodeId, OpError, SceneEffect, Structure,
    TraversalController, TraversalKind, TreeController, VisualizerConfig,
};

fn ids(raw: &[u64]) -> Vec<NodeId> {
    raw.iter().copied().map(NodeId).collect()
}

fn model_ids(controller: &dyn Controller) -> Vec<NodeId> {
    controller.model_nodes().iter().map(|n| n.id).collect()
}

fn scene_ids(controller: &dyn Controller) -> Vec<NodeId> {
    controller.scene().glyphs().iter().map(|g| g.id).collect()
}

#[test]
fn test_singly_list_session() -> Result<()> {
    let mut list = ListController::new(ListKind::Singly, VisualizerConfig::default());
    let commands: Vec<Command> = ["add-end", "add-end", "add-end", "add-after:1", "remove:2", "remove-end"]
        .iter()
        .map(|s| s.parse())
        .collect::<Result<_, _>>()?;

    let transcript = script::run(&mut list, &commands, Pacing::UntilIdle)?;

    assert_eq!(model_ids(&list), ids(&[1, 4]));
    assert_eq!(scene_ids(&list), ids(&[1, 4]));
    assert_eq!(transcript.finished_count(), commands.len());
    assert_eq!(transcript.rejected().count(), 0);
    assert!(list.scene().pointer().is_none());
    Ok(())
}

#[test]
fn test_doubly_list_links_both_ways() -> Result<()> {
    let mut list = ListController::new(ListKind::Doubly, VisualizerConfig::default());
    script::run(&mut list, &[Command::AddAtEnd, Command::AddAtEnd, Command::AddAtEnd], Pacing::UntilIdle)?;

    let model = list.list();
    assert_eq!(model.successor(NodeId(2)).map(|n| n.id), Some(NodeId(3)));
    assert_eq!(model.predecessor(NodeId(2)).map(|n| n.id), Some(NodeId(1)));
    assert_eq!(model.predecessor(NodeId(1)), None);
    Ok(())
}

#[test]
fn test_rapid_commands_are_queued_in_order() -> Result<()> {
    let mut list = ListController::new(ListKind::Singly, VisualizerConfig::default());
    let commands = [Command::AddAtEnd, Command::AddAtEnd, Command::RemoveAtEnd, Command::AddAtEnd];
    let transcript = script::run(&mut list, &commands, Pacing::Every(10))?;

    let spawned: Vec<(u64, NodeId)> = transcript
        .events()
        .filter_map(|e| match e {
            Event::Effect { at_ms, effect: SceneEffect::Spawn { id, .. } } => Some((*at_ms, *id)),
            _ => None,
        })
        .collect();
    assert_eq!(spawned.iter().map(|(_, id)| *id).collect::<Vec<_>>(), ids(&[1, 2, 3]));
    assert!(spawned.windows(2).all(|w| w[0].0 < w[1].0));

    assert_eq!(model_ids(&list), ids(&[1, 3]));
    assert_eq!(scene_ids(&list), ids(&[1, 3]));
    Ok(())
}

#[test]
fn test_invalid_commands_are_reported_and_skipped() -> Result<()> {
    let mut tree = TreeController::new(VisualizerConfig::default());
    let commands = [Command::RemoveAtEnd, Command::AddAtEnd, Command::Remove(NodeId(1))];
    let transcript = script::run(&mut tree, &commands, Pacing::UntilIdle)?;

    let errors: Vec<&OpError> = transcript.rejected().map(|(_, e)| e).collect();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0], &OpError::Empty { structure: "binary tree" });
    assert!(matches!(errors[1], OpError::UnsupportedCommand { .. }));
    assert_eq!(tree.tree().len(), 1);
    Ok(())
}

#[test]
fn test_tree_grows_level_by_level() -> Result<()> {
    let mut tree = TreeController::new(VisualizerConfig::default());
    let commands = vec![Command::AddAtEnd; 7];
    script::run(&mut tree, &commands, Pacing::Every(50))?;

    let centres = tree.scene().centres();
    assert_eq!(centres.len(), 7);
    assert_eq!(centres[0].x, 400.0);
    assert_eq!(centres[1].y, centres[2].y);
    assert!(centres[3].y > centres[1].y);
    let children: Vec<usize> = tree.tree().child_indices(2).collect();
    assert_eq!(children, vec![5, 6]);
    Ok(())
}

#[test]
fn test_inorder_traversal_session() -> Result<()> {
    let mut cfg = VisualizerConfig::default();
    cfg.traversal_delay_ms = 100;
    let mut demo = TraversalController::new(cfg);
    let transcript = script::run(&mut demo, &[Command::Traverse(TraversalKind::Inorder)], Pacing::UntilIdle)?;

    let highlighted: Vec<NodeId> = transcript
        .events()
        .filter_map(|e| match e {
            Event::Effect { effect: SceneEffect::Highlight { id }, .. } => Some(*id),
            _ => None,
        })
        .collect();
    assert_eq!(highlighted, ids(&[8, 4, 9, 2, 10, 5, 11, 1, 12, 6, 13, 3, 14, 7, 15]));

    let lines = transcript.log_lines();
    assert_eq!(lines[0], "1 -> 2 -> 4 -> 8");
    assert_eq!(lines[7], "1");
    assert_eq!(transcript.finished_count(), 1);
    assert!(transcript
        .events()
        .any(|e| matches!(e, Event::Notice(n) if n.title == "Traversal complete")));
    assert!(demo.scene().glyphs().iter().all(|g| g.mark == Mark::Visited));
    Ok(())
}

#[test]
fn test_second_traversal_restarts_cleanly() -> Result<()> {
    let mut cfg = VisualizerConfig::default();
    cfg.traversal_delay_ms = 100;
    let mut demo = TraversalController::new(cfg);
    let commands = [Command::Traverse(TraversalKind::Preorder), Command::Traverse(TraversalKind::Postorder)];
    let transcript = script::run(&mut demo, &commands, Pacing::Every(250))?;

    // the preorder run is cut short after three highlights and never finishes
    assert_eq!(transcript.finished_count(), 1);
    assert_eq!(demo.kind(), Some(TraversalKind::Postorder));
    assert_eq!(demo.log().len(), 15);
    assert_eq!(demo.log().first().map(String::as_str), Some("1 -> 2 -> 4 -> 8"));
    assert_eq!(demo.tree().visit_order().last(), Some(&NodeId(1)));
    Ok(())
}

#[test]
fn test_ids_are_not_reused_after_clear() -> Result<()> {
    let mut list = ListController::new(ListKind::Doubly, VisualizerConfig::default());
    let commands = [Command::AddAtEnd, Command::AddAtEnd, Command::Clear, Command::AddAtEnd];
    script::run(&mut list, &commands, Pacing::UntilIdle)?;
    assert_eq!(model_ids(&list), ids(&[3]));
    Ok(())
}

#[test]
fn test_pointer_hops_match_target_position() -> Result<()> {
    for (target, expected_hops) in [(1u64, 1usize), (3, 3), (5, 5)] {
        let mut list = ListController::new(ListKind::Singly, VisualizerConfig::default());
        let mut commands = vec![Command::AddAtEnd; 5];
        commands.push(Command::Remove(NodeId(target)));
        let transcript = script::run(&mut list, &commands, Pacing::UntilIdle)?;

        let hops = transcript
            .events()
            .filter(|e| matches!(e, Event::Effect { effect: SceneEffect::MovePointer { .. }, .. }))
            .count();
        assert_eq!(hops, expected_hops, "removing node {target}");
    }
    Ok(())
}

#[test]
fn test_extreme_speed_factor_still_settles() -> Result<()> {
    let cfg = VisualizerConfig::default().with_speed(1e30).sanitized();
    assert_eq!(cfg.fade_ms, 2000);

    let mut list = ListController::new(ListKind::Doubly, cfg);
    let commands = [Command::AddAtEnd, Command::AddAtEnd, Command::Remove(NodeId(1))];
    let transcript = script::run(&mut list, &commands, Pacing::UntilIdle)?;

    assert_eq!(model_ids(&list), ids(&[2]));
    assert_eq!(scene_ids(&list), ids(&[2]));
    assert_eq!(transcript.finished_count(), 3);
    Ok(())
}
