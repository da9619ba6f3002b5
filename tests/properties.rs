use dsvis::animation::highlight_plan;
use dsvis::layout::{tree_position, tree_slot};
use dsvis::script::{self, Pacing};
use dsvis::{
    Command, Controller, Cue, LinkedSequence, ListController, ListKind, NodeId, SceneEffect, Sequencer, Structure,
    TraversalKind, TraversalTree, VisualizerConfig,
};
use proptest::prelude::*;

fn list_kind() -> impl Strategy<Value = ListKind> {
    prop_oneof![Just(ListKind::Singly), Just(ListKind::Doubly)]
}

fn list_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => Just(Command::AddAtEnd),
        2 => Just(Command::RemoveAtEnd),
        2 => (1u64..16).prop_map(|id| Command::AddAfter(NodeId(id))),
        2 => (1u64..16).prop_map(|id| Command::Remove(NodeId(id))),
        1 => Just(Command::Clear),
    ]
}

fn fast_config() -> VisualizerConfig {
    VisualizerConfig::default().with_speed(0.25)
}

proptest! {
    #[test]
    fn test_appends_keep_insertion_order(kind in list_kind(), count in 0usize..40) {
        let mut list = LinkedSequence::new(kind);
        let appended: Vec<NodeId> = (0..count).map(|_| list.append_at_end("")).collect();

        prop_assert_eq!(list.len(), count);
        prop_assert_eq!(list.ids(), appended.clone());
        prop_assert!(appended.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_remove_at_end_is_lifo(kind in list_kind(), count in 1usize..30, removals in 0usize..30) {
        let mut list = LinkedSequence::new(kind);
        let appended: Vec<NodeId> = (0..count).map(|_| list.append_at_end("")).collect();

        let removals = removals.min(count);
        for expected in appended.iter().rev().take(removals) {
            let node = list.remove_at_end().unwrap();
            prop_assert_eq!(node.id, *expected);
        }
        prop_assert_eq!(list.ids(), appended[..count - removals].to_vec());
    }

    #[test]
    fn test_remove_by_id_keeps_relative_order(count in 1usize..30, pick in any::<prop::sample::Index>()) {
        let mut list = LinkedSequence::new(ListKind::Doubly);
        let appended: Vec<NodeId> = (0..count).map(|_| list.append_at_end("")).collect();
        let victim = appended[pick.index(count)];

        let (index, node) = list.remove_by_id(victim).unwrap();
        prop_assert_eq!(node.id, victim);
        prop_assert_eq!(appended[index], victim);

        let expected: Vec<NodeId> = appended.iter().copied().filter(|&id| id != victim).collect();
        prop_assert_eq!(list.ids(), expected);
    }

    #[test]
    fn test_tree_slots_are_consistent(index in 0usize..4096) {
        let slot = tree_slot(index);
        prop_assert_eq!((1usize << slot.level) - 1 + slot.index_in_level, index);
        prop_assert!(slot.index_in_level < slot.count_in_level);

        let cfg = VisualizerConfig::default();
        let here = tree_position(index, &cfg);
        prop_assert!(here.x > 0.0 && here.x < cfg.canvas_width);
        for child in [2 * index + 1, 2 * index + 2] {
            let below = tree_position(child, &cfg);
            prop_assert_eq!(below.y, here.y + cfg.level_gap);
        }
    }

    #[test]
    fn test_highlight_plan_plays_every_step_then_finishes_once(
        count in 0usize..20,
        delay in 1u64..500,
        frames in prop::collection::vec(1u64..700, 1..200),
    ) {
        let order: Vec<NodeId> = (1..=count as u64).map(NodeId).collect();
        let mut seq = Sequencer::new();
        seq.start(highlight_plan(&order, delay), 0);

        let mut now = 0;
        let mut cues = seq.poll(now);
        for frame in frames {
            now += frame;
            cues.extend(seq.poll(now));
        }
        // make sure the clock passed the end regardless of the sampled frames
        cues.extend(seq.poll(now + count as u64 * delay));

        let highlighted: Vec<NodeId> = cues
            .iter()
            .filter_map(|c| match c {
                Cue::Step { effect: SceneEffect::Highlight { id }, .. } => Some(*id),
                _ => None,
            })
            .collect();
        prop_assert_eq!(highlighted, order);

        let finished: Vec<usize> = cues
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, Cue::Finished { .. }))
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(finished, vec![cues.len() - 1]);

        let step_times: Vec<u64> = cues
            .iter()
            .filter_map(|c| match c {
                Cue::Step { at_ms, .. } => Some(*at_ms),
                Cue::Finished { .. } => None,
            })
            .collect();
        prop_assert!(step_times.windows(2).all(|w| w[0] < w[1]));
        if let (Some(&last_step), Some(Cue::Finished { at_ms })) = (step_times.last(), cues.last()) {
            prop_assert!(last_step <= *at_ms);
        }
        prop_assert!(!seq.is_running());
    }

    #[test]
    fn test_traversals_visit_every_node_once(kind in prop::sample::select(TraversalKind::ALL.to_vec())) {
        let mut tree = TraversalTree::new();
        let mut visited = tree.run(kind).to_vec();
        visited.sort();
        let all: Vec<NodeId> = tree.ids().collect();
        prop_assert_eq!(visited, all);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_list_scene_converges_to_model(
        kind in list_kind(),
        commands in prop::collection::vec(list_command(), 1..25),
        gap in prop_oneof![Just(None), (1u64..400).prop_map(Some)],
    ) {
        let mut ctl = ListController::new(kind, fast_config());
        let pacing = gap.map_or(Pacing::UntilIdle, Pacing::Every);
        let transcript = script::run(&mut ctl, &commands, pacing).unwrap();

        let model: Vec<NodeId> = ctl.model_nodes().iter().map(|n| n.id).collect();
        let scene: Vec<NodeId> = ctl.scene().glyphs().iter().map(|g| g.id).collect();
        prop_assert_eq!(scene, model);
        prop_assert!(ctl.scene().glyphs().iter().all(|g| !g.ghost && g.opacity == 1.0));
        prop_assert!(ctl.scene().pointer().is_none());
        prop_assert!(transcript.finished_count() <= commands.len());
    }
}
