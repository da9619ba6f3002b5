//! Application-level coordination and workflow management.
//!
//! Routes commands to the controller of the selected page, turns failures and
//! completion messages into notices, and advances every controller once per
//! frame.

use dsvis::error::parse_target;
use dsvis::{Command, Controller, Event, NodeId, Notice};

use crate::app::AppState;
use crate::state::Page;

/// Commands that read their target from the text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetedCommand {
    AddAfter,
    Remove,
}

impl TargetedCommand {
    fn with_target(self, target: NodeId) -> Command {
        match self {
            TargetedCommand::AddAfter => Command::AddAfter(target),
            TargetedCommand::Remove => Command::Remove(target),
        }
    }
}

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Sends `command` to the controller of the current page.
    ///
    /// Rejected commands leave the model untouched and raise a notice.
    /// Returns true if the controller accepted the command.
    pub fn run_command(state: &mut AppState, command: Command, now_ms: u64) -> bool {
        let page = state.page.current();
        let Some(controller) = state.structures.controller_mut(page) else {
            tracing::warn!(%command, page = page.label(), "page has no structure");
            return false;
        };

        match controller.apply(command, now_ms) {
            Ok(()) => {
                tracing::debug!(%command, structure = controller.name(), "command accepted");
                true
            }
            Err(err) => {
                tracing::warn!(%command, structure = controller.name(), %err, "command rejected");
                state.show_notice(err.notice());
                false
            }
        }
    }

    /// Parses the target field and sends the resulting command.
    ///
    /// The field is emptied once the command is accepted.
    pub fn run_targeted(state: &mut AppState, command: TargetedCommand, now_ms: u64) {
        match parse_target(state.page.target_text()) {
            Ok(target) => {
                if Self::run_command(state, command.with_target(target), now_ms) {
                    state.page.target_text_mut().clear();
                }
            }
            Err(err) => {
                tracing::warn!(?command, %err, "invalid target");
                state.show_notice(err.notice());
            }
        }
    }

    /// Advances every controller to `now_ms` and surfaces their notices.
    ///
    /// Returns true while anything is still animating.
    pub fn tick(state: &mut AppState, now_ms: u64) -> bool {
        let mut notices: Vec<Notice> = Vec::new();
        for controller in state.structures.iter_mut() {
            for event in controller.tick(now_ms) {
                match event {
                    Event::Notice(notice) => notices.push(notice),
                    Event::Finished { at_ms } => {
                        tracing::trace!(structure = controller.name(), at_ms, "sequence finished")
                    }
                    Event::Effect { .. } | Event::Log { .. } => {}
                }
            }
        }
        if let Some(notice) = notices.pop() {
            state.show_notice(notice);
        }
        state.structures.any_animating()
    }

    /// Switches page.
    pub fn select_page(state: &mut AppState, page: Page) {
        if state.page.current() != page {
            tracing::info!(page = page.label(), "page selected");
        }
        state.page.select(page);
    }

    /// Pushes the current settings into every controller.
    pub fn apply_settings(state: &mut AppState) {
        let config = state.settings.effective_config();
        tracing::debug!(speed = state.settings.speed(), delay_ms = config.traversal_delay_ms, "settings applied");
        state.structures.set_config(&config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsvis::Severity;

    #[test]
    fn test_blank_target_raises_warning() {
        let mut state = AppState::new();
        ApplicationCoordinator::run_targeted(&mut state, TargetedCommand::Remove, 0);
        let notice = state.notice.clone().unwrap();
        assert_eq!(notice.severity, Severity::Warning);
    }

    #[test]
    fn test_empty_removal_raises_info() {
        let mut state = AppState::new();
        ApplicationCoordinator::run_command(&mut state, Command::RemoveAtEnd, 0);
        assert_eq!(state.notice.as_ref().map(|n| n.severity), Some(Severity::Info));
    }

    #[test]
    fn test_targeted_command_reaches_list() {
        let mut state = AppState::new();
        ApplicationCoordinator::run_command(&mut state, Command::AddAtEnd, 0);
        state.page.target_text_mut().push_str(" 1 ");
        ApplicationCoordinator::run_targeted(&mut state, TargetedCommand::AddAfter, 0);
        assert!(state.notice.is_none());

        let page = state.page.current();
        let nodes = state.structures.controller(page).map(|c| c.model_nodes().len());
        assert_eq!(nodes, Some(2));
        assert_eq!(state.page.target_text(), "");
    }

    #[test]
    fn test_rejected_target_stays_in_field() {
        let mut state = AppState::new();
        state.page.target_text_mut().push_str("7");
        ApplicationCoordinator::run_targeted(&mut state, TargetedCommand::Remove, 0);
        assert!(state.notice.is_some());
        assert_eq!(state.page.target_text(), "7");
    }

    #[test]
    fn test_traversal_completion_shows_notice() {
        let mut state = AppState::new();
        ApplicationCoordinator::select_page(&mut state, Page::Traversal);
        ApplicationCoordinator::run_command(&mut state, Command::Traverse(dsvis::TraversalKind::Preorder), 0);
        assert!(ApplicationCoordinator::tick(&mut state, 0));
        assert!(!ApplicationCoordinator::tick(&mut state, 60_000));
        assert_eq!(state.notice.map(|n| n.title), Some("Traversal complete".to_string()));
    }
}
