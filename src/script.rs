//! Headless replay of command scripts on a virtual clock.
//!
//! Drives any [`Controller`] the way the GUI does, but advances time in fixed
//! frames instead of reading a wall clock, so a script always produces the
//! same transcript.

use std::fmt;
use thiserror::Error;

use crate::command::{Command, Event};
use crate::error::{OpError, Severity};
use crate::traits::Controller;

/// Virtual frame length.
pub const FRAME_MS: u64 = 16;

/// A script that is still animating this long after its last command is stuck.
pub const SETTLE_LIMIT_MS: u64 = 10 * 60 * 1000;

/// When each command of a script is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Wait until the controller is idle before each command
    UntilIdle,
    /// Apply command `i` at `i * gap_ms`, whether or not animations finished
    Every(u64),
}

/// One line of a transcript.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Event(Event),
    Rejected { at_ms: u64, command: Command, error: OpError },
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Event(Event::Effect { at_ms, effect }) => write!(f, "[{at_ms:>7} ms] {effect}"),
            Entry::Event(Event::Log { at_ms, line }) => write!(f, "[{at_ms:>7} ms] path {line}"),
            Entry::Event(Event::Finished { at_ms }) => write!(f, "[{at_ms:>7} ms] finished"),
            Entry::Event(Event::Notice(notice)) => {
                let level = match notice.severity {
                    Severity::Info => "info",
                    Severity::Warning => "warning",
                };
                write!(f, "{level}: {}: {}", notice.title, notice.message)
            }
            Entry::Rejected { at_ms, command, error } => {
                write!(f, "[{at_ms:>7} ms] rejected {command}: {error}")
            }
        }
    }
}

/// Everything that happened while a script ran.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    pub entries: Vec<Entry>,
    /// Virtual time when the controller became idle
    pub clock_ms: u64,
}

impl Transcript {
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Event(event) => Some(event),
            Entry::Rejected { .. } => None,
        })
    }

    pub fn rejected(&self) -> impl Iterator<Item = (&Command, &OpError)> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Rejected { command, error, .. } => Some((command, error)),
            Entry::Event(_) => None,
        })
    }

    /// Path lines in the order they were logged.
    pub fn log_lines(&self) -> Vec<&str> {
        self.events()
            .filter_map(|e| match e {
                Event::Log { line, .. } => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn finished_count(&self) -> usize {
        self.events().filter(|e| matches!(e, Event::Finished { .. })).count()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("{structure} was still animating at {clock_ms} ms")]
    NeverSettled { structure: &'static str, clock_ms: u64 },
}

/// Runs `commands` against `controller` and returns the transcript.
///
/// Rejected commands are recorded and the script carries on; the only error
/// is a controller that never settles.
pub fn run(controller: &mut dyn Controller, commands: &[Command], pacing: Pacing) -> Result<Transcript, ScriptError> {
    let mut runner = Runner { controller, transcript: Transcript::default() };

    for (i, &command) in commands.iter().enumerate() {
        match pacing {
            Pacing::UntilIdle => runner.settle()?,
            Pacing::Every(gap_ms) => runner.advance_to(i as u64 * gap_ms),
        }
        let now = runner.transcript.clock_ms;
        if let Err(error) = runner.controller.apply(command, now) {
            tracing::debug!(%command, %error, at_ms = now, "script command rejected");
            runner.transcript.entries.push(Entry::Rejected { at_ms: now, command, error });
        }
        runner.tick();
    }

    runner.settle()?;
    Ok(runner.transcript)
}

struct Runner<'a> {
    controller: &'a mut dyn Controller,
    transcript: Transcript,
}

impl Runner<'_> {
    fn tick(&mut self) {
        let events = self.controller.tick(self.transcript.clock_ms);
        self.transcript.entries.extend(events.into_iter().map(Entry::Event));
    }

    fn advance_to(&mut self, target_ms: u64) {
        while self.transcript.clock_ms < target_ms {
            self.transcript.clock_ms = (self.transcript.clock_ms + FRAME_MS).min(target_ms);
            self.tick();
        }
    }

    fn settle(&mut self) -> Result<(), ScriptError> {
        let deadline = self.transcript.clock_ms + SETTLE_LIMIT_MS;
        while self.controller.is_animating() {
            if self.transcript.clock_ms >= deadline {
                return Err(ScriptError::NeverSettled {
                    structure: self.controller.name(),
                    clock_ms: self.transcript.clock_ms,
                });
            }
            self.transcript.clock_ms += FRAME_MS;
            self.tick();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VisualizerConfig;
    use crate::controller::{ListController, TraversalController};
    use crate::linked_list::ListKind;
    use crate::node::NodeId;
    use crate::traversal::TraversalKind;

    #[test]
    fn test_until_idle_runs_commands_back_to_back() {
        let mut ctl = ListController::new(ListKind::Singly, VisualizerConfig::default());
        let script = [Command::AddAtEnd, Command::AddAtEnd, Command::Remove(NodeId(7))];
        let transcript = run(&mut ctl, &script, Pacing::UntilIdle).unwrap();

        assert_eq!(transcript.finished_count(), 2);
        let rejected: Vec<_> = transcript.rejected().collect();
        assert_eq!(rejected, vec![(&Command::Remove(NodeId(7)), &OpError::TargetNotFound(NodeId(7)))]);
        assert!(!ctl.is_animating());
    }

    #[test]
    fn test_traversal_transcript_has_every_path() {
        let mut ctl = TraversalController::new(VisualizerConfig::default());
        let transcript = run(&mut ctl, &[Command::Traverse(TraversalKind::Levelorder)], Pacing::UntilIdle).unwrap();
        let lines = transcript.log_lines();
        assert_eq!(lines.len(), 15);
        assert_eq!(lines[0], "1");
        assert_eq!(lines[14], "1 -> 3 -> 7 -> 15");
        assert_eq!(transcript.clock_ms, 15_008);
    }

    #[test]
    fn test_entry_display() {
        let entry = Entry::Rejected { at_ms: 32, command: Command::RemoveAtEnd, error: OpError::Empty { structure: "binary tree" } };
        assert_eq!(entry.to_string(), "[     32 ms] rejected remove-end: The binary tree is empty");
    }
}
