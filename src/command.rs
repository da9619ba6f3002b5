//! Commands accepted by controllers and events they emit while ticking.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::{parse_target, Notice};
use crate::node::NodeId;
use crate::scene::SceneEffect;
use crate::traversal::TraversalKind;

/// A user intent, as triggered by a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddAtEnd,
    RemoveAtEnd,
    AddAfter(NodeId),
    Remove(NodeId),
    Clear,
    Traverse(TraversalKind),
}

impl Command {
    /// Stable name used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddAtEnd => "add-end",
            Command::RemoveAtEnd => "remove-end",
            Command::AddAfter(_) => "add-after",
            Command::Remove(_) => "remove",
            Command::Clear => "clear",
            Command::Traverse(TraversalKind::Preorder) => "preorder",
            Command::Traverse(TraversalKind::Inorder) => "inorder",
            Command::Traverse(TraversalKind::Postorder) => "postorder",
            Command::Traverse(TraversalKind::Levelorder) => "levelorder",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::AddAfter(id) | Command::Remove(id) => write!(f, "{}:{}", self.name(), id),
            _ => f.write_str(self.name()),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("command '{command}' needs a target: {source}")]
    Target {
        command: String,
        #[source]
        source: crate::error::OpError,
    },
}

/// Parses the textual form used by the replay tool, e.g. `add-after:3`.
impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (head, arg) = match s.split_once(':') {
            Some((head, arg)) => (head, Some(arg)),
            None => (s, None),
        };
        let target = |arg: Option<&str>| {
            parse_target(arg.unwrap_or("")).map_err(|source| ParseCommandError::Target {
                command: head.to_string(),
                source,
            })
        };

        match head {
            "add-end" => Ok(Command::AddAtEnd),
            "remove-end" => Ok(Command::RemoveAtEnd),
            "add-after" => Ok(Command::AddAfter(target(arg)?)),
            "remove" => Ok(Command::Remove(target(arg)?)),
            "clear" => Ok(Command::Clear),
            "preorder" => Ok(Command::Traverse(TraversalKind::Preorder)),
            "inorder" => Ok(Command::Traverse(TraversalKind::Inorder)),
            "postorder" => Ok(Command::Traverse(TraversalKind::Postorder)),
            "levelorder" => Ok(Command::Traverse(TraversalKind::Levelorder)),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

/// Something that happened while a controller ticked.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A scheduled effect was applied to the scene
    Effect { at_ms: u64, effect: SceneEffect },
    /// A path line was appended to the traversal log
    Log { at_ms: u64, line: String },
    /// A visual sequence played to its end
    Finished { at_ms: u64 },
    /// A message the user should see
    Notice(Notice),
}
