//! Error handling for structure operations.
//!
//! Every public operation either completes or returns one of these errors and
//! leaves the model untouched. None of them are fatal; the GUI turns them into
//! notices via [`OpError::notice`].

use thiserror::Error;

use crate::node::NodeId;

/// Errors reported by structure operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpError {
    /// Removal requested on an empty structure
    #[error("The {structure} is empty")]
    Empty { structure: &'static str },

    /// The target field was left blank
    #[error("Please enter a target node id")]
    MissingTarget,

    /// The target field did not contain an unsigned integer
    #[error("'{0}' is not a valid node id")]
    InvalidTarget(String),

    /// No node with that id exists in the structure
    #[error("Node {0} was not found")]
    TargetNotFound(NodeId),

    /// The command does not apply to this kind of structure
    #[error("{command} is not supported by the {structure}")]
    UnsupportedCommand {
        command: &'static str,
        structure: &'static str,
    },
}

/// How loudly a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// A user-facing message produced by an operation or a finished sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl OpError {
    /// Severity of the dialog this error should raise.
    pub fn severity(&self) -> Severity {
        match self {
            OpError::Empty { .. } => Severity::Info,
            _ => Severity::Warning,
        }
    }

    /// Converts the error into a notice suitable for a dialog.
    pub fn notice(&self) -> Notice {
        let title = match self {
            OpError::Empty { .. } => "Notice",
            OpError::MissingTarget | OpError::InvalidTarget(_) => "Input error",
            OpError::TargetNotFound(_) => "Not found",
            OpError::UnsupportedCommand { .. } => "Unsupported",
        };
        Notice {
            severity: self.severity(),
            title: title.to_string(),
            message: self.to_string(),
        }
    }
}

/// Result type alias for structure operations
pub type Result<T> = std::result::Result<T, OpError>;

/// Parses the free-text target field into a node id.
///
/// Surrounding whitespace is ignored. Blank input is [`OpError::MissingTarget`],
/// anything that is not an unsigned integer is [`OpError::InvalidTarget`].
pub fn parse_target(text: &str) -> Result<NodeId> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(OpError::MissingTarget);
    }
    trimmed
        .parse::<u64>()
        .map(NodeId)
        .map_err(|_| OpError::InvalidTarget(trimmed.to_string()))
}
