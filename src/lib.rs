pub mod animation;
pub mod array_tree;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod layout;
pub mod linked_list;
pub mod node;
pub mod scene;
pub mod script;
pub mod theme;
pub mod timeline;
pub mod traits;
pub mod traversal;

// Export core traits
pub use traits::{Controller, Structure};

// Export models
pub use array_tree::ArrayTree;
pub use linked_list::{LinkedSequence, ListKind};
pub use node::{Node, NodeId};
pub use traversal::{format_path, Mark, TraversalKind, TraversalTree};

// Export controllers and the command surface
pub use command::{Command, Event, ParseCommandError};
pub use config::VisualizerConfig;
pub use controller::{ListController, TraversalController, TreeController};
pub use error::{Notice, OpError, Severity};

// Export animation primitives
pub use scene::{Glyph, Scene, SceneEffect};
pub use timeline::{Cue, Phase, Sequencer, Timeline};

// Export headless replay
pub use script::{Entry, Pacing, ScriptError, Transcript};

// Export theme support
pub use theme::{faded, hex_to_color32, Theme, ThemeColors, ThemeManager, UnknownTheme};
