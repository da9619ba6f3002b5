//! State management modules for the visualizer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Page state (selected tab, target id input, open windows)
//! - Structure state (one controller per structure page)
//! - Settings state (animation config and speed)
//! - Theme state (theme manager, current theme)

mod page_state;
mod settings_state;
mod structure_state;
mod theme_state;

pub use page_state::{Page, PageState};
pub use settings_state::SettingsState;
pub use structure_state::StructureState;
pub use theme_state::ThemeState;
