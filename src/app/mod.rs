//! Application-level modules for the visualizer.
//!
//! This module contains the coordinators and the centralized state.

mod app_state;
mod application_coordinator;
mod settings_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use application_coordinator::{ApplicationCoordinator, TargetedCommand};
pub use settings_coordinator::{SettingsCoordinator, PAGE_KEY, SETTINGS_KEY};
pub use theme_coordinator::ThemeCoordinator;
