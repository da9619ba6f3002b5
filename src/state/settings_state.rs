//! Animation settings state.
//!
//! Holds the persisted [`VisualizerConfig`] plus the speed factor chosen in
//! the settings window, and derives the config the controllers should use.

use dsvis::VisualizerConfig;
use serde::{Deserialize, Serialize};

/// Persisted animation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsState {
    /// Base geometry and timing
    config: VisualizerConfig,
    /// Multiplier applied to list and tree animation durations
    speed: f32,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            config: VisualizerConfig::default(),
            speed: 1.0,
        }
    }
}

impl SettingsState {
    pub const MIN_SPEED: f32 = VisualizerConfig::MIN_SPEED;
    pub const MAX_SPEED: f32 = VisualizerConfig::MAX_SPEED;

    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// The config handed to controllers: durations scaled, values sanitized.
    pub fn effective_config(&self) -> VisualizerConfig {
        let speed = if self.speed.is_finite() {
            self.speed.clamp(Self::MIN_SPEED, Self::MAX_SPEED)
        } else {
            1.0
        };
        self.config.with_speed(speed).sanitized()
    }

    // ===== Mutations =====

    pub(crate) fn speed_mut(&mut self) -> &mut f32 {
        &mut self.speed
    }

    pub(crate) fn traversal_delay_mut(&mut self) -> &mut u64 {
        &mut self.config.traversal_delay_ms
    }

    /// Restores every setting to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
