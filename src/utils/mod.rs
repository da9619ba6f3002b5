//! Utility modules for the visualizer GUI.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_memory_mb, format_ms, get_current_memory_mb};
