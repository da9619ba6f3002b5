//! Rendering subsystem for drawing scenes
//!
//! - Scene rendering (list rows, tree circles, arrows, pointer)
//! - Overview rendering (scaled thumbnail of the traversal tree)

pub mod overview_renderer;
pub mod scene_renderer;
