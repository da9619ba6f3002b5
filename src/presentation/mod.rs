//! Presentation layer for visual styling and colour mapping.
//!
//! Keeps the choice of colours out of the renderers:
//! - Glyph fills per traversal mark
//! - Edge colours and notice severities

pub mod color_mapping;
