//! Colour themes for the visualizer.
//!
//! Each theme pairs the usual panel colours with the roles the diagrams need:
//! node fills per traversal mark, edges, the walking pointer and the two link
//! directions of a doubly linked list.
//!
//! # Examples
//!
//! ```
//! use dsvis::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let classic = manager.get_theme("Classic").unwrap();
//! println!("pointer colour: {:?}", classic.colors.pointer);
//! ```

use egui::Color32;
use thiserror::Error;

/// Palette for panels and diagram roles
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    // Panels
    pub panel_background: Color32,
    pub canvas_background: Color32,
    pub text: Color32,
    pub text_dim: Color32,
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Nodes
    pub node_fill: Color32,
    pub node_stroke: Color32,
    pub node_text: Color32,
    pub node_current: Color32,
    pub node_visited: Color32,
    pub node_marked_text: Color32,

    // Edges and links
    pub edge: Color32,
    pub edge_active: Color32,
    pub link_forward: Color32,
    pub link_backward: Color32,
    pub pointer: Color32,

    // Notices
    pub info: Color32,
    pub warning: Color32,
}

/// A named palette
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("theme '{0}' not found")]
pub struct UnknownTheme(pub String);

/// Owns the built-in themes and tracks the selected one.
pub struct ThemeManager {
    themes: Vec<Theme>,
    current: usize,
}

impl ThemeManager {
    pub const DEFAULT_THEME: &'static str = "Classic";

    pub fn new() -> Self {
        Self {
            themes: vec![classic_theme(), dark_theme(), dracula_theme()],
            current: 0,
        }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.name == name)
    }

    /// Theme names in display order.
    pub fn list_themes(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn current_theme(&self) -> &Theme {
        &self.themes[self.current]
    }

    pub fn set_current_theme(&mut self, name: &str) -> Result<(), UnknownTheme> {
        let index = self
            .themes
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| UnknownTheme(name.to_string()))?;
        self.current = index;
        Ok(())
    }

    /// Copies a theme's panel colours into egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.canvas_background;
        visuals.faint_bg_color = colors.hover;
        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.link_forward;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.error_fg_color = colors.warning;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Light canvas with black edges, grey list nodes and blue tree nodes.
fn classic_theme() -> Theme {
    Theme {
        name: "Classic".to_string(),
        description: "Light canvas, primary colours".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(240, 240, 240),
            canvas_background: Color32::WHITE,
            text: Color32::BLACK,
            text_dim: Color32::from_rgb(110, 110, 110),
            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            border: Color32::from_rgb(160, 160, 160),

            node_fill: Color32::from_rgb(211, 211, 211),
            node_stroke: Color32::BLACK,
            node_text: Color32::BLACK,
            node_current: Color32::from_rgb(255, 220, 0),
            node_visited: Color32::from_rgb(250, 240, 150),
            node_marked_text: Color32::BLACK,

            edge: Color32::BLACK,
            edge_active: Color32::from_rgb(220, 0, 0),
            link_forward: Color32::from_rgb(0, 0, 255),
            link_backward: Color32::from_rgb(0, 160, 0),
            pointer: Color32::from_rgb(220, 0, 0),

            info: Color32::from_rgb(40, 100, 200),
            warning: Color32::from_rgb(230, 120, 20),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark panels with muted node colours".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(39, 39, 39),
            canvas_background: Color32::from_rgb(24, 24, 24),
            text: Color32::from_rgb(235, 235, 235),
            text_dim: Color32::from_rgb(160, 160, 160),
            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),

            node_fill: Color32::from_rgb(70, 78, 90),
            node_stroke: Color32::from_rgb(200, 200, 200),
            node_text: Color32::WHITE,
            node_current: Color32::from_rgb(241, 196, 15),
            node_visited: Color32::from_rgb(150, 125, 40),
            node_marked_text: Color32::BLACK,

            edge: Color32::from_rgb(190, 190, 190),
            edge_active: Color32::from_rgb(231, 76, 60),
            link_forward: Color32::from_rgb(52, 152, 219),
            link_backward: Color32::from_rgb(46, 204, 113),
            pointer: Color32::from_rgb(231, 76, 60),

            info: Color32::from_rgb(52, 152, 219),
            warning: Color32::from_rgb(243, 156, 18),
        },
    }
}

/// Dracula palette, see https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Dracula colour palette".to_string(),
        colors: ThemeColors {
            panel_background: hex_to_color32("#282a36"),
            canvas_background: hex_to_color32("#21222c"),
            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),

            node_fill: hex_to_color32("#44475a"),
            node_stroke: hex_to_color32("#f8f8f2"),
            node_text: hex_to_color32("#f8f8f2"),
            node_current: hex_to_color32("#f1fa8c"),
            node_visited: hex_to_color32("#ffb86c"),
            node_marked_text: hex_to_color32("#282a36"),

            edge: hex_to_color32("#6272a4"),
            edge_active: hex_to_color32("#ff5555"),
            link_forward: hex_to_color32("#8be9fd"),
            link_backward: hex_to_color32("#50fa7b"),
            pointer: hex_to_color32("#ff79c6"),

            info: hex_to_color32("#8be9fd"),
            warning: hex_to_color32("#ffb86c"),
        },
    }
}

/// Parses `#rrggbb`; anything else yields black.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range).and_then(|h| u8::from_str_radix(h, 16).ok()).unwrap_or(0)
    };
    if hex.len() == 6 {
        Color32::from_rgb(channel(0..2), channel(2..4), channel(4..6))
    } else {
        Color32::BLACK
    }
}

/// Scales a colour's alpha by `opacity` in `[0, 1]`.
pub fn faded(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}
