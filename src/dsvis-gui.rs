//! Data Structure Visualizer GUI Application
//!
//! Interactive egui front end for the `dsvis` library. Each tab shows one
//! structure: singly and doubly linked lists, an array-backed binary tree, the
//! 15-node traversal demo, and a placeholder graph page.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - Focused state components (page, structures, settings, theme)
//! - `presentation/` - Colour mapping (separated from rendering)
//! - `rendering/` - Low-level painting of scenes and the overview
//! - `ui/` - Panel rendering and interaction results
//! - `utils/` - Formatting helpers

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;
mod presentation;
mod rendering;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator, PAGE_KEY, SETTINGS_KEY};
use state::{Page, SettingsState, ThemeState};
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes logging and launches the GUI.
fn main() -> eframe::Result {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,dsvis=debug,dsvis_gui=debug")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Data Structure Visualizer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_title("Data Structure Visualizer"),
        ..Default::default()
    };

    eframe::run_native(
        "Data Structure Visualizer",
        options,
        Box::new(|cc| Ok(Box::new(VisualizerApp::new(cc)))),
    )
}

/// The main visualizer application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` routes commands and ticks the controllers
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct VisualizerApp {
    /// Centralized application state
    state: AppState,
}

impl VisualizerApp {
    /// Creates the application with theme, settings and last page restored from storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let settings: SettingsState = SettingsCoordinator::load_setting(cc.storage, SETTINGS_KEY);
        let page: Page = SettingsCoordinator::load_setting(cc.storage, PAGE_KEY);
        tracing::debug!(theme = %theme_name, page = page.label(), speed = settings.speed(), "restored preferences");

        Self {
            state: AppState::restore(settings, ThemeState::with_theme(&theme_name), page),
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, now_ms: u64) {
        match interaction {
            PanelInteraction::PageSelected(page) => {
                ApplicationCoordinator::select_page(&mut self.state, page);
            }
            PanelInteraction::CommandRequested(command) => {
                ApplicationCoordinator::run_command(&mut self.state, command, now_ms);
            }
            PanelInteraction::TargetedCommandRequested(command) => {
                ApplicationCoordinator::run_targeted(&mut self.state, command, now_ms);
            }
            PanelInteraction::SettingsChanged => {
                ApplicationCoordinator::apply_settings(&mut self.state);
            }
            PanelInteraction::NoticeDismissed => {
                self.state.dismiss_notice();
            }
        }
    }
}

/// Logical clock in milliseconds, taken from egui's input time.
fn logical_now_ms(ctx: &egui::Context) -> u64 {
    (ctx.input(|i| i.time) * 1000.0) as u64
}

impl eframe::App for VisualizerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, SETTINGS_KEY, &self.state.settings);
        SettingsCoordinator::save_setting(storage, PAGE_KEY, &self.state.page.current());
    }

    /// Main update loop:
    /// 1. Advance every controller to the current logical time
    /// 2. Apply theme
    /// 3. Render all panels via PanelManager
    /// 4. Handle panel interactions
    /// 5. Keep repainting while something is animating
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now_ms = logical_now_ms(ctx);
        let animating = ApplicationCoordinator::tick(&mut self.state, now_ms);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction, now_ms);
            ctx.request_repaint();
        }

        if animating {
            ctx.request_repaint();
        }
    }
}
