//! Folio portfolio GUI application
//!
//! A single-window presentational app rendered with the egui framework.
//! The page content is static configuration; the interactive layer covers:
//! - Persistent dark/light theme with a navbar toggle
//! - Scroll-spy navigation highlighting driven by the live scroll offset
//! - Click-to-scroll with an optimistic active-link override
//! - One-shot staggered reveal animations for sections and cards

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! - An asynchronous contact form backed by a background delivery thread
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - Focused state components (theme, nav, scroll, reveal, gallery)
//! - `io/` - Background mail delivery
//! - `ui/` - Panel rendering and interaction collection

use eframe::egui;
use std::path::PathBuf;

mod app;
mod io;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator};
use folio::SiteContent;
use io::MailDispatcher;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes and launches the GUI.
fn main() -> eframe::Result {
    // An optional argument points at a JSON content file replacing the
    // built-in one
    let content_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("Folio"),
        ..Default::default()
    };

    eframe::run_native(
        "Folio",
        options,
        Box::new(move |cc| Ok(Box::new(FolioApp::new(cc, content_file)))),
    )
}

/// The main portfolio application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles navigation, submission and settlement
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles page layout and rendering
struct FolioApp {
    /// Centralized application state
    state: AppState,
    /// Background contact-form delivery
    dispatcher: MailDispatcher,
}

impl FolioApp {
    /// Creates the app with the theme preference resolved from persistent
    /// storage and content loaded from the optional file argument.
    fn new(cc: &eframe::CreationContext, content_file: Option<PathBuf>) -> Self {
        let theme_mode = ThemeCoordinator::load_theme_from_storage(cc.storage);

        let content = match content_file {
            Some(path) => match SiteContent::load_from_json(&path) {
                Ok(content) => content,
                Err(err) => {
                    eprintln!("Failed to load content file: {err:#}");
                    SiteContent::builtin().clone()
                }
            },
            None => SiteContent::builtin().clone(),
        };

        Self {
            state: AppState::new(content, theme_mode),
            dispatcher: MailDispatcher::new(),
        }
    }

    /// Handles panel interactions by delegating to the coordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        match interaction {
            PanelInteraction::SectionSelected(section_id) => {
                ApplicationCoordinator::select_section(&mut self.state, &section_id, now);
            }
            PanelInteraction::MenuToggled => {
                ApplicationCoordinator::toggle_menu(&mut self.state);
            }
            PanelInteraction::ThemeToggled => {
                ApplicationCoordinator::toggle_theme(&mut self.state);
            }
            PanelInteraction::ContactFieldEdited => {
                ApplicationCoordinator::contact_field_edited(&mut self.state);
            }
            PanelInteraction::ContactSubmitRequested => {
                ApplicationCoordinator::submit_contact(&mut self.state, &mut self.dispatcher, ctx);
            }
        }
    }
}

impl eframe::App for FolioApp {
    /// Called when the app is being shut down - ensures the theme
    /// preference is saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.mode());
    }

    /// Main update loop:
    /// 1. Apply a settled background send to the form, if any
    /// 2. Apply the active theme
    /// 3. Render all panels via PanelManager
    /// 4. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_send_completion(&mut self.state, &mut self.dispatcher);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(storage) = frame.storage_mut() {
            ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.mode());
        }

        let submit_locked =
            ApplicationCoordinator::is_submit_locked(&self.state, &self.dispatcher);
        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, submit_locked)
        {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
