//! Page orchestration and layout measurement.
//!
//! Renders the navbar and the scrollable page body, measures every
//! section's vertical extent for the registry, feeds the scroll-spy and
//! the reveal scheduler, and surfaces the interactions the coordinator
//! has to handle.

use crate::app::AppState;
use crate::ui::widgets::PageContext;
use crate::ui::{about, certificates, contact_panel, footer, hero, navbar, projects, resume, skills};
use folio::scrollspy::SectionDescriptor;

/// Scroll offset past which the back-to-top button appears.
const BACK_TO_TOP_THRESHOLD: f32 = 300.0;

/// Result of panel interactions that need to be handled by the
/// application coordinator.
pub enum PanelInteraction {
    /// A navigation link, the logo or the back-to-top button was clicked
    SectionSelected(String),
    /// The hamburger button was clicked
    MenuToggled,
    /// The theme toggle was clicked
    ThemeToggled,
    /// A contact form field changed
    ContactFieldEdited,
    /// The contact form send button was clicked
    ContactSubmitRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders the whole window for one frame.
    ///
    /// This is the main entry point for rendering, called from the
    /// eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        submit_locked: bool,
    ) -> Option<PanelInteraction> {
        let now = ctx.input(|i| i.time);
        let mut interaction: Option<PanelInteraction> = None;

        let screen = ctx.screen_rect();
        state.scroll.begin_frame(screen.width(), screen.height());

        // Top-level sections are revealable; re-registration is a no-op
        for entry in &state.content.nav_entries {
            state.reveal.register(&entry.target);
        }

        // Intersection pass over last frame's measurements
        let element_tops = state.scroll.element_tops().clone();
        state.reveal.run_intersections(
            &element_tops,
            state.scroll.scroll_y(),
            state.scroll.viewport_height(),
            now,
        );

        // Gallery autoplay tick
        let project_count = state.content.projects.len();
        let gallery_config = state.content.gallery.clone();
        state
            .gallery
            .clamp_to(&gallery_config, project_count, screen.width());
        state
            .gallery
            .maybe_advance(&gallery_config, project_count, screen.width(), now);

        // Navbar restyles once the page is scrolled away from the top
        let colors = state.theme.mode().colors();
        let navbar_fill = if state.nav.is_scrolled() {
            colors.extreme_background
        } else {
            colors.panel_background
        };
        let navbar_frame = egui::Frame::default()
            .fill(navbar_fill)
            .inner_margin(egui::Margin::symmetric(16, 10));

        egui::TopBottomPanel::top("navbar")
            .frame(navbar_frame)
            .show(ctx, |ui| {
                if let Some(navbar_interaction) = navbar::render_navbar(ui, state) {
                    interaction = Some(match navbar_interaction {
                        navbar::NavbarInteraction::SectionSelected(id) => {
                            PanelInteraction::SectionSelected(id)
                        }
                        navbar::NavbarInteraction::MenuToggled => PanelInteraction::MenuToggled,
                        navbar::NavbarInteraction::ThemeToggled => PanelInteraction::ThemeToggled,
                    });
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut scroll_area = egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .auto_shrink([false, false]);

            // A nav click drives the offset until its animation completes
            if let Some(offset) = state.nav.animated_offset(now) {
                scroll_area = scroll_area.vertical_scroll_offset(offset);
            }

            let output = scroll_area.show(ui, |ui| {
                ui.set_width(ui.available_width());
                let page = PageContext {
                    origin: ui.cursor().min.y,
                    now,
                };
                let mut sections: Vec<SectionDescriptor> = Vec::new();

                Self::measured(ui, state, &page, "home", &mut sections, |ui, state, page| {
                    hero::render(ui, state, page);
                });
                Self::measured(ui, state, &page, "about", &mut sections, |ui, state, page| {
                    about::render(ui, state, page);
                });
                Self::measured(ui, state, &page, "skills", &mut sections, |ui, state, page| {
                    skills::render(ui, state, page);
                });
                Self::measured(ui, state, &page, "projects", &mut sections, |ui, state, page| {
                    projects::render(ui, state, page);
                });
                Self::measured(
                    ui,
                    state,
                    &page,
                    "certificates",
                    &mut sections,
                    |ui, state, page| {
                        certificates::render(ui, state, page);
                    },
                );
                Self::measured(ui, state, &page, "resume", &mut sections, |ui, state, page| {
                    resume::render(ui, state, page);
                });
                let contact_interaction = Self::measured(
                    ui,
                    state,
                    &page,
                    "contact",
                    &mut sections,
                    |ui, state, page| contact_panel::render(ui, state, page, submit_locked),
                );
                if let Some(contact_interaction) = contact_interaction {
                    interaction = Some(match contact_interaction {
                        contact_panel::ContactInteraction::FieldEdited => {
                            PanelInteraction::ContactFieldEdited
                        }
                        contact_panel::ContactInteraction::SubmitRequested => {
                            PanelInteraction::ContactSubmitRequested
                        }
                    });
                }

                footer::render(ui, state);

                let content_height = ui.cursor().min.y - page.origin;
                (sections, content_height)
            });

            let (sections, content_height) = output.inner;
            state.scroll.apply_measurements(sections, content_height);
            state.scroll.set_scroll(output.state.offset.y);
        });

        // Scroll-spy: recomputed once per frame from the settled offset
        state.nav.update_scrolled(state.scroll.scroll_y());
        let computed = state.scroll.compute_active().map(str::to_owned);
        state.nav.sync_active(computed.as_deref(), now);

        // Back-to-top overlay
        if state.scroll.scroll_y() > BACK_TO_TOP_THRESHOLD {
            egui::Area::new(egui::Id::new("back_to_top"))
                .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
                .show(ctx, |ui| {
                    let button =
                        egui::Button::new(egui::RichText::new("⬆").size(18.0)).corner_radius(16.0);
                    if ui.add(button).clicked() {
                        interaction = Some(PanelInteraction::SectionSelected("home".to_string()));
                    }
                });
        }

        // Keep frames coming: continuously while something animates,
        // otherwise at the autoplay cadence
        if state.nav.is_animating() || state.reveal.any_animating(now) {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }

        interaction
    }

    /// Renders one section and records its measured vertical extent.
    fn measured<R>(
        ui: &mut egui::Ui,
        state: &mut AppState,
        page: &PageContext,
        id: &str,
        sections: &mut Vec<SectionDescriptor>,
        render: impl FnOnce(&mut egui::Ui, &mut AppState, &PageContext) -> R,
    ) -> R {
        let top = ui.cursor().min.y - page.origin;
        let result = render(ui, state, page);
        let height = ui.cursor().min.y - page.origin - top;
        sections.push(SectionDescriptor {
            id: id.to_string(),
            top_offset: top,
            height,
        });
        result
    }
}
