//! Navigation state: menu flag, link highlighting and smooth scrolling.
//!
//! The active link normally follows the scroll-spy, but a click overrides
//! it optimistically so the navbar responds before the smooth scroll
//! reaches the section. The override is released once the scroll
//! animation completes and the spy takes back control.

use folio::content::MOBILE_BREAKPOINT;
use folio::scrollspy::{apply_active, NavLinkDescriptor};
use folio::NavEntry;

/// Scroll offset past which the navbar switches to its "scrolled" style.
const SCROLLED_THRESHOLD: f32 = 50.0;

/// Duration of the eased scroll-to-section animation, in seconds.
const SCROLL_ANIMATION_SECS: f64 = 0.6;

/// One in-flight smooth scroll from a nav click.
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    start: f64,
}

impl ScrollAnimation {
    /// Eased offset at `now` (ease-in-out cubic between endpoints).
    pub fn offset_at(&self, now: f64) -> f32 {
        let t = ((now - self.start) / SCROLL_ANIMATION_SECS).clamp(0.0, 1.0) as f32;
        let eased = if t < 0.5 {
            4.0 * t * t * t
        } else {
            1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
        };
        self.from + (self.to - self.from) * eased
    }

    pub fn is_complete(&self, now: f64) -> bool {
        now - self.start >= SCROLL_ANIMATION_SECS
    }
}

/// State owned by the navigation controller.
#[derive(Debug, Clone, Default)]
pub struct NavState {
    links: Vec<NavLinkDescriptor>,
    menu_open: bool,
    scrolled: bool,
    active_override: Option<String>,
    animation: Option<ScrollAnimation>,
}

impl NavState {
    /// Builds the link list from the configured navigation entries.
    pub fn new(entries: &[NavEntry]) -> Self {
        Self {
            links: entries
                .iter()
                .map(|e| NavLinkDescriptor::new(e.label.clone(), e.target.clone()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn links(&self) -> &[NavLinkDescriptor] {
        &self.links
    }

    // ===== Mobile menu =====

    /// Flips the open/closed state. No other side effects.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    // ===== Navbar restyle on scroll =====

    pub fn update_scrolled(&mut self, scroll_y: f32) {
        self.scrolled = scroll_y > SCROLLED_THRESHOLD;
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    // ===== Click-to-scroll =====

    /// Handles a navigation click on `section_id`.
    ///
    /// The link highlight moves immediately (before the scroll reaches the
    /// section), then a smooth scroll animation starts toward
    /// `target_offset`. Below the mobile breakpoint the menu closes too.
    pub fn select_section(
        &mut self,
        section_id: &str,
        current_offset: f32,
        target_offset: f32,
        now: f64,
        viewport_width: f32,
    ) {
        self.active_override = Some(section_id.to_string());
        apply_active(&mut self.links, Some(section_id));

        self.animation = Some(ScrollAnimation {
            from: current_offset,
            to: target_offset.max(0.0),
            start: now,
        });

        if viewport_width < MOBILE_BREAKPOINT {
            self.close_menu();
        }
    }

    /// Returns the controlled scroll offset while an animation is running.
    pub fn animated_offset(&self, now: f64) -> Option<f32> {
        self.animation.map(|a| a.offset_at(now))
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Reconciles the highlight with the scroll-spy result.
    ///
    /// While a click override is pending the computed value is ignored;
    /// once the animation completes the spy drives the highlight again.
    pub fn sync_active(&mut self, computed: Option<&str>, now: f64) {
        if let Some(animation) = self.animation {
            if animation.is_complete(now) {
                self.animation = None;
                self.active_override = None;
            }
        }

        if self.active_override.is_none() {
            apply_active(&mut self.links, computed);
        }
    }

    #[cfg(test)]
    fn active_target(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.is_active)
            .map(|l| l.target.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<NavEntry> {
        [("Home", "home"), ("About", "about"), ("Contact", "contact")]
            .iter()
            .map(|(label, target)| NavEntry {
                label: label.to_string(),
                target: target.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_toggle_menu_flips_only_the_flag() {
        let mut nav = NavState::new(&entries());
        assert!(!nav.is_menu_open());
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        assert!(nav.active_target().is_none());
        nav.toggle_menu();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_select_applies_active_optimistically() {
        let mut nav = NavState::new(&entries());
        nav.select_section("about", 0.0, 600.0, 1.0, 1200.0);

        // Highlight moved before any scrolling happened
        assert_eq!(nav.active_target(), Some("about"));
        assert!(nav.is_animating());

        // Scroll-spy still reports "home" mid-flight; the override wins
        nav.sync_active(Some("home"), 1.1);
        assert_eq!(nav.active_target(), Some("about"));

        // After the animation the spy takes back control
        nav.sync_active(Some("about"), 2.0);
        assert!(!nav.is_animating());
        assert_eq!(nav.active_target(), Some("about"));
        nav.sync_active(Some("contact"), 2.1);
        assert_eq!(nav.active_target(), Some("contact"));
    }

    #[test]
    fn test_select_closes_menu_only_below_breakpoint() {
        let mut nav = NavState::new(&entries());
        nav.toggle_menu();
        nav.select_section("about", 0.0, 600.0, 1.0, 1024.0);
        assert!(nav.is_menu_open());

        nav.select_section("contact", 0.0, 900.0, 1.0, 600.0);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_animation_moves_monotonically_to_target() {
        let animation = ScrollAnimation {
            from: 0.0,
            to: 600.0,
            start: 0.0,
        };

        let mut previous = animation.offset_at(0.0);
        assert_eq!(previous, 0.0);
        for step in 1..=12 {
            let now = step as f64 * 0.05;
            let offset = animation.offset_at(now);
            assert!(offset >= previous);
            previous = offset;
        }
        assert_eq!(animation.offset_at(1.0), 600.0);
        assert!(animation.is_complete(0.6));
        assert!(!animation.is_complete(0.3));
    }

    #[test]
    fn test_scrolled_flag_threshold() {
        let mut nav = NavState::new(&entries());
        nav.update_scrolled(50.0);
        assert!(!nav.is_scrolled());
        nav.update_scrolled(51.0);
        assert!(nav.is_scrolled());
    }
}
