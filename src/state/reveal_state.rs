//! Reveal animation state.
//!
//! Owns the one-shot reveal scheduler and runs the per-frame intersection
//! pass over the element offsets measured by the previous frame.

use folio::reveal::{is_intersecting, RevealScheduler, DEFAULT_STAGGER_STEP, DEFAULT_THRESHOLD_MARGIN};
use std::collections::HashMap;

/// State owned by the reveal animation scheduler.
#[derive(Debug, Default)]
pub struct RevealState {
    scheduler: RevealScheduler,
}

impl RevealState {
    pub fn new() -> Self {
        Self {
            scheduler: RevealScheduler::new(),
        }
    }

    /// Registers a standalone revealable element. Safe to call every
    /// frame; a fired element stays fired.
    pub fn register(&mut self, id: &str) {
        self.scheduler.register(id, DEFAULT_THRESHOLD_MARGIN);
    }

    /// Registers a cascading group of elements (registration order sets
    /// the stagger delays).
    pub fn register_group<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.scheduler
            .register_group(ids, DEFAULT_THRESHOLD_MARGIN, DEFAULT_STAGGER_STEP);
    }

    /// Runs the intersection pass for every measured element.
    ///
    /// Uses last frame's measurements; a one-frame latency is invisible at
    /// reveal granularity.
    pub fn run_intersections(
        &mut self,
        element_tops: &HashMap<String, f32>,
        scroll_y: f32,
        viewport_height: f32,
        now: f64,
    ) {
        for (id, &top) in element_tops {
            let margin = self.scheduler.threshold_margin(id);
            let intersecting = is_intersecting(top, scroll_y, viewport_height, margin);
            self.scheduler.on_intersect(id, intersecting, now);
        }
    }

    /// Reveal progress in `0.0..=1.0` for an element.
    pub fn progress(&self, id: &str, now: f64) -> f32 {
        self.scheduler.progress(id, now)
    }

    /// True while any reveal ramp is still running.
    pub fn any_animating(&self, now: f64) -> bool {
        self.scheduler.any_animating(now)
    }

    pub fn scheduler(&self) -> &RevealScheduler {
        &self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_pass_fires_visible_elements_once() {
        let mut state = RevealState::new();
        state.register("hero");
        state.register("contact");

        let mut tops = HashMap::new();
        tops.insert("hero".to_string(), 0.0);
        tops.insert("contact".to_string(), 2000.0);

        // Viewport [0, 800): only the hero is in
        state.run_intersections(&tops, 0.0, 800.0, 1.0);
        assert!(state.scheduler().trigger("hero").unwrap().has_fired());
        assert!(!state.scheduler().trigger("contact").unwrap().has_fired());

        // Scrolling down reveals the contact section; hero stays fired
        state.run_intersections(&tops, 1500.0, 800.0, 2.0);
        assert!(state.scheduler().trigger("contact").unwrap().has_fired());

        // Scrolling back up reverts nothing
        state.run_intersections(&tops, 0.0, 800.0, 3.0);
        assert!(state.scheduler().trigger("contact").unwrap().has_fired());
    }

    #[test]
    fn test_group_registration_staggers() {
        let mut state = RevealState::new();
        state.register_group(["cards/0", "cards/1"]);
        let first = state.scheduler().trigger("cards/0").unwrap();
        let second = state.scheduler().trigger("cards/1").unwrap();
        assert!(second.stagger_delay > first.stagger_delay);
    }
}
