//! Scroll and layout measurement state.
//!
//! Owns the section registry, the live scroll offset and the per-frame
//! element measurements. The registry is rebuilt, never patched: a resize
//! or content-height change invalidates it and the next frame's
//! measurements replace it atomically before any scroll computation uses
//! it.

use folio::content::NAV_OFFSET;
use folio::scrollspy::{SectionDescriptor, SectionRegistry};
use std::collections::HashMap;

/// Tolerance for treating layout sizes as unchanged between frames.
const LAYOUT_EPSILON: f32 = 0.5;

/// State related to scrolling and measured page layout.
#[derive(Debug, Default)]
pub struct ScrollState {
    registry: SectionRegistry,
    scroll_y: f32,
    viewport_width: f32,
    viewport_height: f32,
    content_height: f32,
    /// Vertical offsets of revealable elements measured last frame.
    element_tops: HashMap<String, f32>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            registry: SectionRegistry::new(),
            ..Self::default()
        }
    }

    // ===== Frame lifecycle =====

    /// Records the viewport size for this frame, invalidating the
    /// registry when the size changed.
    pub fn begin_frame(&mut self, viewport_width: f32, viewport_height: f32) {
        if (viewport_width - self.viewport_width).abs() > LAYOUT_EPSILON
            || (viewport_height - self.viewport_height).abs() > LAYOUT_EPSILON
        {
            self.registry.invalidate();
        }
        self.viewport_width = viewport_width;
        self.viewport_height = viewport_height;
    }

    /// Applies this frame's section measurements.
    ///
    /// A content-height change (e.g. the mobile menu reflowing the page)
    /// also invalidates; a stale registry is rebuilt wholesale from the
    /// measurements before the next scroll computation reads it.
    pub fn apply_measurements(&mut self, sections: Vec<SectionDescriptor>, content_height: f32) {
        if (content_height - self.content_height).abs() > LAYOUT_EPSILON {
            self.content_height = content_height;
            self.registry.invalidate();
        }
        if self.registry.needs_rebuild() {
            self.registry.build(sections);
        }
    }

    /// Stores the settled scroll offset read back from the scroll area.
    pub fn set_scroll(&mut self, scroll_y: f32) {
        self.scroll_y = scroll_y;
    }

    // ===== Queries =====

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// The scroll-spy result for the current offset.
    pub fn compute_active(&self) -> Option<&str> {
        self.registry.compute_active(self.scroll_y, NAV_OFFSET)
    }

    /// Target scroll offset that brings a section to the top of the view.
    pub fn section_target_offset(&self, section_id: &str) -> Option<f32> {
        self.registry.get(section_id).map(|s| s.top_offset.max(0.0))
    }

    // ===== Revealable element measurements =====

    /// Records a revealable element's vertical offset during rendering.
    /// Consumed by the reveal intersection pass on the next frame.
    pub fn record_element(&mut self, id: impl Into<String>, top: f32) {
        self.element_tops.insert(id.into(), top);
    }

    pub fn element_tops(&self) -> &HashMap<String, f32> {
        &self.element_tops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionDescriptor> {
        vec![
            SectionDescriptor { id: "home".into(), top_offset: 0.0, height: 600.0 },
            SectionDescriptor { id: "about".into(), top_offset: 600.0, height: 400.0 },
        ]
    }

    #[test]
    fn test_initial_build_populates_registry() {
        let mut state = ScrollState::new();
        state.begin_frame(1200.0, 800.0);
        state.apply_measurements(sections(), 1000.0);
        assert_eq!(state.registry().sections().len(), 2);
        assert!(!state.registry().needs_rebuild());
    }

    #[test]
    fn test_measurements_ignored_while_registry_fresh() {
        let mut state = ScrollState::new();
        state.begin_frame(1200.0, 800.0);
        state.apply_measurements(sections(), 1000.0);

        // Same layout next frame: the registry is not rebuilt
        state.begin_frame(1200.0, 800.0);
        state.apply_measurements(vec![], 1000.0);
        assert_eq!(state.registry().sections().len(), 2);
    }

    #[test]
    fn test_resize_invalidates_and_rebuilds() {
        let mut state = ScrollState::new();
        state.begin_frame(1200.0, 800.0);
        state.apply_measurements(sections(), 1000.0);

        state.begin_frame(700.0, 800.0);
        assert!(state.registry().needs_rebuild());

        let narrow = vec![SectionDescriptor {
            id: "home".into(),
            top_offset: 0.0,
            height: 900.0,
        }];
        state.apply_measurements(narrow, 900.0);
        assert_eq!(state.registry().sections().len(), 1);
        assert_eq!(state.registry().get("home").unwrap().height, 900.0);
    }

    #[test]
    fn test_content_height_change_invalidates() {
        let mut state = ScrollState::new();
        state.begin_frame(1200.0, 800.0);
        state.apply_measurements(sections(), 1000.0);

        state.begin_frame(1200.0, 800.0);
        state.apply_measurements(sections(), 1400.0);
        assert_eq!(state.registry().sections().len(), 2);
        assert!(!state.registry().needs_rebuild());
    }

    #[test]
    fn test_compute_active_uses_nav_offset() {
        let mut state = ScrollState::new();
        state.begin_frame(1200.0, 800.0);
        state.apply_measurements(sections(), 1000.0);

        state.set_scroll(0.0);
        assert_eq!(state.compute_active(), Some("home"));
        state.set_scroll(550.0);
        assert_eq!(state.compute_active(), Some("about"));
    }

    #[test]
    fn test_section_target_offset() {
        let mut state = ScrollState::new();
        state.begin_frame(1200.0, 800.0);
        state.apply_measurements(sections(), 1000.0);
        assert_eq!(state.section_target_offset("about"), Some(600.0));
        assert_eq!(state.section_target_offset("missing"), None);
    }
}
