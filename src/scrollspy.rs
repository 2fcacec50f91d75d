//! Scroll-spy: deriving the active navigation link from scroll position.
//!
//! The page is a single vertical stack of sections. The registry records
//! each section's measured vertical extent, and [`compute_active`] maps a
//! scroll offset to the section the reader is currently inside. The logic
//! is pure so it can be recomputed every frame without side effects; only
//! the final settled offset matters, not how many scroll events fired.

/// Stable identifier of a page section ("home", "about", ...).
pub type SectionId = String;

/// Measured vertical extent of one section, relative to the document top.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionDescriptor {
    pub id: SectionId,
    pub top_offset: f32,
    pub height: f32,
}

/// Ordered list of page sections with stable ids and vertical extents.
///
/// Built once after the first layout pass and rebuilt whenever a resize or
/// content-height change invalidates the measurements. A rebuild replaces
/// the whole list atomically; the registry is never partially updated.
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    sections: Vec<SectionDescriptor>,
    needs_rebuild: bool,
}

impl SectionRegistry {
    /// Creates an empty registry that requires an initial build.
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            needs_rebuild: true,
        }
    }

    /// Replaces the registry contents from freshly measured sections.
    ///
    /// Sections arriving out of document order are sorted by `top_offset`
    /// so the ascending-order invariant holds regardless of measurement
    /// order. Idempotent: rebuilding from the same measurements yields the
    /// same registry.
    pub fn build(&mut self, mut sections: Vec<SectionDescriptor>) {
        sections.sort_by(|a, b| a.top_offset.total_cmp(&b.top_offset));
        self.sections = sections;
        self.needs_rebuild = false;
    }

    /// Marks the registry stale after a resize or content-height change.
    ///
    /// The owner must rebuild before the next scroll computation.
    pub fn invalidate(&mut self) {
        self.needs_rebuild = true;
    }

    /// Returns true if the registry must be rebuilt before use.
    pub fn needs_rebuild(&self) -> bool {
        self.needs_rebuild
    }

    /// Returns the registered sections in ascending `top_offset` order.
    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    /// Looks up a section's descriptor by id.
    pub fn get(&self, id: &str) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Computes the active section for a scroll position.
    ///
    /// Returns the id of the last section whose `top_offset - nav_offset`
    /// is at or above the viewport top, scanning in ascending order. Above
    /// the first section's adjusted offset no section is active.
    ///
    /// # Arguments
    /// * `scroll_y` - Current vertical scroll offset
    /// * `nav_offset` - Fixed navigation-bar height allowance
    pub fn compute_active(&self, scroll_y: f32, nav_offset: f32) -> Option<&str> {
        let mut current = None;
        for section in &self.sections {
            if section.top_offset - nav_offset <= scroll_y {
                current = Some(section.id.as_str());
            } else {
                break;
            }
        }
        current
    }
}

/// One navigation link and its highlight state.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLinkDescriptor {
    pub label: String,
    pub target: SectionId,
    pub is_active: bool,
}

impl NavLinkDescriptor {
    pub fn new(label: impl Into<String>, target: impl Into<SectionId>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            is_active: false,
        }
    }
}

/// Sets exactly one link active (the one targeting `section_id`) and
/// clears all others. `None` clears every link, e.g. above the first
/// section.
pub fn apply_active(links: &mut [NavLinkDescriptor], section_id: Option<&str>) {
    for link in links.iter_mut() {
        link.is_active = section_id == Some(link.target.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_registry() -> SectionRegistry {
        let mut registry = SectionRegistry::new();
        registry.build(vec![
            SectionDescriptor { id: "home".into(), top_offset: 0.0, height: 600.0 },
            SectionDescriptor { id: "about".into(), top_offset: 600.0, height: 500.0 },
            SectionDescriptor { id: "skills".into(), top_offset: 1100.0, height: 700.0 },
            SectionDescriptor { id: "contact".into(), top_offset: 1800.0, height: 900.0 },
        ]);
        registry
    }

    #[test]
    fn test_active_at_top_is_first_section() {
        let registry = test_registry();
        assert_eq!(registry.compute_active(0.0, 100.0), Some("home"));
    }

    #[test]
    fn test_no_active_above_first_section() {
        let mut registry = SectionRegistry::new();
        registry.build(vec![SectionDescriptor {
            id: "home".into(),
            top_offset: 200.0,
            height: 600.0,
        }]);
        assert_eq!(registry.compute_active(50.0, 100.0), None);
        assert_eq!(registry.compute_active(100.0, 100.0), Some("home"));
    }

    #[test]
    fn test_last_satisfying_section_wins() {
        let registry = test_registry();
        // Inside "skills": about and skills both satisfy the predicate
        assert_eq!(registry.compute_active(1200.0, 100.0), Some("skills"));
        // Exactly at the adjusted boundary the section becomes active
        assert_eq!(registry.compute_active(1700.0, 100.0), Some("contact"));
        assert_eq!(registry.compute_active(1699.0, 100.0), Some("skills"));
    }

    #[test]
    fn test_active_is_monotone_in_scroll_position() {
        let registry = test_registry();
        let index_of = |id: Option<&str>| -> i32 {
            match id {
                None => -1,
                Some(id) => registry
                    .sections()
                    .iter()
                    .position(|s| s.id == id)
                    .map(|i| i as i32)
                    .unwrap_or(-1),
            }
        };

        let mut previous = -1;
        let mut y = 0.0;
        while y < 3000.0 {
            let current = index_of(registry.compute_active(y, 100.0));
            assert!(
                current >= previous,
                "active section went backward at scroll_y={y}"
            );
            previous = current;
            y += 7.0;
        }
    }

    #[test]
    fn test_same_offset_yields_same_result() {
        let registry = test_registry();
        // Replaying the final position is order-independent
        let a = registry.compute_active(900.0, 100.0).map(str::to_owned);
        for _ in 0..5 {
            let b = registry.compute_active(900.0, 100.0).map(str::to_owned);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_build_sorts_and_replaces_atomically() {
        let mut registry = test_registry();
        registry.build(vec![
            SectionDescriptor { id: "b".into(), top_offset: 500.0, height: 100.0 },
            SectionDescriptor { id: "a".into(), top_offset: 0.0, height: 500.0 },
        ]);
        let ids: Vec<&str> = registry.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert!(!registry.needs_rebuild());
    }

    #[test]
    fn test_invalidate_marks_stale() {
        let mut registry = test_registry();
        assert!(!registry.needs_rebuild());
        registry.invalidate();
        assert!(registry.needs_rebuild());
    }

    #[test]
    fn test_apply_active_exclusive() {
        let mut links = vec![
            NavLinkDescriptor::new("Home", "home"),
            NavLinkDescriptor::new("About", "about"),
            NavLinkDescriptor::new("Contact", "contact"),
        ];

        apply_active(&mut links, Some("about"));
        let active: Vec<&str> = links
            .iter()
            .filter(|l| l.is_active)
            .map(|l| l.target.as_str())
            .collect();
        assert_eq!(active, ["about"]);

        // Switching targets moves the single highlight
        apply_active(&mut links, Some("contact"));
        assert!(!links[1].is_active);
        assert!(links[2].is_active);

        // None clears every link
        apply_active(&mut links, None);
        assert!(links.iter().all(|l| !l.is_active));
    }
}
