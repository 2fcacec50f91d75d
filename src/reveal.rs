//! One-shot reveal animation scheduling.
//!
//! Each registered element gets a single "enter" transition the first time
//! it crosses into the viewport. Once fired, a trigger never reverts;
//! scrolling an element back out and in again does nothing. Groups of
//! elements registered together fire with an incrementally increasing
//! delay so they cascade instead of popping in simultaneously.

use std::collections::HashMap;

/// Default extra distance (logical px) an element must be inside the
/// viewport before it counts as intersecting.
pub const DEFAULT_THRESHOLD_MARGIN: f32 = 100.0;

/// Default delay step between elements of a stagger group, in seconds.
pub const DEFAULT_STAGGER_STEP: f64 = 0.1;

/// Duration of the reveal fade ramp, in seconds.
pub const REVEAL_DURATION: f64 = 0.5;

/// Registration record for one revealable element.
#[derive(Debug, Clone)]
pub struct RevealTrigger {
    pub id: String,
    pub threshold_margin: f32,
    /// Extra delay before the visual ramp starts (stagger within a group).
    pub stagger_delay: f64,
    /// Time (seconds) at which the trigger fired, if it has.
    fired_at: Option<f64>,
}

impl RevealTrigger {
    /// Returns true once the trigger has fired. Monotone: never reverts.
    pub fn has_fired(&self) -> bool {
        self.fired_at.is_some()
    }
}

/// Schedules one-shot reveal transitions for registered elements.
#[derive(Debug, Default)]
pub struct RevealScheduler {
    triggers: HashMap<String, RevealTrigger>,
}

impl RevealScheduler {
    pub fn new() -> Self {
        Self {
            triggers: HashMap::new(),
        }
    }

    /// Registers a single element with no stagger delay.
    ///
    /// Re-registering an already known id keeps the existing trigger so a
    /// fired element stays fired across UI rebuilds.
    pub fn register(&mut self, id: impl Into<String>, threshold_margin: f32) {
        let id = id.into();
        self.triggers.entry(id.clone()).or_insert(RevealTrigger {
            id,
            threshold_margin,
            stagger_delay: 0.0,
            fired_at: None,
        });
    }

    /// Registers a group of elements with cascading delays.
    ///
    /// Delay grows with registration order: element `i` starts its ramp
    /// `i * stagger_step` seconds after the group fires.
    pub fn register_group<I, S>(&mut self, ids: I, threshold_margin: f32, stagger_step: f64)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (index, id) in ids.into_iter().enumerate() {
            let id = id.into();
            self.triggers.entry(id.clone()).or_insert(RevealTrigger {
                id,
                threshold_margin,
                stagger_delay: index as f64 * stagger_step,
                fired_at: None,
            });
        }
    }

    /// Returns the registered trigger for an element, if any.
    pub fn trigger(&self, id: &str) -> Option<&RevealTrigger> {
        self.triggers.get(id)
    }

    /// Returns the threshold margin for an element, or the default when
    /// the element is unknown.
    pub fn threshold_margin(&self, id: &str) -> f32 {
        self.triggers
            .get(id)
            .map(|t| t.threshold_margin)
            .unwrap_or(DEFAULT_THRESHOLD_MARGIN)
    }

    /// Reports an intersection observation for an element.
    ///
    /// Fires the trigger the first time `is_intersecting` is true; every
    /// later call is a no-op regardless of the flag. Returns true only on
    /// the firing call.
    ///
    /// # Arguments
    /// * `id` - Registered element id
    /// * `is_intersecting` - Whether the element is inside the viewport
    /// * `now` - Current time in seconds (monotonic within a session)
    pub fn on_intersect(&mut self, id: &str, is_intersecting: bool, now: f64) -> bool {
        match self.triggers.get_mut(id) {
            Some(trigger) if is_intersecting && trigger.fired_at.is_none() => {
                trigger.fired_at = Some(now);
                true
            }
            _ => false,
        }
    }

    /// Returns the reveal progress for an element in `0.0..=1.0`.
    ///
    /// 0.0 before the trigger fires and during the element's stagger
    /// delay, ramping linearly to 1.0 over [`REVEAL_DURATION`]. Unknown
    /// ids report 1.0 so unregistered content is never hidden.
    pub fn progress(&self, id: &str, now: f64) -> f32 {
        match self.triggers.get(id) {
            None => 1.0,
            Some(trigger) => match trigger.fired_at {
                None => 0.0,
                Some(fired_at) => {
                    let elapsed = now - fired_at - trigger.stagger_delay;
                    (elapsed / REVEAL_DURATION).clamp(0.0, 1.0) as f32
                }
            },
        }
    }

    /// Returns true while any fired element is still ramping, so the UI
    /// can keep requesting repaints until the cascade settles.
    pub fn any_animating(&self, now: f64) -> bool {
        self.triggers.values().any(|t| match t.fired_at {
            Some(fired_at) => now - fired_at < t.stagger_delay + REVEAL_DURATION,
            None => false,
        })
    }
}

/// Viewport intersection test for reveal purposes.
///
/// An element intersects once its top edge is at least `threshold_margin`
/// above the bottom of the viewport.
pub fn is_intersecting(
    element_top: f32,
    scroll_y: f32,
    viewport_height: f32,
    threshold_margin: f32,
) -> bool {
    element_top + threshold_margin <= scroll_y + viewport_height
}
