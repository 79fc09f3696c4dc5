//! Height animation across frames.
//!
//! [`HeightAnimator`] stands in for the part of a rendering engine that
//! animates `height` changes and reports when they finish. Feed it every
//! rendered tree with [`HeightAnimator::update`], read interpolated heights
//! for painting with [`HeightAnimator::height_at`], and deliver the events
//! returned by [`HeightAnimator::finished`] back to the panels.
//!
//! Like a browser, it only animates between two concrete heights on an
//! element that carries a transition. Changes to or from `Auto` jump
//! without an animation and without a completion event.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::element::Element;
use crate::event::Event;
use crate::transitions::Easing;
use crate::types::Height;

/// A single active transition.
#[derive(Debug, Clone)]
struct ActiveTransition {
    from: u16,
    to: u16,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl ActiveTransition {
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn value_at(&self, now: Instant) -> u16 {
        lerp_u16(self.from, self.to, self.easing.apply(self.progress(now)))
    }

    fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

/// Manages height animation state across frames.
#[derive(Debug, Default)]
pub struct HeightAnimator {
    /// Previous frame's height per element.
    snapshots: HashMap<String, Height>,
    /// Currently active transitions by element id.
    active: HashMap<String, ActiveTransition>,
    /// Transitions that completed without animating, not yet reported.
    instant: Vec<String>,
    /// Reduced motion flag - when true, transitions complete instantly.
    reduced_motion: bool,
}

impl HeightAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion (accessibility).
    /// When enabled, all transitions complete on the next [`finished`](Self::finished) call.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Returns true if any transition is running or waiting to be reported.
    pub fn has_active_transitions(&self) -> bool {
        !self.active.is_empty() || !self.instant.is_empty()
    }

    /// Update animation state based on the current element tree.
    /// Detects height changes and starts, retargets or cancels transitions.
    pub fn update(&mut self, root: &Element, now: Instant) {
        self.update_element(root, now);
    }

    fn update_element(&mut self, element: &Element, now: Instant) {
        if let Some(current) = element.style.height {
            let prev = self.snapshots.insert(element.id.clone(), current);
            self.check_height(element, prev, current, now);
        }

        for child in element.content.children() {
            self.update_element(child, now);
        }
    }

    fn check_height(
        &mut self,
        element: &Element,
        prev: Option<Height>,
        current: Height,
        now: Instant,
    ) {
        let id = &element.id;

        let Height::Fixed(to) = current else {
            // Jumping to auto drops any animation in flight.
            if self.active.remove(id).is_some() {
                log::trace!("[animation] {id}: cancelled, height is auto");
            }
            return;
        };
        let Some(Height::Fixed(prev)) = prev else {
            return;
        };
        if prev == to {
            return;
        }

        let Some(Some(config)) = element.style.transition.as_ref() else {
            self.active.remove(id);
            return;
        };

        if self.reduced_motion || config.duration.is_zero() {
            self.active.remove(id);
            self.instant.push(id.clone());
            return;
        }

        // Retarget from wherever a running animation currently is.
        let from = self
            .active
            .get(id)
            .map(|existing| existing.value_at(now))
            .unwrap_or(prev);

        log::trace!(
            "[animation] {id}: {from} -> {to} over {:?} ({})",
            config.duration,
            config.easing
        );

        self.active.insert(
            id.clone(),
            ActiveTransition {
                from,
                to,
                start: now,
                duration: config.duration,
                easing: config.easing.clone(),
            },
        );
    }

    /// Current interpolated height of an element.
    /// Returns None if no transition is running for it.
    pub fn height_at(&self, element_id: &str, now: Instant) -> Option<u16> {
        self.active.get(element_id).map(|t| t.value_at(now))
    }

    /// Prune completed transitions and return one
    /// [`Event::TransitionEnd`] per finished element, ordered by id.
    pub fn finished(&mut self, now: Instant) -> Vec<Event> {
        let mut ended = std::mem::take(&mut self.instant);

        self.active.retain(|id, transition| {
            if transition.is_complete(now) {
                ended.push(id.clone());
                false
            } else {
                true
            }
        });

        ended.sort();
        ended.dedup();
        ended.into_iter().map(Event::transition_end).collect()
    }

    /// Earliest instant at which a running transition completes.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.active.values().map(|t| t.start + t.duration).min()
    }

    /// Remove transitions and snapshots for elements no longer in tree.
    pub fn cleanup(&mut self, current_ids: &HashSet<String>) {
        self.snapshots.retain(|id, _| current_ids.contains(id));
        self.active.retain(|id, _| current_ids.contains(id));
        self.instant.retain(|id| current_ids.contains(id));
    }
}

/// Linear interpolation for u16 values.
fn lerp_u16(from: u16, to: u16, t: f32) -> u16 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round() as u16
}
