//! Collapsible panel - a disclosure container with animated height.
//!
//! A [`Collapsible`] renders a clickable trigger, an optional non-clickable
//! sibling, and a content region whose inline `height`, `overflow` and
//! `transition` follow the panel's state. Height cannot be animated to or
//! from `auto`, so both directions run in two steps:
//!
//! - **Opening**: activation marks the panel as transitioning; the next
//!   [`Collapsible::commit`] measures the content and sets that height. When
//!   the animation ends the height switches to `auto`.
//! - **Closing**: activation pins the current measured height; the next
//!   commit schedules a collapse to zero [`CLOSE_SETTLE_DELAY`] later, fired
//!   from [`Collapsible::tick`].
//!
//! # Host loop
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use collapsible::animation::HeightAnimator;
//! use collapsible::{Collapsible, Element, Event, FixedHeight, Height, PanelConfig};
//!
//! let mut panel = Collapsible::new(PanelConfig::new("Details").id("details"));
//! let mut animator = HeightAnimator::new();
//! let content = FixedHeight(3);
//! let mut now = Instant::now();
//!
//! // One frame: tick, render, paint, commit, deliver finished transitions.
//! let frame = |panel: &mut Collapsible, animator: &mut HeightAnimator, now: Instant| {
//!     panel.tick(now);
//!     let root = panel.render(vec![Element::text("Hidden content")]);
//!     animator.update(&root, now);
//!     panel.commit(&content, now);
//!     for event in animator.finished(now) {
//!         panel.handle_event(&event, &content);
//!     }
//! };
//!
//! frame(&mut panel, &mut animator, now);
//! panel.handle_event(&Event::click("details__trigger"), &content);
//! frame(&mut panel, &mut animator, now); // commit measures and expands
//! frame(&mut panel, &mut animator, now); // animator sees 0 -> 3
//! now += Duration::from_millis(400);
//! frame(&mut panel, &mut animator, now); // animation finished
//!
//! assert!(!panel.is_closed());
//! assert_eq!(panel.state().height, Height::Auto);
//! ```

mod callbacks;
mod config;
mod events;
mod render;
mod schedule;
mod state;

pub use callbacks::PanelCallbacks;
pub use config::{
    AccordionPosition, PanelConfig, TriggerContent, TriggerSibling, DEFAULT_TRANSITION_TIME,
};
pub use events::EventResult;
pub use render::ACCORDION_POSITION_KEY;
pub use schedule::{ScheduledTask, CLOSE_SETTLE_DELAY};
pub use state::{Collapsible, PanelState, Phase};
