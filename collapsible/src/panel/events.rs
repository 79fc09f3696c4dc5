//! Event handling for the Collapsible panel.

use super::Collapsible;
use crate::event::Event;
use crate::measure::ContentMeasure;

/// Whether a panel acted on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

impl Collapsible {
    /// Route an event to the panel.
    ///
    /// Activations (left click, Space, Enter) must target
    /// [`trigger_id`](Self::trigger_id); transition ends must target
    /// [`content_id`](Self::content_id). Everything else is ignored.
    pub fn handle_event(&mut self, event: &Event, measure: &dyn ContentMeasure) -> EventResult {
        if !self.is_mounted() {
            return EventResult::Ignored;
        }

        match event {
            Event::TransitionEnd { target } if *target == self.content_id() => {
                self.handle_transition_end();
                EventResult::Consumed
            }
            Event::Click { .. } | Event::Key { .. }
                if event.is_activation() && event.target() == Some(self.trigger_id().as_str()) =>
            {
                self.activate(measure)
            }
            _ => EventResult::Ignored,
        }
    }

    /// Act as if the trigger was clicked.
    pub fn activate(&mut self, measure: &dyn ContentMeasure) -> EventResult {
        if self.config.trigger_disabled || !self.is_mounted() {
            log::trace!("[collapsible] {} activation ignored", self.config.id);
            return EventResult::Ignored;
        }

        if let Some(handler) = self.callbacks.handle_trigger_click.as_mut() {
            handler(self.config.accordion_position.as_ref());
            return EventResult::Consumed;
        }

        if self.state.is_closed {
            self.open_panel();
            (self.callbacks.on_opening)();
        } else {
            self.close_panel(measure);
            (self.callbacks.on_closing)();
        }
        EventResult::Consumed
    }
}
