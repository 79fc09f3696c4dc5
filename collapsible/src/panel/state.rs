//! Collapsible panel state and transitions.

use std::time::Instant;

use super::callbacks::PanelCallbacks;
use super::config::PanelConfig;
use super::schedule::{ScheduledTask, CLOSE_SETTLE_DELAY};
use crate::measure::ContentMeasure;
use crate::transitions::TransitionConfig;
use crate::types::{Height, Overflow};

/// Where a panel is in its open/close cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Visual state of a panel. Read it through [`Collapsible::state`].
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    pub is_closed: bool,
    pub height: Height,
    /// `None` renders as `transition: none`.
    pub transition: Option<TransitionConfig>,
    pub overflow: Overflow,
    /// Set by the first opening; lazy children stay rendered afterwards.
    pub has_been_opened: bool,
    pub in_transition: bool,
    /// Opening was requested; the next commit measures and expands.
    pub should_open_on_next_cycle: bool,
    /// Closing was requested; the next commit schedules the collapse to 0.
    pub should_switch_auto_on_next_cycle: bool,
}

impl PanelState {
    /// State for a freshly mounted panel.
    pub fn initial(config: &PanelConfig) -> Self {
        if config.open {
            Self {
                is_closed: false,
                height: Height::Auto,
                transition: None,
                overflow: config.overflow_when_open,
                has_been_opened: true,
                in_transition: false,
                should_open_on_next_cycle: false,
                should_switch_auto_on_next_cycle: false,
            }
        } else {
            Self {
                is_closed: true,
                height: Height::Fixed(0),
                transition: Some(config.open_transition()),
                overflow: Overflow::Hidden,
                has_been_opened: false,
                in_transition: false,
                should_open_on_next_cycle: false,
                should_switch_auto_on_next_cycle: false,
            }
        }
    }

    pub fn phase(&self) -> Phase {
        if !self.in_transition {
            return if self.is_closed {
                Phase::Closed
            } else {
                Phase::Open
            };
        }

        if self.should_open_on_next_cycle {
            Phase::Opening
        } else if self.should_switch_auto_on_next_cycle || self.is_closed {
            Phase::Closing
        } else {
            Phase::Opening
        }
    }

    /// Whether children are part of the rendered output.
    pub fn renders_children(&self, lazy_render: bool) -> bool {
        !(lazy_render && !self.has_been_opened && self.is_closed && !self.in_transition)
    }
}

/// A collapsible container with animated height transitions.
///
/// See the [module docs](super) for the host loop a panel expects.
#[derive(Debug)]
pub struct Collapsible {
    pub(super) config: PanelConfig,
    pub(super) callbacks: PanelCallbacks,
    pub(super) state: PanelState,
    /// Pending collapse to zero height.
    settle: ScheduledTask,
    /// Set whenever the rendered output would change.
    dirty: bool,
    mounted: bool,
}

impl Collapsible {
    /// Create a panel with no-op callbacks.
    pub fn new(config: PanelConfig) -> Self {
        Self::with_callbacks(config, PanelCallbacks::default())
    }

    pub fn with_callbacks(config: PanelConfig, callbacks: PanelCallbacks) -> Self {
        let state = PanelState::initial(&config);
        log::debug!(
            "[collapsible] {} mounted ({})",
            config.id,
            if state.is_closed { "closed" } else { "open" }
        );
        Self {
            config,
            callbacks,
            state,
            settle: ScheduledTask::new(),
            dirty: true,
            mounted: true,
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn is_closed(&self) -> bool {
        self.state.is_closed
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Id of the clickable trigger element.
    pub fn trigger_id(&self) -> String {
        format!("{}__trigger", self.config.id)
    }

    /// Id of the animated content region; transition-end events target it.
    pub fn content_id(&self) -> String {
        format!("{}__contentOuter", self.config.id)
    }

    /// Check if the panel needs to be rendered again.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// When the host should call [`tick`](Self::tick) next, if anything is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.settle.deadline()
    }

    // -------------------------------------------------------------------------
    // Host lifecycle
    // -------------------------------------------------------------------------

    /// Replace the configuration. A change of `open` starts the matching
    /// transition and fires `on_opening` / `on_closing`.
    pub fn set_config(&mut self, config: PanelConfig, measure: &dyn ContentMeasure) {
        let was_open = self.config.open;
        self.config = config;
        self.dirty = true;

        if was_open == self.config.open || !self.mounted {
            return;
        }

        if self.config.open {
            self.open_panel();
            (self.callbacks.on_opening)();
        } else {
            self.close_panel(measure);
            (self.callbacks.on_closing)();
        }
    }

    pub fn set_callbacks(&mut self, callbacks: PanelCallbacks) {
        self.callbacks = callbacks;
    }

    /// Post-render step. Call once after every render that was painted.
    ///
    /// Finishes a requested opening by measuring the content, and arms the
    /// collapse of a requested closing.
    pub fn commit(&mut self, measure: &dyn ContentMeasure, now: Instant) {
        if !self.mounted {
            return;
        }

        if self.state.should_open_on_next_cycle {
            self.continue_open(measure);
        }

        if self.state.should_switch_auto_on_next_cycle && !self.settle.is_scheduled() {
            self.settle.schedule(now + CLOSE_SETTLE_DELAY);
            log::trace!("[collapsible] {} collapse scheduled", self.config.id);
        }
    }

    /// Run the scheduled collapse if it is due. Returns true if state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.mounted || !self.settle.take_due(now) {
            return false;
        }
        self.settle_close();
        true
    }

    /// Completion signal for the content region's height transition.
    pub fn handle_transition_end(&mut self) {
        if !self.mounted || !self.state.in_transition {
            return;
        }

        // A newer transition is waiting for its deferred step; this signal
        // belongs to the animation it replaced.
        if self.state.should_open_on_next_cycle || self.state.should_switch_auto_on_next_cycle {
            log::trace!(
                "[collapsible] {} ignoring transition end from superseded animation",
                self.config.id
            );
            return;
        }

        if self.state.is_closed {
            self.finish_close();
        } else {
            self.finish_open();
        }
    }

    /// Tear down: cancels the scheduled collapse. Later calls are no-ops.
    pub fn unmount(&mut self) {
        self.settle.cancel();
        self.mounted = false;
        log::debug!("[collapsible] {} unmounted", self.config.id);
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    pub(super) fn open_panel(&mut self) {
        log::debug!("[collapsible] {} opening", self.config.id);
        self.settle.cancel();
        self.state.should_switch_auto_on_next_cycle = false;
        self.state.in_transition = true;
        self.state.should_open_on_next_cycle = true;
        self.dirty = true;
    }

    fn continue_open(&mut self, measure: &dyn ContentMeasure) {
        let height = measure.content_height();
        // Already at full height: no animation, so no transition end.
        let unchanged = matches!(self.state.height, Height::Auto)
            || self.state.height == Height::Fixed(height);

        log::trace!("[collapsible] {} expanding to {height}", self.config.id);
        self.state.height = Height::Fixed(height);
        self.state.transition = Some(self.config.open_transition());
        self.state.is_closed = false;
        self.state.has_been_opened = true;
        self.state.in_transition = true;
        self.state.should_open_on_next_cycle = false;
        self.dirty = true;

        if unchanged {
            self.finish_open();
        }
    }

    pub(super) fn close_panel(&mut self, measure: &dyn ContentMeasure) {
        log::debug!("[collapsible] {} closing", self.config.id);
        self.settle.cancel();
        self.state.should_open_on_next_cycle = false;
        self.state.should_switch_auto_on_next_cycle = true;
        // A panel that never expanded keeps its height.
        if !self.state.is_closed {
            self.state.height = Height::Fixed(measure.content_height());
        }
        self.state.transition = Some(self.config.close_transition());
        self.state.in_transition = true;
        self.dirty = true;
    }

    fn settle_close(&mut self) {
        let unchanged = self.state.height == Height::Fixed(0);

        log::trace!("[collapsible] {} collapsing to 0", self.config.id);
        self.state.height = Height::Fixed(0);
        self.state.overflow = Overflow::Hidden;
        self.state.is_closed = true;
        self.state.should_switch_auto_on_next_cycle = false;
        self.dirty = true;

        if unchanged {
            self.finish_close();
        }
    }

    fn finish_open(&mut self) {
        self.state.in_transition = false;
        self.state.height = Height::Auto;
        self.state.overflow = self.config.overflow_when_open;
        self.dirty = true;
        log::debug!("[collapsible] {} open", self.config.id);
        (self.callbacks.on_open)();
    }

    fn finish_close(&mut self) {
        self.state.in_transition = false;
        self.dirty = true;
        log::debug!("[collapsible] {} closed", self.config.id);
        (self.callbacks.on_close)();
    }
}
