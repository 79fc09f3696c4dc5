use std::time::{Duration, Instant};

/// Delay between the close request and the collapse to zero height.
///
/// The host must paint the measured height at least once before the panel
/// drops to zero, otherwise there is nothing to animate from.
pub const CLOSE_SETTLE_DELAY: Duration = Duration::from_millis(50);

/// Handle to the single deferred task a panel can have in flight.
///
/// Scheduling replaces any earlier task. Nothing runs on its own: the owner
/// polls [`ScheduledTask::take_due`] from its tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduledTask {
    due: Option<Instant>,
}

impl ScheduledTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Instant) {
        self.due = Some(due);
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_scheduled(&self) -> bool {
        self.due.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.due
    }

    /// Clear the task and return true if it is due at `now`.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
