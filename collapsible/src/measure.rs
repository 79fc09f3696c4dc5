//! Content measurement.
//!
//! The panel never measures anything itself: opening and closing ask the
//! host for the natural height of the content region at that moment.

/// Reports the natural (unclipped) height of a panel's content.
pub trait ContentMeasure {
    fn content_height(&self) -> u16;
}

impl<F> ContentMeasure for F
where
    F: Fn() -> u16,
{
    fn content_height(&self) -> u16 {
        self()
    }
}

/// A measurement that never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedHeight(pub u16);

impl ContentMeasure for FixedHeight {
    fn content_height(&self) -> u16 {
        self.0
    }
}
