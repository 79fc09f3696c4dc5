use std::fmt;

use super::config::AccordionPosition;

type Callback = Box<dyn FnMut()>;
type ClickHandler = Box<dyn FnMut(Option<&AccordionPosition>)>;

/// Lifecycle callbacks invoked by a panel. All default to no-ops.
pub struct PanelCallbacks {
    pub(crate) on_opening: Callback,
    pub(crate) on_open: Callback,
    pub(crate) on_closing: Callback,
    pub(crate) on_close: Callback,
    /// When set, trigger activation calls this instead of toggling.
    pub(crate) handle_trigger_click: Option<ClickHandler>,
}

impl Default for PanelCallbacks {
    fn default() -> Self {
        Self {
            on_opening: Box::new(|| {}),
            on_open: Box::new(|| {}),
            on_closing: Box::new(|| {}),
            on_close: Box::new(|| {}),
            handle_trigger_click: None,
        }
    }
}

impl PanelCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called as soon as an opening starts.
    pub fn on_opening(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_opening = Box::new(f);
        self
    }

    /// Called when the opening animation has finished.
    pub fn on_open(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_open = Box::new(f);
        self
    }

    /// Called as soon as a closing starts.
    pub fn on_closing(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_closing = Box::new(f);
        self
    }

    /// Called when the closing animation has finished.
    pub fn on_close(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_close = Box::new(f);
        self
    }

    /// Take over trigger activation, e.g. from an accordion that keeps a
    /// single panel open. The handler receives the panel's
    /// `accordion_position` and is expected to drive `open` through
    /// [`Collapsible::set_config`](super::Collapsible::set_config).
    pub fn handle_trigger_click(
        mut self,
        f: impl FnMut(Option<&AccordionPosition>) + 'static,
    ) -> Self {
        self.handle_trigger_click = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for PanelCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelCallbacks")
            .field("handle_trigger_click", &self.handle_trigger_click.is_some())
            .finish_non_exhaustive()
    }
}
