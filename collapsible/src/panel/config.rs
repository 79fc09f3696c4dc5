//! Panel configuration types.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::element::{generate_id, Element};
use crate::transitions::{Easing, TransitionConfig};
use crate::types::{InlineStyle, Overflow};

/// Default open transition duration.
pub const DEFAULT_TRANSITION_TIME: Duration = Duration::from_millis(400);

/// Label shown inside the trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerContent {
    Text(String),
    Node(Element),
}

impl Default for TriggerContent {
    fn default() -> Self {
        TriggerContent::Text(String::new())
    }
}

impl From<&str> for TriggerContent {
    fn from(s: &str) -> Self {
        TriggerContent::Text(s.to_string())
    }
}

impl From<String> for TriggerContent {
    fn from(s: String) -> Self {
        TriggerContent::Text(s)
    }
}

impl From<Element> for TriggerContent {
    fn from(element: Element) -> Self {
        TriggerContent::Node(element)
    }
}

/// Non-clickable element rendered next to the trigger.
#[derive(Clone)]
pub enum TriggerSibling {
    /// Wrapped in a `span` with the `__trigger-sibling` class.
    Text(String),
    /// Rendered as-is.
    Node(Element),
    /// Built fresh on every render.
    Builder(Rc<dyn Fn() -> Element>),
}

impl TriggerSibling {
    pub fn builder(f: impl Fn() -> Element + 'static) -> Self {
        TriggerSibling::Builder(Rc::new(f))
    }
}

impl fmt::Debug for TriggerSibling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "Text({s:?})"),
            Self::Node(e) => write!(f, "Node({:?})", e.id),
            Self::Builder(_) => write!(f, "Builder(...)"),
        }
    }
}

impl From<&str> for TriggerSibling {
    fn from(s: &str) -> Self {
        TriggerSibling::Text(s.to_string())
    }
}

impl From<Element> for TriggerSibling {
    fn from(element: Element) -> Self {
        TriggerSibling::Node(element)
    }
}

/// Opaque identifier handed back to an external click handler.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccordionPosition {
    Index(usize),
    Key(String),
}

impl fmt::Display for AccordionPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccordionPosition::Index(i) => write!(f, "{i}"),
            AccordionPosition::Key(k) => f.write_str(k),
        }
    }
}

impl From<usize> for AccordionPosition {
    fn from(i: usize) -> Self {
        AccordionPosition::Index(i)
    }
}

impl From<&str> for AccordionPosition {
    fn from(s: &str) -> Self {
        AccordionPosition::Key(s.to_string())
    }
}

/// Configuration for a [`Collapsible`](super::Collapsible).
///
/// Every field has a default; use the builder methods to override.
/// Replace it on a live panel with
/// [`Collapsible::set_config`](super::Collapsible::set_config): a change of
/// `open` drives the panel like a trigger activation would.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Element id prefix for the trigger and content regions.
    pub id: String,

    // Class names
    pub class_name: String,
    pub class_name_open: String,
    pub class_name_closed: String,
    /// Base class; region classes derive from it (`<base>__trigger`, ...).
    pub class_parent_string: String,
    pub content_outer_class_name: String,
    pub content_inner_class_name: String,
    pub trigger_class_name: String,
    pub trigger_opened_class_name: String,

    /// Externally controlled open state.
    pub open: bool,

    // Animation
    pub transition_time: Duration,
    /// Falls back to `transition_time` when unset.
    pub transition_close_time: Option<Duration>,
    pub easing: Easing,
    pub overflow_when_open: Overflow,

    /// Skip rendering children until the panel first opens.
    pub lazy_render: bool,

    // Trigger
    pub trigger_disabled: bool,
    pub trigger: TriggerContent,
    pub trigger_when_open: Option<TriggerContent>,
    pub trigger_sibling: Option<TriggerSibling>,
    pub trigger_tag_name: String,
    pub tab_index: Option<i32>,
    pub trigger_style: Option<InlineStyle>,

    pub accordion_position: Option<AccordionPosition>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            id: generate_id("collapsible"),
            class_name: String::new(),
            class_name_open: String::new(),
            class_name_closed: String::new(),
            class_parent_string: "Collapsible".to_string(),
            content_outer_class_name: String::new(),
            content_inner_class_name: String::new(),
            trigger_class_name: String::new(),
            trigger_opened_class_name: String::new(),
            open: false,
            transition_time: DEFAULT_TRANSITION_TIME,
            transition_close_time: None,
            easing: Easing::Linear,
            overflow_when_open: Overflow::Hidden,
            lazy_render: false,
            trigger_disabled: false,
            trigger: TriggerContent::default(),
            trigger_when_open: None,
            trigger_sibling: None,
            trigger_tag_name: "span".to_string(),
            tab_index: None,
            trigger_style: None,
            accordion_position: None,
        }
    }
}

impl PanelConfig {
    /// Create a config with the given trigger label.
    pub fn new(trigger: impl Into<TriggerContent>) -> Self {
        Self {
            trigger: trigger.into(),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn class_name_open(mut self, class_name: impl Into<String>) -> Self {
        self.class_name_open = class_name.into();
        self
    }

    pub fn class_name_closed(mut self, class_name: impl Into<String>) -> Self {
        self.class_name_closed = class_name.into();
        self
    }

    pub fn class_parent_string(mut self, class_name: impl Into<String>) -> Self {
        self.class_parent_string = class_name.into();
        self
    }

    pub fn content_outer_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.content_outer_class_name = class_name.into();
        self
    }

    pub fn content_inner_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.content_inner_class_name = class_name.into();
        self
    }

    pub fn trigger_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.trigger_class_name = class_name.into();
        self
    }

    pub fn trigger_opened_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.trigger_opened_class_name = class_name.into();
        self
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn transition_time(mut self, duration: Duration) -> Self {
        self.transition_time = duration;
        self
    }

    pub fn transition_close_time(mut self, duration: Duration) -> Self {
        self.transition_close_time = Some(duration);
        self
    }

    pub fn easing(mut self, easing: impl Into<Easing>) -> Self {
        self.easing = easing.into();
        self
    }

    pub fn overflow_when_open(mut self, overflow: Overflow) -> Self {
        self.overflow_when_open = overflow;
        self
    }

    pub fn lazy_render(mut self, lazy: bool) -> Self {
        self.lazy_render = lazy;
        self
    }

    pub fn trigger_disabled(mut self, disabled: bool) -> Self {
        self.trigger_disabled = disabled;
        self
    }

    pub fn trigger(mut self, trigger: impl Into<TriggerContent>) -> Self {
        self.trigger = trigger.into();
        self
    }

    pub fn trigger_when_open(mut self, trigger: impl Into<TriggerContent>) -> Self {
        self.trigger_when_open = Some(trigger.into());
        self
    }

    pub fn trigger_sibling(mut self, sibling: impl Into<TriggerSibling>) -> Self {
        self.trigger_sibling = Some(sibling.into());
        self
    }

    pub fn trigger_tag_name(mut self, tag: impl Into<String>) -> Self {
        self.trigger_tag_name = tag.into();
        self
    }

    pub fn tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    pub fn trigger_style(mut self, style: InlineStyle) -> Self {
        self.trigger_style = Some(style);
        self
    }

    pub fn accordion_position(mut self, position: impl Into<AccordionPosition>) -> Self {
        self.accordion_position = Some(position.into());
        self
    }

    /// Transition used when opening.
    pub fn open_transition(&self) -> TransitionConfig {
        TransitionConfig::new(self.transition_time, self.easing.clone())
    }

    /// Transition used when closing. A zero close time counts as unset.
    pub fn close_transition(&self) -> TransitionConfig {
        let duration = self
            .transition_close_time
            .filter(|d| !d.is_zero())
            .unwrap_or(self.transition_time);
        TransitionConfig::new(duration, self.easing.clone())
    }
}
