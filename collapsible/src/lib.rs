//! A collapsible disclosure panel with animated height transitions.
//!
//! The crate is headless: [`Collapsible`] renders into an [`Element`] tree
//! and reacts to [`Event`]s, while the host owns layout, painting, content
//! measurement ([`ContentMeasure`]) and the clock. [`HeightAnimator`]
//! covers the animation side of a host and reports finished transitions.

pub mod animation;
pub mod element;
pub mod error;
pub mod event;
pub mod measure;
pub mod panel;
pub mod text;
pub mod transitions;
pub mod types;

pub use animation::HeightAnimator;
pub use element::{collect_element_ids, find_element, Content, Element};
pub use error::ParseOverflowError;
pub use event::{Event, Key, Modifiers, MouseButton};
pub use measure::{ContentMeasure, FixedHeight};
pub use panel::{
    AccordionPosition, Collapsible, EventResult, PanelCallbacks, PanelConfig, PanelState, Phase,
    TriggerContent, TriggerSibling,
};
pub use transitions::{Easing, TransitionConfig};
pub use types::*;
