use std::collections::BTreeMap;

use super::{Height, Overflow};
use crate::transitions::TransitionConfig;

/// Inline layout style attached to an element.
///
/// The typed fields cover what the panel animates; anything else a caller
/// passes through (trigger styling, for instance) lives in `extra` as raw
/// declarations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    pub height: Option<Height>,
    pub overflow: Option<Overflow>,
    /// Height transition. `Some(None)` renders `transition: none`.
    pub transition: Option<Option<TransitionConfig>>,
    pub extra: BTreeMap<String, String>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(mut self, height: Height) -> Self {
        self.height = Some(height);
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = Some(overflow);
        self
    }

    pub fn transition(mut self, transition: Option<TransitionConfig>) -> Self {
        self.transition = Some(transition);
        self
    }

    pub fn set(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(property.into(), value.into());
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.extra.get(property).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.height.is_none()
            && self.overflow.is_none()
            && self.transition.is_none()
            && self.extra.is_empty()
    }

    /// The transition value as it appears in CSS.
    pub fn transition_css(&self) -> Option<String> {
        self.transition.as_ref().map(|t| match t {
            Some(config) => config.css("height"),
            None => "none".to_string(),
        })
    }

    /// Render the declarations as a `style` attribute value.
    pub fn to_css(&self) -> String {
        let mut decls = Vec::new();
        if let Some(height) = self.height {
            decls.push(format!("height: {height}"));
        }
        if let Some(transition) = self.transition_css() {
            decls.push(format!("-webkit-transition: {transition}"));
            decls.push(format!("-ms-transition: {transition}"));
            decls.push(format!("transition: {transition}"));
        }
        if let Some(overflow) = self.overflow {
            decls.push(format!("overflow: {overflow}"));
        }
        for (property, value) in &self.extra {
            decls.push(format!("{property}: {value}"));
        }
        decls.join("; ")
    }
}
