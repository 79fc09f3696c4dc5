use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::InlineStyle;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

pub(crate) fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node of rendered output.
///
/// Hosts walk this tree to lay out and paint; the panel builds a fresh one
/// on every render.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,
    pub class_name: String,

    // Content
    pub content: Content,

    // Visual
    pub style: InlineStyle,

    // Interaction
    pub clickable: bool,
    pub focusable: bool,
    pub tab_index: Option<i32>,
    /// Disabled elements don't act on input.
    pub disabled: bool,

    // Custom data storage (accordion position, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".to_string(),
            class_name: String::new(),
            content: Content::None,
            style: InlineStyle::default(),
            clickable: false,
            focusable: false,
            tab_index: None,
            disabled: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn div() -> Self {
        Self {
            id: generate_id("div"),
            ..Default::default()
        }
    }

    pub fn span() -> Self {
        Self {
            id: generate_id("span"),
            tag: "span".to_string(),
            ..Default::default()
        }
    }

    /// An inline text element.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            tag: "span".to_string(),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn tag_name(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_name.split_whitespace().any(|c| c == class)
    }

    // Content
    pub fn content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: Vec<Element>) -> Self {
        self.content = Content::Children(children);
        self
    }

    // Visual
    pub fn style(mut self, style: InlineStyle) -> Self {
        self.style = style;
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn tab_index(mut self, tab_index: Option<i32>) -> Self {
        self.tab_index = tab_index;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(s) => s.clone(),
            Content::Children(children) => {
                children.iter().map(Element::text_content).collect()
            }
        }
    }
}
