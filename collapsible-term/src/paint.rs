//! Flattens a rendered element tree into terminal rows.
//!
//! Block elements (`div`, `h3`, ...) start a new row, consecutive inline
//! elements (`span`) share one. An element with an inline `height` shows at
//! most that many rows of its content when its overflow clips, using the
//! animator's interpolated value while a transition runs.

use std::time::Instant;

use collapsible::animation::HeightAnimator;
use collapsible::{Content, Element};

const INDENT: &str = "  ";
const INLINE_TAGS: &[&str] = &["span", "a", "b", "i", "em", "strong", "label"];

/// One painted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub text: String,
    /// Id of the clickable element a click on this row activates.
    pub target: Option<String>,
    pub disabled: bool,
}

pub struct Painter<'a> {
    animator: &'a HeightAnimator,
    now: Instant,
}

impl<'a> Painter<'a> {
    pub fn new(animator: &'a HeightAnimator, now: Instant) -> Self {
        Self { animator, now }
    }

    pub fn paint(&self, root: &Element) -> Vec<Row> {
        let mut rows = Vec::new();
        self.element(root, 0, None, &mut rows);
        rows
    }

    /// Rows an element's content takes up without clipping the element
    /// itself. Nested clipped regions still count at their current height.
    pub fn natural_height(&self, element: &Element) -> u16 {
        let mut rows = Vec::new();
        self.content(element, 0, None, &mut rows);
        u16::try_from(rows.len()).unwrap_or(u16::MAX)
    }

    fn element(&self, element: &Element, depth: usize, target: Option<&str>, rows: &mut Vec<Row>) {
        let start = rows.len();
        self.content(element, depth, target, rows);

        if let Some(limit) = self.visible_rows(element) {
            rows.truncate(start + limit);
        }
    }

    fn content(&self, element: &Element, depth: usize, target: Option<&str>, rows: &mut Vec<Row>) {
        let target = target_of(element).or(target);

        match &element.content {
            Content::None => {}
            Content::Text(text) => rows.push(Row {
                text: format!("{}{}", INDENT.repeat(depth), text),
                target: target.map(str::to_string),
                disabled: element.disabled,
            }),
            Content::Children(children) => {
                // Height-controlled regions are indented under their trigger
                let depth = if element.style.height.is_some() {
                    depth + 1
                } else {
                    depth
                };
                self.children(children, depth, target, rows);
            }
        }
    }

    fn children(&self, children: &[Element], depth: usize, target: Option<&str>, rows: &mut Vec<Row>) {
        let mut i = 0;
        while i < children.len() {
            if !is_inline(&children[i]) {
                self.element(&children[i], depth, target, rows);
                i += 1;
                continue;
            }

            let mut parts = Vec::new();
            let mut row_target = None;
            let mut disabled = false;
            while i < children.len() && is_inline(&children[i]) {
                let child = &children[i];
                let text = child.text_content();
                if !text.is_empty() {
                    parts.push(text);
                }
                if row_target.is_none() {
                    row_target = target_of(child);
                }
                disabled |= child.disabled;
                i += 1;
            }

            rows.push(Row {
                text: format!("{}{}", INDENT.repeat(depth), parts.join(" ")),
                target: row_target.or(target).map(str::to_string),
                disabled,
            });
        }
    }

    fn visible_rows(&self, element: &Element) -> Option<usize> {
        let height = element.style.height?;
        if !element.style.overflow.is_some_and(|o| o.clips()) {
            return None;
        }
        let rows = self
            .animator
            .height_at(&element.id, self.now)
            .or(height.fixed())?;
        Some(rows as usize)
    }
}

fn is_inline(element: &Element) -> bool {
    INLINE_TAGS.contains(&element.tag.as_str())
}

fn target_of(element: &Element) -> Option<&str> {
    element.clickable.then_some(element.id.as_str())
}
