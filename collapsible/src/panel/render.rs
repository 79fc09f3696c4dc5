use super::config::{TriggerContent, TriggerSibling};
use super::Collapsible;
use crate::element::{Content, Element};
use crate::types::InlineStyle;

/// Key under which the trigger carries its accordion position.
pub const ACCORDION_POSITION_KEY: &str = "accordion-position";

/// Join the non-empty class names with single spaces.
fn class_list(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Collapsible {
    /// Build the panel's element tree around `children`.
    ///
    /// Children are dropped from the output while a lazily rendered panel
    /// has never been opened.
    pub fn render(&self, children: Vec<Element>) -> Element {
        let config = &self.config;
        let parent = config.class_parent_string.as_str();

        let root_class = class_list(&[
            parent,
            config.class_name.as_str(),
            if self.state.is_closed {
                config.class_name_closed.as_str()
            } else {
                config.class_name_open.as_str()
            },
        ]);

        let mut root = Element::div()
            .id(config.id.clone())
            .class(root_class)
            .child(self.render_trigger());

        if let Some(sibling) = self.render_sibling() {
            root = root.child(sibling);
        }

        let inner = Element::div()
            .id(format!("{}__contentInner", config.id))
            .class(class_list(&[
                format!("{parent}__contentInner").as_str(),
                config.content_inner_class_name.as_str(),
            ]));
        let inner = if self.state.renders_children(config.lazy_render) {
            inner.children(children)
        } else {
            inner
        };

        let outer = Element::div()
            .id(self.content_id())
            .class(class_list(&[
                format!("{parent}__contentOuter").as_str(),
                config.content_outer_class_name.as_str(),
            ]))
            .style(
                InlineStyle::new()
                    .height(self.state.height)
                    .transition(self.state.transition.clone())
                    .overflow(self.state.overflow),
            )
            .child(inner);

        root.child(outer)
    }

    fn render_trigger(&self) -> Element {
        let config = &self.config;
        let parent = config.class_parent_string.as_str();
        let is_closed = self.state.is_closed;

        let label = match (&config.trigger_when_open, is_closed) {
            (Some(when_open), false) => when_open,
            _ => &config.trigger,
        };

        let class = class_list(&[
            format!("{parent}__trigger").as_str(),
            if is_closed { "is-closed" } else { "is-open" },
            if config.trigger_disabled {
                "is-disabled"
            } else {
                ""
            },
            if is_closed {
                config.trigger_class_name.as_str()
            } else {
                config.trigger_opened_class_name.as_str()
            },
        ]);

        let content = match label {
            TriggerContent::Text(text) => Content::Text(text.clone()),
            TriggerContent::Node(element) => Content::Children(vec![element.clone()]),
        };

        let mut trigger = Element::tag_name(config.trigger_tag_name.clone())
            .id(self.trigger_id())
            .class(class)
            .content(content)
            .style(config.trigger_style.clone().unwrap_or_default())
            .clickable(true)
            .focusable(true)
            .tab_index(config.tab_index)
            .disabled(config.trigger_disabled);

        if let Some(position) = &config.accordion_position {
            trigger = trigger.data(ACCORDION_POSITION_KEY, position.to_string());
        }

        trigger
    }

    fn render_sibling(&self) -> Option<Element> {
        let sibling = match self.config.trigger_sibling.as_ref()? {
            TriggerSibling::Text(text) if text.is_empty() => return None,
            TriggerSibling::Text(text) => Element::text(text.clone()).class(format!(
                "{}__trigger-sibling",
                self.config.class_parent_string
            )),
            TriggerSibling::Node(element) => element.clone(),
            TriggerSibling::Builder(build) => build(),
        };
        Some(sibling)
    }
}
