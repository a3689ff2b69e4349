//! Reference components.
//!
//! Each component is a function from props to an [`Element`], resolving its
//! classes with a [`Resolver`](crate::Resolver):
//! - [`button`] - consumed signals, presets, escape hatch
//! - [`card`] - several scopes and a nested button
//! - [`checkbox`] - a `checked` state driven by `onChange`
//! - [`progress_bar`] - numeric data forwarded with `Presence::Defined`
//! - [`switch`] - one persistent `checked` state
//! - [`dropdown`] - hover vs click state arbitration
//! - [`spinner`] - single scope with an escape layer
//!
//! [`Element`] is a framework-neutral description of the rendered tree, so
//! call sites can be tested without a DOM.

pub mod button;
pub mod card;
pub mod checkbox;
pub mod dropdown;
pub mod progress_bar;
pub mod spinner;
pub mod switch;

pub use button::button;
pub use card::card;
pub use checkbox::checkbox;
pub use dropdown::{dropdown, DropdownEvent, Trigger};
pub use progress_bar::progress_bar;
pub use spinner::spinner;
pub use switch::switch;

use crate::resolver::Resolver;
use crate::types::{Prop, Props};

// =============================================================================
// Element
// =============================================================================

/// A rendered element.
#[derive(Debug, Clone, Default)]
pub struct Element {
    /// Tag name (`button`, `div`, ...).
    pub tag: &'static str,
    /// Resolved class string.
    pub class: String,
    /// Native attributes and handlers.
    pub attrs: Props,
    /// Renderable content (text, host children).
    pub content: Option<Prop>,
    /// Child elements.
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn attr(mut self, key: &str, value: impl Into<Prop>) -> Self {
        self.attrs.insert(key, value);
        self
    }

    pub fn attrs(mut self, attrs: Props) -> Self {
        for (key, value) in attrs.iter() {
            self.attrs.insert(key, value.clone());
        }
        self
    }

    pub fn content(mut self, content: Option<Prop>) -> Self {
        self.content = content;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&Prop> {
        self.attrs.get(key)
    }

    /// Content as text, if it is a string.
    pub fn text(&self) -> Option<&str> {
        self.content.as_ref().and_then(Prop::as_str)
    }

    /// First element with `tag`, depth first, including `self`.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        if self.tag == tag {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(tag))
    }

    /// All elements with `tag`, depth first, including `self`.
    pub fn find_all<'a>(&'a self, tag: &str, out: &mut Vec<&'a Element>) {
        if self.tag == tag {
            out.push(self);
        }
        for child in &self.children {
            child.find_all(tag, out);
        }
    }

    /// Invokes the callback attribute `key` with `arg`, if present.
    pub fn fire(&self, key: &str, arg: &Prop) {
        if let Some(handler) = self.attrs.get(key) {
            handler.call(arg);
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Collects the forwarded values named in `names` into one bag.
pub(crate) fn pick(r: &Resolver, names: &[&str]) -> Props {
    let mut out = Props::new();
    for name in names {
        if let Some(value) = r.datum(name) {
            out.insert(name, value);
        }
    }
    out
}

/// Joins a resolved class string with a caller-supplied extra class.
pub(crate) fn join_class(resolved: String, extra: Option<Prop>) -> String {
    match extra.as_ref().and_then(Prop::as_str) {
        Some(extra) if !extra.is_empty() && !resolved.is_empty() => format!("{resolved} {extra}"),
        Some(extra) if !extra.is_empty() => extra.to_string(),
        _ => resolved,
    }
}
