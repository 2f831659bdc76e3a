use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::layout::Rect;
use crate::types::{Display, Edges, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// The element kinds a form page is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Button,
    Span,
    Label,
    Select,
    Option,
}

impl Tag {
    fn prefix(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Button => "button",
            Tag::Span => "span",
            Tag::Label => "label",
            Tag::Select => "select",
            Tag::Option => "option",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Markup
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub text: String,
    pub children: Vec<Element>,

    // Presentation
    pub style: Style,
    pub padding: Edges,
    /// Border box reported by layout. Not recomputed when the style changes.
    pub rect: Rect,

    /// Current value of a `select` element. `None` means "first option".
    pub value: Option<String>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.prefix()),
            tag,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            text: String::new(),
            children: Vec::new(),
            style: Style::default(),
            padding: Edges::default(),
            rect: Rect::default(),
            value: None,
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn button() -> Self {
        Self::new(Tag::Button)
    }

    pub fn span() -> Self {
        Self::new(Tag::Span)
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::new(Tag::Label).text(text)
    }

    pub fn select() -> Self {
        Self::new(Tag::Select)
    }

    /// An `option` with an explicit value attribute.
    pub fn option(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(Tag::Option).attr("value", value).text(text)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Markup

    /// Add one or more space-separated classes.
    pub fn class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    // Presentation
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(new_children);
        self
    }

    // Class list

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns true if the class was not present before.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Returns true if the class was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    /// Replace the whole class list from a space-separated string.
    pub fn set_classes(&mut self, classes: &str) {
        self.classes = classes.split_whitespace().map(str::to_string).collect();
    }

    // Attributes

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(name)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Whether this element takes part in sequential focus navigation.
    pub fn is_tabbable(&self) -> bool {
        self.get_attr("tabindex") == Some("0")
    }

    pub fn set_display(&mut self, display: Display) {
        self.style.display = display;
    }

    // Text

    /// Own text followed by the text of every descendant, in tree order.
    pub fn inner_text(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.inner_text());
        }
        out
    }

    // Form controls

    /// Value of an `option`: its `value` attribute, or its text when absent.
    pub fn option_value(&self) -> Option<&str> {
        if self.tag != Tag::Option {
            return None;
        }
        Some(self.get_attr("value").unwrap_or(self.text.as_str()))
    }

    /// Every `option` below this element, in tree order.
    pub fn options(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_tag(self, Tag::Option, &mut out);
        out
    }

    /// Current value of a `select`. Falls back to the first option, like a
    /// native control with nothing explicitly chosen.
    pub fn select_value(&self) -> Option<&str> {
        if self.tag != Tag::Select {
            return None;
        }
        match &self.value {
            Some(value) => Some(value.as_str()),
            None => self.options().first().and_then(|o| o.option_value()),
        }
    }

    /// First descendant (or self) with the given tag.
    pub fn first_of_tag(&self, tag: Tag) -> Option<&Element> {
        if self.tag == tag {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.first_of_tag(tag))
    }
}

fn collect_tag<'a>(element: &'a Element, tag: Tag, out: &mut Vec<&'a Element>) {
    for child in &element.children {
        if child.tag == tag {
            out.push(child);
        }
        collect_tag(child, tag, out);
    }
}
