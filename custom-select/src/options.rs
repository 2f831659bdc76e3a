//! Option model: the value/text pairs a widget chooses from.

use pagedom::Element;

/// One selectable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

/// Ordered, read-only list of options plus the value the control started at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionModel {
    options: Vec<SelectOption>,
    initial: String,
}

impl OptionModel {
    pub fn new(options: Vec<SelectOption>, initial: impl Into<String>) -> Self {
        Self {
            options,
            initial: initial.into(),
        }
    }

    /// Read the options and current value of a native `select`.
    pub fn from_native(select: &Element) -> Self {
        let options = select
            .options()
            .into_iter()
            .map(|o| SelectOption::new(o.option_value().unwrap_or_default(), o.inner_text()))
            .collect();
        Self {
            options,
            initial: select.select_value().unwrap_or_default().to_string(),
        }
    }

    /// Display text for `value`, or None if no option has that value.
    pub fn value_to_text(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.text.as_str())
    }

    pub fn position(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.position(value).is_some()
    }

    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Text of the initial value; empty when it matches no option.
    pub fn initial_text(&self) -> &str {
        self.value_to_text(&self.initial).unwrap_or_default()
    }

    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.options.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// First value that occurs more than once, if any.
    pub fn duplicate_value(&self) -> Option<&str> {
        self.options.iter().enumerate().find_map(|(i, o)| {
            self.options[..i]
                .iter()
                .any(|earlier| earlier.value == o.value)
                .then_some(o.value.as_str())
        })
    }
}
