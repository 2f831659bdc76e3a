//! Keeps the wrapped native control in step with the widget.
//!
//! External code listens for `change` on the native control as it would
//! without the widget. The bridge is the only place that writes its value.

use pagedom::{Document, Event};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeBridge {
    native: String,
}

impl NativeBridge {
    pub fn new(native: impl Into<String>) -> Self {
        Self {
            native: native.into(),
        }
    }

    /// Current value of the control and the text of the matching option.
    /// The text is empty when no option matches.
    pub fn read_initial(&self, doc: &Document) -> (String, String) {
        let Some(select) = doc.find(&self.native) else {
            return (String::new(), String::new());
        };
        let value = select.select_value().unwrap_or_default().to_string();
        let text = select
            .options()
            .into_iter()
            .find(|o| o.option_value() == Some(value.as_str()))
            .map(|o| o.inner_text())
            .unwrap_or_default();
        (value, text)
    }

    /// Write `value` to the control and raise `change` on it.
    /// Returns how many observers were notified.
    pub fn push_value(&self, doc: &mut Document, value: &str) -> usize {
        match doc.find_mut(&self.native) {
            Some(select) => select.value = Some(value.to_string()),
            None => {
                log::warn!("native control '{}' is gone, value '{value}' not pushed", self.native);
                return 0;
            }
        }
        let stamp = doc.next_stamp();
        let notified = doc.dispatch_to(&self.native, &Event::change(self.native.clone(), stamp));
        log::debug!("pushed '{value}' to '{}' ({notified} observers)", self.native);
        notified
    }
}
