//! Interaction routing: turns page events into state machine transitions.
//!
//! Events reach a widget in two phases. The target phase runs for the widget
//! whose root contains the event target. The document phase runs for every
//! widget holding a document-level subscription, i.e. every open widget,
//! unless the target phase consumed the event.

use pagedom::{Document, Event, EventKind, Key, NavDirection};

use crate::state::CustomSelect;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was not for this handler; nothing changed.
    Ignored,
    /// Event was handled and keeps propagating.
    Handled,
    /// Event was handled and must not reach the document phase.
    Consumed,
}

impl EventResult {
    /// Combine the results of two handlers that saw the same event.
    pub fn or(self, other: EventResult) -> EventResult {
        match (self, other) {
            (EventResult::Consumed, _) | (_, EventResult::Consumed) => EventResult::Consumed,
            (EventResult::Handled, _) | (_, EventResult::Handled) => EventResult::Handled,
            _ => EventResult::Ignored,
        }
    }
}

/// Event handling for a widget.
pub trait WidgetEvents {
    /// Handle an event whose target lies inside the widget root.
    fn on_target_event(&mut self, doc: &mut Document, event: &Event) -> EventResult;

    /// Handle an event seen through the document-level subscription.
    fn on_document_event(&mut self, doc: &mut Document, event: &Event) -> EventResult;
}

impl WidgetEvents for CustomSelect {
    fn on_target_event(&mut self, doc: &mut Document, event: &Event) -> EventResult {
        let Some(target) = event.target() else {
            return EventResult::Ignored;
        };
        if !doc.contains(self.root(), target) {
            return EventResult::Ignored;
        }

        match event.kind {
            EventKind::Click => {
                if self.parts().in_toggle(doc, target) {
                    self.toggle(doc, Some(event.stamp));
                    return EventResult::Handled;
                }
                let row = self.parts().row_index(doc, target);
                match row {
                    Some(index) if self.is_open() => {
                        self.commit(doc, index);
                        EventResult::Consumed
                    }
                    _ => EventResult::Ignored,
                }
            }
            EventKind::KeyDown => {
                let Some(key) = event.key else {
                    return EventResult::Ignored;
                };

                if let Some(direction) = NavDirection::from_key(key) {
                    return match self.move_focus(doc, direction) {
                        Some(_) => EventResult::Consumed,
                        None => EventResult::Ignored,
                    };
                }

                if target == self.parts().toggle_control() && self.is_activation_key(key) {
                    // The same Enter delivered again after it opened the panel.
                    if self.is_open() && self.last_stamp() == Some(event.stamp) {
                        log::trace!("[{}] activation {:?} already handled", self.id(), event.stamp);
                        return EventResult::Ignored;
                    }
                    self.toggle(doc, Some(event.stamp));
                    return EventResult::Handled;
                }

                let row = self.parts().row_index(doc, target);
                if let (Key::Enter, Some(index), true) = (key, row, self.is_open()) {
                    self.commit(doc, index);
                    return EventResult::Consumed;
                }

                log::trace!("[{}] ignoring {key:?} on {target}", self.id());
                EventResult::Ignored
            }
            EventKind::Change => EventResult::Ignored,
        }
    }

    fn on_document_event(&mut self, doc: &mut Document, event: &Event) -> EventResult {
        if !self.is_open() {
            return EventResult::Ignored;
        }
        if self.last_stamp() == Some(event.stamp) {
            log::trace!("[{}] event {:?} opened the panel, not dismissing", self.id(), event.stamp);
            return EventResult::Ignored;
        }

        match event.kind {
            EventKind::Click => {
                let inside = event.target().is_some_and(|t| doc.contains(self.root(), t));
                if inside {
                    return EventResult::Ignored;
                }
                self.dismiss(doc);
                EventResult::Handled
            }
            EventKind::KeyDown => match event.key {
                Some(Key::Escape) => {
                    self.dismiss(doc);
                    EventResult::Handled
                }
                Some(Key::Enter) => {
                    if event.target().is_some_and(|t| self.claims_enter(doc, t)) {
                        return EventResult::Ignored;
                    }
                    self.dismiss(doc);
                    EventResult::Handled
                }
                _ => EventResult::Ignored,
            },
            EventKind::Change => EventResult::Ignored,
        }
    }
}

impl CustomSelect {
    fn is_activation_key(&self, key: Key) -> bool {
        key == Key::Enter || (key == Key::SPACE && self.space_activates())
    }

    /// Elements with their own Enter handling: the toggle control and the rows.
    fn claims_enter(&self, doc: &Document, target: &str) -> bool {
        target == self.parts().toggle_control() || self.parts().row_index(doc, target).is_some()
    }
}
