//! The widget state machine.
//!
//! A [`CustomSelect`] is either `Closed` or `Open`. Every change goes through
//! [`open`](CustomSelect::open), [`dismiss`](CustomSelect::dismiss) or
//! [`commit`](CustomSelect::commit), each of which keeps the markup, the
//! document-level subscription and the native control consistent with the
//! state.

use std::sync::atomic::{AtomicU64, Ordering};

use pagedom::{collect_focusable, step_focus, Document, EventKind, EventStamp, NavDirection, OwnerId, SubscriptionId};

use crate::bridge::NativeBridge;
use crate::error::WidgetError;
use crate::markup::{self, WidgetParts};
use crate::options::{OptionModel, SelectOption};
use crate::position::{compute_position, AnchorMetrics, PositionStrategy};

/// Events a widget listens for on the whole document while open.
pub const DISMISS_EVENTS: [EventKind; 2] = [EventKind::Click, EventKind::KeyDown];

/// Unique identifier for a widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }

    /// The identity this widget subscribes to the document under.
    pub fn owner(self) -> OwnerId {
        self.0
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__custom_select_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    Open,
}

/// Everything needed to build one widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub options: Vec<SelectOption>,
    pub initial_value: String,
    pub label_text: Option<String>,
    /// With exactly two options, only the non-selected one is shown.
    pub two_option_toggle: bool,
    /// Space toggles the panel as well as Enter.
    pub space_activates: bool,
}

impl WidgetConfig {
    pub fn new(options: Vec<SelectOption>, initial_value: impl Into<String>) -> Self {
        Self {
            options,
            initial_value: initial_value.into(),
            label_text: None,
            two_option_toggle: true,
            space_activates: true,
        }
    }

    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.label_text = Some(text.into());
        self
    }

    pub fn two_option_toggle(mut self, enabled: bool) -> Self {
        self.two_option_toggle = enabled;
        self
    }

    pub fn space_activates(mut self, enabled: bool) -> Self {
        self.space_activates = enabled;
        self
    }

    fn validate(&self, root: &str) -> Result<OptionModel, WidgetError> {
        let model = OptionModel::new(self.options.clone(), self.initial_value.clone());
        if model.is_empty() {
            return Err(WidgetError::NoOptions {
                root: root.to_string(),
            });
        }
        if let Some(value) = model.duplicate_value() {
            return Err(WidgetError::DuplicateValue {
                root: root.to_string(),
                value: value.to_string(),
            });
        }
        if !model.contains(&self.initial_value) {
            return Err(WidgetError::UnknownValue {
                root: root.to_string(),
                value: self.initial_value.clone(),
            });
        }
        Ok(model)
    }
}

/// What a commit changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub previous: String,
    pub value: String,
    /// Observers of the native control that heard the change.
    pub notified: usize,
}

/// One custom dropdown bound to a native select control.
#[derive(Debug)]
pub struct CustomSelect {
    id: WidgetId,
    model: OptionModel,
    label: Option<String>,
    two_option_toggle: bool,
    space_activates: bool,
    position_strategy: PositionStrategy,
    phase: Phase,
    selected: String,
    /// Stamp of the event that last opened the panel. A dismissal check
    /// carrying the same stamp is the opening event seen a second time.
    last_stamp: Option<EventStamp>,
    subscription: Option<SubscriptionId>,
    parts: WidgetParts,
    bridge: NativeBridge,
}

impl CustomSelect {
    /// Render a widget into `root`, bound to the native control `native`.
    pub fn mount(
        doc: &mut Document,
        root: &str,
        native: &str,
        config: WidgetConfig,
    ) -> Result<Self, WidgetError> {
        let model = config.validate(root)?;
        let selected = config.initial_value.clone();
        let two_option_toggle = config.two_option_toggle;
        let parts = markup::render(
            doc,
            root,
            native,
            &model,
            &selected,
            config.label_text.as_deref(),
            two_option_toggle && model.len() == 2,
        )?;

        let widget = Self {
            id: WidgetId::new(),
            model,
            label: config.label_text,
            two_option_toggle,
            space_activates: config.space_activates,
            position_strategy: PositionStrategy::default(),
            phase: Phase::Closed,
            selected,
            last_stamp: None,
            subscription: None,
            parts,
            bridge: NativeBridge::new(native),
        };
        log::debug!("[{}] mounted on '{root}' with {} options", widget.id, widget.model.len());
        Ok(widget)
    }

    pub fn position_strategy(mut self, strategy: PositionStrategy) -> Self {
        self.position_strategy = strategy;
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    pub fn selected_value(&self) -> &str {
        &self.selected
    }

    pub fn selected_text(&self) -> &str {
        self.model.value_to_text(&self.selected).unwrap_or_default()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn model(&self) -> &OptionModel {
        &self.model
    }

    pub fn parts(&self) -> &WidgetParts {
        &self.parts
    }

    pub fn root(&self) -> &str {
        &self.parts.root
    }

    pub fn subscription(&self) -> Option<SubscriptionId> {
        self.subscription
    }

    pub fn last_stamp(&self) -> Option<EventStamp> {
        self.last_stamp
    }

    pub(crate) fn space_activates(&self) -> bool {
        self.space_activates
    }

    /// Whether the panel hides the selected row for this widget.
    pub fn is_toggle_mode(&self) -> bool {
        self.two_option_toggle && self.model.len() == 2
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Closed -> Open. `trigger` is the stamp of the event that asked for it.
    /// Returns false if already open.
    pub fn open(&mut self, doc: &mut Document, trigger: Option<EventStamp>) -> bool {
        if self.is_open() {
            return false;
        }

        let metrics =
            AnchorMetrics::measure(doc, &self.parts.root, self.parts.toggle_control()).unwrap_or_default();
        let position = compute_position(&metrics, self.position_strategy);
        markup::show_panel(doc, &self.parts, position);

        if trigger.is_some() {
            self.last_stamp = trigger;
        }
        self.subscription = Some(doc.subscribe(self.id.owner(), &DISMISS_EVENTS));
        self.phase = Phase::Open;

        log::debug!("[{}] open at {position:?}", self.id);
        true
    }

    /// Open -> Closed without changing the selection. Focus left on a row
    /// moves back to the toggle control.
    /// Returns false if already closed.
    pub fn dismiss(&mut self, doc: &mut Document) -> bool {
        if !self.is_open() {
            return false;
        }

        markup::hide_panel(doc, &self.parts);
        // A hidden row cannot keep focus.
        let stranded = doc
            .focused()
            .is_some_and(|id| doc.contains(&self.parts.panel, id));
        if stranded {
            doc.focus(self.parts.toggle_control());
        }
        if let Some(subscription) = self.subscription.take() {
            doc.unsubscribe(subscription);
        }
        self.phase = Phase::Closed;

        log::debug!("[{}] dismissed", self.id);
        true
    }

    /// Open or close depending on the current phase.
    pub fn toggle(&mut self, doc: &mut Document, trigger: Option<EventStamp>) -> Phase {
        if self.is_open() {
            self.dismiss(doc);
        } else {
            self.open(doc, trigger);
        }
        self.phase
    }

    /// Make option `index` the selection, tell the native control, and close.
    /// Returns None if there is no such option.
    pub fn commit(&mut self, doc: &mut Document, index: usize) -> Option<Commit> {
        let option = self.model.get(index)?;
        let value = option.value.clone();
        let text = option.text.clone();

        if self.is_toggle_mode() {
            markup::hide_only_row(doc, &self.parts, index);
        }

        let previous = std::mem::replace(&mut self.selected, value.clone());
        markup::mark_selected(doc, &self.parts, index);
        markup::set_button_label(doc, &self.parts, &value, &text);

        let notified = self.bridge.push_value(doc, &value);
        self.dismiss(doc);

        log::debug!("[{}] committed '{previous}' -> '{value}'", self.id);
        Some(Commit {
            previous,
            value,
            notified,
        })
    }

    /// Move focus to the next/previous visible focusable element of this
    /// widget. Rows of a closed panel count as not visible.
    /// Returns the newly focused element ID.
    pub fn move_focus(&self, doc: &mut Document, direction: NavDirection) -> Option<String> {
        let current = doc.focused()?.to_string();
        let root = doc.find(&self.parts.root)?;

        let candidates: Vec<String> = collect_focusable(root)
            .into_iter()
            .filter(|id| doc.is_displayed(id))
            .filter(|id| self.is_open() || !doc.contains(&self.parts.panel, id))
            .collect();

        let next = step_focus(&candidates, &current, direction)?;
        doc.focus(&next);
        log::trace!("[{}] focus {current} -> {next}", self.id);
        Some(next)
    }
}
