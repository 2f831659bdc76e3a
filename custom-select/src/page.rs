//! Page-level glue: finds widget roots, builds widgets and routes events.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use pagedom::{Document, Event, Key, Tag};
use tokio::task::JoinHandle;

use crate::bridge::NativeBridge;
use crate::config::SelectSettings;
use crate::error::WidgetError;
use crate::events::{EventResult, WidgetEvents};
use crate::markup;
use crate::options::OptionModel;
use crate::state::{CustomSelect, WidgetConfig};
use crate::width;

/// Classes whose members get equal widths after initialization.
pub const EQUALIZED_CLASSES: [&str; 2] = [markup::LABEL_BUTTON, markup::SELECT_BUTTON];

/// A document with every `custom-select` root replaced by a live widget.
#[derive(Debug)]
pub struct Page {
    document: Rc<RefCell<Document>>,
    widgets: Vec<CustomSelect>,
    settings: SelectSettings,
}

impl Page {
    /// Build a widget for every root marked with [`markup::ROOT`].
    ///
    /// Roots that cannot become a widget are logged and skipped; the rest of
    /// the page is still initialized.
    pub fn init(mut document: Document, settings: SelectSettings) -> Self {
        let mut widgets = Vec::new();

        let roots = document.query_class(markup::ROOT);
        for root in roots {
            match build_widget(&mut document, &root, &settings) {
                Ok(widget) => widgets.push(widget),
                Err(err) => log::warn!("skipping custom select: {err}"),
            }
        }

        log::debug!("initialized {} custom selects", widgets.len());
        Self {
            document: Rc::new(RefCell::new(document)),
            widgets,
            settings,
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn document(&self) -> Ref<'_, Document> {
        self.document.borrow()
    }

    pub fn document_mut(&self) -> RefMut<'_, Document> {
        self.document.borrow_mut()
    }

    /// Shared handle to the document, for tasks that outlive a borrow.
    pub fn shared_document(&self) -> Rc<RefCell<Document>> {
        Rc::clone(&self.document)
    }

    pub fn settings(&self) -> &SelectSettings {
        &self.settings
    }

    pub fn widgets(&self) -> &[CustomSelect] {
        &self.widgets
    }

    pub fn widget(&self, index: usize) -> Option<&CustomSelect> {
        self.widgets.get(index)
    }

    /// The widget mounted on the root with this ID.
    pub fn widget_by_root(&self, root: &str) -> Option<&CustomSelect> {
        self.widgets.iter().find(|w| w.root() == root)
    }

    pub fn open_count(&self) -> usize {
        self.widgets.iter().filter(|w| w.is_open()).count()
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Route one event through the target phase, then the document phase.
    pub fn dispatch(&mut self, event: &Event) -> EventResult {
        let mut doc = self.document.borrow_mut();
        let mut result = EventResult::Ignored;

        let target_widget = event
            .target()
            .and_then(|t| self.widgets.iter().position(|w| doc.contains(w.root(), t)));

        if let Some(index) = target_widget {
            let was_open = self.widgets[index].is_open();
            result = self.widgets[index].on_target_event(&mut doc, event);

            if self.settings.single_open && !was_open && self.widgets[index].is_open() {
                close_others(&mut self.widgets, &mut doc, index);
            }
        }

        if result == EventResult::Consumed {
            return result;
        }

        let owners = doc.subscribers(event.kind);
        for owner in owners {
            if let Some(widget) = self.widgets.iter_mut().find(|w| w.id().owner() == owner) {
                result = result.or(widget.on_document_event(&mut doc, event));
            }
        }

        result
    }

    /// Open widget `index` from code. Honors `single_open`.
    /// Returns false if there is no such widget or it was already open.
    pub fn open_widget(&mut self, index: usize) -> bool {
        let mut doc = self.document.borrow_mut();
        let Some(widget) = self.widgets.get_mut(index) else {
            return false;
        };
        if !widget.open(&mut doc, None) {
            return false;
        }
        if self.settings.single_open {
            close_others(&mut self.widgets, &mut doc, index);
        }
        true
    }

    /// Close widget `index` from code without changing its selection.
    pub fn dismiss_widget(&mut self, index: usize) -> bool {
        let mut doc = self.document.borrow_mut();
        match self.widgets.get_mut(index) {
            Some(widget) => widget.dismiss(&mut doc),
            None => false,
        }
    }

    /// Click on `target` as a new user interaction.
    pub fn click(&mut self, target: &str) -> EventResult {
        let stamp = self.document.borrow_mut().next_stamp();
        self.dispatch(&Event::click(target, stamp))
    }

    /// Press `key` on whatever has focus, as a new user interaction.
    pub fn key_down(&mut self, key: Key) -> EventResult {
        let event = {
            let mut doc = self.document.borrow_mut();
            let stamp = doc.next_stamp();
            Event::key_down(doc.focused().map(str::to_string), key, stamp)
        };
        self.dispatch(&event)
    }

    pub fn focus(&mut self, id: &str) -> bool {
        self.document.borrow_mut().focus(id)
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    /// Start the delayed width pass for each equalized class.
    ///
    /// Fire-and-forget: the handles may be dropped. Must be called from
    /// within a `tokio::task::LocalSet`. Returns no handles when
    /// `adjust_width` is off.
    pub fn schedule_width_equalization(&self) -> Vec<JoinHandle<u16>> {
        if !self.settings.adjust_width {
            return Vec::new();
        }
        let delay = self.settings.width_equalize_delay();
        EQUALIZED_CLASSES
            .iter()
            .map(|class| {
                let document = self.shared_document();
                tokio::task::spawn_local(width::equalize_widths(document, class.to_string(), delay))
            })
            .collect()
    }
}

fn close_others(widgets: &mut [CustomSelect], doc: &mut Document, keep: usize) {
    for (i, other) in widgets.iter_mut().enumerate() {
        if i != keep && other.dismiss(doc) {
            log::debug!("[{}] closed, another select opened", other.id());
        }
    }
}

/// Read one root's markup and mount a widget on it.
fn build_widget(doc: &mut Document, root: &str, settings: &SelectSettings) -> Result<CustomSelect, WidgetError> {
    let select = doc
        .first_of_tag(root, Tag::Select)
        .ok_or_else(|| WidgetError::MissingSelect {
            root: root.to_string(),
        })?;
    let native = select.id.clone();
    let model = OptionModel::from_native(select);
    let label = doc.first_of_tag(root, Tag::Label).map(|l| l.inner_text());

    let (initial, initial_text) = NativeBridge::new(native.as_str()).read_initial(doc);
    log::trace!("'{root}' starts at '{initial}' ({initial_text:?})");

    let mut config = WidgetConfig::new(model.iter().cloned().collect(), initial)
        .two_option_toggle(settings.two_option_toggle)
        .space_activates(settings.space_activates);
    if let Some(label) = label {
        config = config.label(label);
    }

    CustomSelect::mount(doc, root, &native, config)
}
