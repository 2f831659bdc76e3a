//! The page document: element tree, focus, event clock and listeners.
//!
//! Document-level listeners are explicit subscriptions. An owner acquires one
//! with [`Document::subscribe`] and must release it with
//! [`Document::unsubscribe`]; the document never calls back into owners on its
//! own. Whoever dispatches events asks [`Document::subscribers`] who wants a
//! given kind and routes the event to them.
//!
//! Element-level observers are plain callbacks, for code that only wants to
//! hear about an element (e.g. `change` on a form control) without knowing
//! who drives it.

use std::fmt;

use crate::element::{self, find_element, find_element_mut, Element, Tag};
use crate::event::{Event, EventKind, EventStamp};
use crate::hit;

/// Identifies whoever holds a document-level subscription.
pub type OwnerId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Clone)]
struct Subscription {
    id: SubscriptionId,
    owner: OwnerId,
    kinds: Vec<EventKind>,
}

type Observer = Box<dyn FnMut(&Document, &Event)>;

struct ObserverEntry {
    element: String,
    kind: EventKind,
    callback: Observer,
}

pub struct Document {
    root: Element,
    focused: Option<String>,
    clock: u64,
    next_subscription: u64,
    subscriptions: Vec<Subscription>,
    observers: Vec<ObserverEntry>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("root", &self.root.id)
            .field("focused", &self.focused)
            .field("clock", &self.clock)
            .field("subscriptions", &self.subscriptions)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            focused: None,
            clock: 0,
            next_subscription: 0,
            subscriptions: Vec::new(),
            observers: Vec::new(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn find(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    /// IDs of every element with `class`, in tree order.
    pub fn query_class(&self, class: &str) -> Vec<String> {
        element::query_class(&self.root, class)
    }

    /// IDs of the elements with `class` below (or at) `within`.
    pub fn query_class_within(&self, within: &str, class: &str) -> Vec<String> {
        self.find(within)
            .map(|el| element::query_class(el, class))
            .unwrap_or_default()
    }

    /// First element with `tag` below (or at) `within`.
    pub fn first_of_tag(&self, within: &str, tag: Tag) -> Option<&Element> {
        self.find(within)?.first_of_tag(tag)
    }

    /// Whether `id` is `ancestor` or one of its descendants.
    pub fn contains(&self, ancestor: &str, id: &str) -> bool {
        hit::contains(&self.root, ancestor, id)
    }

    /// False if the element, or any ancestor, has `display: none`, or if
    /// the element is not in the document at all.
    pub fn is_displayed(&self, id: &str) -> bool {
        let Some(path) = hit::path_to(&self.root, id) else {
            return false;
        };
        path.iter()
            .filter_map(|p| self.find(p))
            .all(|el| !el.style.is_hidden())
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) || self.find(id).is_none() {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Issue the stamp for a new physical interaction.
    pub fn next_stamp(&mut self) -> EventStamp {
        self.clock += 1;
        EventStamp::new(self.clock)
    }

    /// Register a document-level listener for `kinds` on behalf of `owner`.
    pub fn subscribe(&mut self, owner: OwnerId, kinds: &[EventKind]) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.subscriptions.push(Subscription {
            id,
            owner,
            kinds: kinds.to_vec(),
        });
        log::trace!("[subscribe] owner={owner} id={id:?} kinds={kinds:?}");
        id
    }

    /// Release a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        let removed = self.subscriptions.len() != before;
        log::trace!("[unsubscribe] id={id:?} removed={removed}");
        removed
    }

    /// Owners currently listening for `kind`, in subscription order.
    ///
    /// This is a snapshot: subscriptions added or dropped while the caller
    /// routes the event do not change it.
    pub fn subscribers(&self, kind: EventKind) -> Vec<OwnerId> {
        self.subscriptions
            .iter()
            .filter(|s| s.kinds.contains(&kind))
            .map(|s| s.owner)
            .collect()
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Attach a callback to `kind` events delivered to `element`.
    pub fn observe(
        &mut self,
        element: impl Into<String>,
        kind: EventKind,
        callback: impl FnMut(&Document, &Event) + 'static,
    ) {
        self.observers.push(ObserverEntry {
            element: element.into(),
            kind,
            callback: Box::new(callback),
        });
    }

    /// Deliver `event` to every observer of `element` for its kind, in
    /// registration order. Observers see the document as it is after the
    /// mutation that raised the event. Returns how many observers ran.
    pub fn dispatch_to(&mut self, element: &str, event: &Event) -> usize {
        let mut observers = std::mem::take(&mut self.observers);
        let mut delivered = 0;
        for entry in observers
            .iter_mut()
            .filter(|o| o.element == element && o.kind == event.kind)
        {
            (entry.callback)(&*self, event);
            delivered += 1;
        }
        // Observers cannot register through `&Document`, so nothing was added.
        self.observers = observers;
        log::trace!("[dispatch_to] {element} {:?} -> {delivered} observers", event.kind);
        delivered
    }
}
