pub mod document;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod types;

pub use document::{Document, OwnerId, SubscriptionId};
pub use element::{find_element, find_element_mut, Element, Tag};
pub use event::{Event, EventKind, EventStamp, Key, NavDirection};
pub use focus::{collect_focusable, step_focus};
pub use hit::{contains, path_to};
pub use layout::Rect;
pub use types::*;
