/// Identity of one physical user interaction.
///
/// Issued by [`Document::next_stamp`](crate::Document::next_stamp). Every
/// delivery of the same interaction carries the same stamp, so a handler can
/// tell "an event I already reacted to" apart from a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventStamp(u64);

impl EventStamp {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer activation.
    Click,
    /// Key press, targeted at the focused element.
    KeyDown,
    /// A form control's value changed.
    Change,
}

/// A page event with element targeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    /// Element the event was aimed at. `None` means the document itself.
    pub target: Option<String>,
    /// Pressed key, for `KeyDown` only.
    pub key: Option<Key>,
    pub stamp: EventStamp,
}

impl Event {
    pub fn click(target: impl Into<String>, stamp: EventStamp) -> Self {
        Self {
            kind: EventKind::Click,
            target: Some(target.into()),
            key: None,
            stamp,
        }
    }

    pub fn key_down(target: Option<String>, key: Key, stamp: EventStamp) -> Self {
        Self {
            kind: EventKind::KeyDown,
            target,
            key: Some(key),
            stamp,
        }
    }

    pub fn change(target: impl Into<String>, stamp: EventStamp) -> Self {
        Self {
            kind: EventKind::Change,
            target: Some(target.into()),
            key: None,
            stamp,
        }
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_key(&self, key: Key) -> bool {
        self.kind == EventKind::KeyDown && self.key == Some(key)
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

impl Key {
    pub const SPACE: Key = Key::Char(' ');
}

/// Direction for sequential focus movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Up,
    Down,
}

impl NavDirection {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Up => Some(NavDirection::Up),
            Key::Down => Some(NavDirection::Down),
            _ => None,
        }
    }
}
