#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    None,
}

/// Inline style of an element. Offsets and widths are in pixels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style {
    pub display: Display,
    pub left: Option<u16>,
    pub right: Option<u16>,
    pub top: Option<u16>,
    pub min_width: Option<u16>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.display == Display::None
    }
}
