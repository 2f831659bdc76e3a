//! Placement of the option panel relative to the widget root.

use pagedom::{Document, Edges};

/// Measurements of the widget root the panel hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnchorMetrics {
    /// Padding of the widget root.
    pub padding: Edges,
    /// Border-box height of the widget root.
    pub anchor_height: u16,
    /// Border-box height of the toggle control (button group or select button).
    pub toggle_height: u16,
}

impl AnchorMetrics {
    /// Read the metrics from the document. None if either element is missing.
    pub fn measure(doc: &Document, root: &str, toggle: &str) -> Option<Self> {
        let root = doc.find(root)?;
        let toggle = doc.find(toggle)?;
        Some(Self {
            padding: root.padding,
            anchor_height: root.rect.height,
            toggle_height: toggle.rect.height,
        })
    }
}

/// Where the panel's top edge goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionStrategy {
    /// Just below the toggle control: toggle height plus the root's top padding.
    #[default]
    BelowToggle,
    /// At the root's content bottom: root height minus its bottom padding.
    BelowAnchor,
}

/// Absolute offsets for the panel, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelPosition {
    pub left: u16,
    pub right: u16,
    pub top: u16,
}

/// Horizontal insets mirror the root's own left/right padding so the panel
/// lines up with the content box.
pub fn compute_position(metrics: &AnchorMetrics, strategy: PositionStrategy) -> PanelPosition {
    let top = match strategy {
        PositionStrategy::BelowToggle => metrics.toggle_height.saturating_add(metrics.padding.top),
        PositionStrategy::BelowAnchor => metrics.anchor_height.saturating_sub(metrics.padding.bottom),
    };
    PanelPosition {
        left: metrics.padding.left,
        right: metrics.padding.right,
        top,
    }
}
