//! Generated markup. Styling depends on these class and attribute names
//! verbatim, so they are part of the public contract.

use pagedom::{Display, Document, Element};

use crate::error::WidgetError;
use crate::options::OptionModel;
use crate::position::PanelPosition;

/// Marks a widget root in the input markup.
pub const ROOT: &str = "custom-select";
/// Focusable wrapper around label and select button (labelled widgets only).
pub const BUTTON_GROUP: &str = "uk-button-group";
pub const LABEL_BUTTON: &str = "select-label-button";
pub const SELECT_BUTTON: &str = "select-button";
pub const BUTTON_TEXT: &str = "button-text";
pub const BUTTON_ICON: &str = "select-button-icon";
/// The option panel.
pub const PANEL: &str = "select-items";
/// Present on the panel while it is closed.
pub const PANEL_HIDDEN: &str = "select-hide";
/// Added to a select button that takes focus itself.
pub const FOCUSABLE: &str = "focusable";

/// Present (empty) on the row of the current value.
pub const SELECTED_ATTR: &str = "selected";
/// `"true"` on the row hidden in two-option toggle mode.
pub const ROW_HIDDEN_ATTR: &str = "select-hidden";

const LABEL_BUTTON_CLASSES: &str = "uk-button uk-button-small uk-button-default select-label-button";
const SELECT_BUTTON_CLASSES: &str =
    "uk-button uk-button-small select-button uk-button-default uk-flex uk-flex-middle uk-flex-between";

/// IDs of the elements that make up one rendered widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetParts {
    pub root: String,
    pub native: String,
    pub group: Option<String>,
    pub label_button: Option<String>,
    pub select_button: String,
    pub button_text: String,
    pub panel: String,
    /// One per option, in option order.
    pub rows: Vec<String>,
}

impl WidgetParts {
    /// The element that takes focus and opens the panel from the keyboard.
    pub fn toggle_control(&self) -> &str {
        self.group.as_deref().unwrap_or(&self.select_button)
    }

    /// Whether `id` is the toggle control or inside it.
    pub fn in_toggle(&self, doc: &Document, id: &str) -> bool {
        doc.contains(self.toggle_control(), id)
    }

    /// Index of the row `id` belongs to.
    pub fn row_index(&self, doc: &Document, id: &str) -> Option<usize> {
        self.rows.iter().position(|row| doc.contains(row, id))
    }
}

/// Build the widget markup and append it to `root`.
///
/// `hide_selected_row` enables two-option toggle mode for this widget.
pub(crate) fn render(
    doc: &mut Document,
    root: &str,
    native: &str,
    model: &OptionModel,
    selected: &str,
    label: Option<&str>,
    hide_selected_row: bool,
) -> Result<WidgetParts, WidgetError> {
    let button_text = Element::span()
        .class(BUTTON_TEXT)
        .text(model.value_to_text(selected).unwrap_or_default());
    let icon = Element::span()
        .class(BUTTON_ICON)
        .attr("uk-icon", "icon:triangle-down");
    let mut select_button = Element::button()
        .class(SELECT_BUTTON_CLASSES)
        .attr("tabindex", "-1")
        .attr("value", selected);

    let button_text_id = button_text.id.clone();
    select_button = select_button.child(button_text).child(icon);
    let select_button_id = select_button.id.clone();

    let (toggle, group_id, label_button_id) = match label {
        Some(label) => {
            let label_button = Element::button()
                .class(LABEL_BUTTON_CLASSES)
                .attr("tabindex", "-1")
                .text(label);
            let label_button_id = label_button.id.clone();
            let group = Element::div()
                .class(BUTTON_GROUP)
                .attr("tabindex", "0")
                .child(label_button)
                .child(select_button);
            let group_id = group.id.clone();
            (group, Some(group_id), Some(label_button_id))
        }
        None => {
            let button = select_button.class(FOCUSABLE).attr("tabindex", "0");
            (button, None, None)
        }
    };

    let mut panel = Element::div().class(PANEL).class(PANEL_HIDDEN);
    let mut rows = Vec::with_capacity(model.len());
    for option in model.iter() {
        let mut row = Element::div()
            .attr("value", option.value.as_str())
            .attr("tabindex", "0")
            .text(option.text.as_str());
        if option.value == selected {
            row.set_attr(SELECTED_ATTR, "");
        }
        if hide_selected_row {
            set_row_hidden(&mut row, option.value == selected);
        }
        rows.push(row.id.clone());
        panel = panel.child(row);
    }
    let panel_id = panel.id.clone();

    let root_el = doc.find_mut(root).ok_or_else(|| WidgetError::MissingRoot {
        root: root.to_string(),
    })?;
    root_el.children.push(toggle);
    root_el.children.push(panel);

    Ok(WidgetParts {
        root: root.to_string(),
        native: native.to_string(),
        group: group_id,
        label_button: label_button_id,
        select_button: select_button_id,
        button_text: button_text_id,
        panel: panel_id,
        rows,
    })
}

fn set_row_hidden(row: &mut Element, hidden: bool) {
    if hidden {
        row.set_display(Display::None);
        row.set_attr(ROW_HIDDEN_ATTR, "true");
    } else {
        row.set_display(Display::Block);
        row.set_attr(ROW_HIDDEN_ATTR, "false");
    }
}

pub(crate) fn show_panel(doc: &mut Document, parts: &WidgetParts, position: PanelPosition) {
    if let Some(panel) = doc.find_mut(&parts.panel) {
        panel.style.left = Some(position.left);
        panel.style.right = Some(position.right);
        panel.style.top = Some(position.top);
        panel.remove_class(PANEL_HIDDEN);
    }
}

pub(crate) fn hide_panel(doc: &mut Document, parts: &WidgetParts) {
    if let Some(panel) = doc.find_mut(&parts.panel) {
        panel.add_class(PANEL_HIDDEN);
    }
}

/// Flag row `index` as the selected one and clear the flag everywhere else.
pub(crate) fn mark_selected(doc: &mut Document, parts: &WidgetParts, index: usize) {
    for (i, id) in parts.rows.iter().enumerate() {
        if let Some(row) = doc.find_mut(id) {
            if i == index {
                row.set_attr(SELECTED_ATTR, "");
            } else {
                row.remove_attr(SELECTED_ATTR);
            }
        }
    }
}

/// Hide row `index` and show every other row.
pub(crate) fn hide_only_row(doc: &mut Document, parts: &WidgetParts, index: usize) {
    for (i, id) in parts.rows.iter().enumerate() {
        if let Some(row) = doc.find_mut(id) {
            set_row_hidden(row, i == index);
        }
    }
}

pub(crate) fn set_button_label(doc: &mut Document, parts: &WidgetParts, value: &str, text: &str) {
    if let Some(span) = doc.find_mut(&parts.button_text) {
        span.text = text.to_string();
    }
    if let Some(button) = doc.find_mut(&parts.select_button) {
        button.set_attr("value", value);
    }
}
