use std::cell::RefCell;
use std::rc::Rc;

use custom_select::markup::SELECTED_ATTR;
use custom_select::{Page, SelectSettings};
use pagedom::{Document, Element, EventKind};

fn fruit_page(options: &[(&str, &str)], value: &str, settings: SelectSettings) -> Page {
    let select = Element::select()
        .id("native")
        .value(value)
        .children(options.iter().map(|(v, t)| Element::option(*v, *t)));
    let body = Element::div()
        .child(Element::div().id("outside"))
        .child(Element::div().id("fruit").class("custom-select").child(select));
    Page::init(Document::new(body), settings)
}

/// Texts of the rows currently displayed in the panel.
fn visible_rows(page: &Page) -> Vec<String> {
    let doc = page.document();
    page.widget(0)
        .unwrap()
        .parts()
        .rows
        .iter()
        .filter(|id| doc.is_displayed(id))
        .map(|id| doc.find(id).unwrap().text.clone())
        .collect()
}

fn flagged_rows(page: &Page) -> Vec<String> {
    let doc = page.document();
    page.widget(0)
        .unwrap()
        .parts()
        .rows
        .iter()
        .filter(|id| doc.find(id).unwrap().has_attr(SELECTED_ATTR))
        .map(|id| doc.find(id).unwrap().text.clone())
        .collect()
}

/// Values the native control held each time it announced a change.
fn record_changes(page: &Page) -> Rc<RefCell<Vec<String>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    page.document_mut().observe("native", EventKind::Change, move |doc, event| {
        let native = doc.find(event.target().unwrap_or_default()).unwrap();
        log.borrow_mut().push(native.select_value().unwrap_or_default().to_string());
    });
    seen
}

fn native_value(page: &Page) -> String {
    page.document().find("native").unwrap().select_value().unwrap().to_string()
}

fn button_text(page: &Page) -> String {
    let id = page.widget(0).unwrap().parts().button_text.clone();
    page.document().find(&id).unwrap().text.clone()
}

// ============================================================================
// Two-option toggle
// ============================================================================

#[test]
fn test_two_option_toggle_scenario() {
    let mut page = fruit_page(&[("a", "Apple"), ("b", "Banana")], "a", SelectSettings::default());
    let changes = record_changes(&page);
    let parts = page.widget(0).unwrap().parts().clone();

    page.click(parts.toggle_control());
    assert_eq!(visible_rows(&page), vec!["Banana"]);

    page.click(&parts.rows[1]);
    let widget = page.widget(0).unwrap();
    assert_eq!(widget.selected_value(), "b");
    assert!(!widget.is_open());
    assert_eq!(button_text(&page), "Banana");
    assert_eq!(native_value(&page), "b");
    assert_eq!(*changes.borrow(), vec!["b"]);

    page.click(parts.toggle_control());
    assert_eq!(visible_rows(&page), vec!["Apple"]);
}

#[test]
fn test_hidden_row_tracks_selection_over_many_commits() {
    let mut page = fruit_page(&[("a", "Apple"), ("b", "Banana")], "a", SelectSettings::default());
    let parts = page.widget(0).unwrap().parts().clone();

    for _ in 0..5 {
        page.click(parts.toggle_control());
        let visible = visible_rows(&page);
        assert_eq!(visible.len(), 1);

        let selected = page.widget(0).unwrap().selected_text().to_string();
        assert_ne!(visible[0], selected);

        let index = if visible[0] == "Apple" { 0 } else { 1 };
        page.click(&parts.rows[index]);

        let selected = page.widget(0).unwrap().selected_value().to_string();
        let doc = page.document();
        let hidden: Vec<&str> = parts
            .rows
            .iter()
            .filter(|id| !doc.is_displayed(id))
            .map(|id| doc.find(id).unwrap().get_attr("value").unwrap())
            .collect();
        assert_eq!(hidden, vec![selected.as_str()]);
    }
}

// ============================================================================
// Three options
// ============================================================================

#[test]
fn test_three_option_scenario() {
    let options = [("a", "Apple"), ("b", "Banana"), ("c", "Cherry")];
    let mut page = fruit_page(&options, "a", SelectSettings::default());
    let parts = page.widget(0).unwrap().parts().clone();

    for (index, (value, text)) in options.iter().enumerate().rev() {
        page.click(parts.toggle_control());
        assert_eq!(visible_rows(&page), vec!["Apple", "Banana", "Cherry"]);
        assert_eq!(flagged_rows(&page).len(), 1);

        page.click(&parts.rows[index]);
        assert!(!page.widget(0).unwrap().is_open());
        assert_eq!(page.widget(0).unwrap().selected_value(), *value);
        assert_eq!(flagged_rows(&page), vec![*text]);
    }
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_each_commit_pushes_exactly_once() {
    let options = [("a", "Apple"), ("b", "Banana"), ("c", "Cherry")];
    let mut page = fruit_page(&options, "b", SelectSettings::default());
    let changes = record_changes(&page);
    let parts = page.widget(0).unwrap().parts().clone();

    for (commits, index) in [2, 0, 0, 1].into_iter().enumerate() {
        page.click(parts.toggle_control());
        page.click(&parts.rows[index]);

        assert_eq!(changes.borrow().len(), commits + 1);
        assert_eq!(changes.borrow().last().unwrap(), options[index].0);
        assert_eq!(native_value(&page), options[index].0);
        assert_eq!(button_text(&page), options[index].1);
    }
}

#[test]
fn test_open_dismiss_round_trip_keeps_selection() {
    let mut page = fruit_page(&[("a", "Apple"), ("b", "Banana")], "b", SelectSettings::default());
    let changes = record_changes(&page);
    let toggle = page.widget(0).unwrap().parts().toggle_control().to_string();

    page.click(&toggle);
    page.click("outside");
    page.click(&toggle);
    page.click(&toggle);

    assert_eq!(page.widget(0).unwrap().selected_value(), "b");
    assert_eq!(native_value(&page), "b");
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_selection_always_one_of_the_options() {
    let options = [("a", "Apple"), ("b", "Banana"), ("c", "Cherry")];
    let mut page = fruit_page(&options, "c", SelectSettings::default());
    let parts = page.widget(0).unwrap().parts().clone();
    let values: Vec<&str> = options.iter().map(|(v, _)| *v).collect();

    let targets = [
        parts.toggle_control().to_string(),
        parts.rows[0].clone(),
        parts.panel.clone(),
        "outside".to_string(),
        parts.rows[1].clone(),
        parts.select_button.clone(),
        parts.rows[2].clone(),
    ];
    for step in 0..40 {
        page.click(&targets[(step * 3) % targets.len()]);
        let selected = page.widget(0).unwrap().selected_value();
        assert!(values.contains(&selected), "step {step}: {selected}");
    }
}
