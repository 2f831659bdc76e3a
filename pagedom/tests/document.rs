use pagedom::{Display, Document, Element, Style, Tag};

fn sample_page() -> Document {
    Document::new(
        Element::div()
            .id("page")
            .child(
                Element::div()
                    .id("form")
                    .class("custom-select wide")
                    .child(Element::label("Fruit").id("fruit-label"))
                    .child(
                        Element::select()
                            .id("fruit")
                            .child(Element::option("a", "Apple").id("opt-a"))
                            .child(Element::option("b", "Banana").id("opt-b")),
                    ),
            )
            .child(Element::div().id("other").class("custom-select")),
    )
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_find_and_find_mut() {
    let mut doc = sample_page();

    assert_eq!(doc.find("fruit").map(|e| e.tag), Some(Tag::Select));
    assert!(doc.find("missing").is_none());

    doc.find_mut("opt-a").unwrap().set_attr("selected", "");
    assert!(doc.find("opt-a").unwrap().has_attr("selected"));
}

#[test]
fn test_query_class_tree_order() {
    let doc = sample_page();

    assert_eq!(doc.query_class("custom-select"), vec!["form", "other"]);
    assert_eq!(doc.query_class_within("form", "custom-select"), vec!["form"]);
    assert!(doc.query_class_within("missing", "custom-select").is_empty());
}

#[test]
fn test_first_of_tag() {
    let doc = sample_page();

    assert_eq!(doc.first_of_tag("form", Tag::Select).map(|e| e.id.as_str()), Some("fruit"));
    assert_eq!(doc.first_of_tag("form", Tag::Label).map(|e| e.id.as_str()), Some("fruit-label"));
    assert!(doc.first_of_tag("other", Tag::Select).is_none());
}

#[test]
fn test_contains() {
    let doc = sample_page();

    assert!(doc.contains("form", "opt-b"));
    assert!(doc.contains("form", "form"));
    assert!(!doc.contains("form", "other"));
    assert!(!doc.contains("form", "missing"));
}

#[test]
fn test_is_displayed_follows_ancestors() {
    let mut doc = sample_page();
    assert!(doc.is_displayed("opt-a"));

    doc.find_mut("fruit").unwrap().set_display(Display::None);
    assert!(!doc.is_displayed("opt-a"));
    assert!(!doc.is_displayed("fruit"));
    assert!(doc.is_displayed("form"));
    assert!(!doc.is_displayed("missing"));
}

// ============================================================================
// Elements
// ============================================================================

#[test]
fn test_class_list() {
    let mut el = Element::div().class("a b");
    assert!(el.has_class("a"));
    assert!(!el.add_class("b"));
    assert!(el.add_class("c"));
    assert!(el.remove_class("a"));
    assert!(!el.remove_class("a"));
    assert_eq!(el.classes, vec!["b", "c"]);

    el.set_classes("x  y");
    assert_eq!(el.classes, vec!["x", "y"]);
}

#[test]
fn test_select_value_defaults_to_first_option() {
    let select = Element::select()
        .child(Element::option("a", "Apple"))
        .child(Element::option("b", "Banana"));
    assert_eq!(select.select_value(), Some("a"));

    let select = select.value("b");
    assert_eq!(select.select_value(), Some("b"));

    assert_eq!(Element::select().select_value(), None);
    assert_eq!(Element::div().select_value(), None);
}

#[test]
fn test_option_value_falls_back_to_text() {
    let mut option = Element::option("a", "Apple");
    assert_eq!(option.option_value(), Some("a"));

    option.remove_attr("value");
    assert_eq!(option.option_value(), Some("Apple"));
}

#[test]
fn test_inner_text_concatenates_descendants() {
    let el = Element::button()
        .child(Element::span().text("Banana"))
        .child(Element::span());
    assert_eq!(el.inner_text(), "Banana");
}

#[test]
fn test_style_builder() {
    let style = Style::new().display(Display::None).min_width(40);
    assert!(style.is_hidden());
    assert_eq!(style.min_width, Some(40));
}
