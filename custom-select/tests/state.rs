use custom_select::markup::PANEL_HIDDEN;
use custom_select::{Commit, CustomSelect, Phase, PositionStrategy, SelectOption, WidgetConfig, WidgetError};
use pagedom::{Document, Edges, Element, EventKind, Rect};

fn document() -> Document {
    Document::new(
        Element::div().id("body").child(
            Element::div()
                .id("root")
                .padding(Edges::symmetric(2, 4))
                .rect(Rect::from_size(200, 40))
                .child(Element::select().id("native")),
        ),
    )
}

fn options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("s", "Small"),
        SelectOption::new("m", "Medium"),
        SelectOption::new("l", "Large"),
    ]
}

// ============================================================================
// Mounting
// ============================================================================

#[test]
fn test_mount_rejects_unknown_initial_value() {
    let mut doc = document();
    let err = CustomSelect::mount(&mut doc, "root", "native", WidgetConfig::new(options(), "xl")).unwrap_err();

    assert_eq!(
        err,
        WidgetError::UnknownValue {
            root: "root".to_string(),
            value: "xl".to_string(),
        }
    );
}

#[test]
fn test_mount_rejects_missing_root() {
    let mut doc = document();
    let err = CustomSelect::mount(&mut doc, "nowhere", "native", WidgetConfig::new(options(), "s")).unwrap_err();

    assert!(matches!(err, WidgetError::MissingRoot { .. }));
    assert_eq!(err.to_string(), "root 'nowhere' is not in the document");
}

#[test]
fn test_mount_renders_closed() {
    let mut doc = document();
    let widget = CustomSelect::mount(&mut doc, "root", "native", WidgetConfig::new(options(), "m").label("Size")).unwrap();

    assert_eq!(widget.phase(), Phase::Closed);
    assert_eq!(widget.selected_value(), "m");
    assert_eq!(widget.label(), Some("Size"));
    assert!(!widget.is_toggle_mode());
    assert_eq!(widget.parts().rows.len(), 3);
    assert!(doc.find(&widget.parts().panel).unwrap().has_class(PANEL_HIDDEN));
    assert_eq!(doc.subscription_count(), 0);
}

// ============================================================================
// Transitions
// ============================================================================

#[test]
fn test_open_and_dismiss_are_idempotent() {
    let mut doc = document();
    let mut widget = CustomSelect::mount(&mut doc, "root", "native", WidgetConfig::new(options(), "s")).unwrap();

    assert!(widget.open(&mut doc, None));
    assert!(!widget.open(&mut doc, None));
    assert_eq!(doc.subscribers(EventKind::Click), vec![widget.id().owner()]);
    assert_eq!(doc.subscribers(EventKind::KeyDown), vec![widget.id().owner()]);

    assert!(widget.dismiss(&mut doc));
    assert!(!widget.dismiss(&mut doc));
    assert_eq!(doc.subscription_count(), 0);
    assert_eq!(widget.toggle(&mut doc, None), Phase::Open);
    assert_eq!(widget.toggle(&mut doc, None), Phase::Closed);
}

#[test]
fn test_commit_reports_change() {
    let mut doc = document();
    let mut widget = CustomSelect::mount(&mut doc, "root", "native", WidgetConfig::new(options(), "s")).unwrap();
    doc.observe("native", EventKind::Change, |_, _| {});

    widget.open(&mut doc, None);
    let commit = widget.commit(&mut doc, 2).unwrap();

    assert_eq!(
        commit,
        Commit {
            previous: "s".to_string(),
            value: "l".to_string(),
            notified: 1,
        }
    );
    assert!(!widget.is_open());
    assert_eq!(widget.selected_text(), "Large");
    assert!(widget.commit(&mut doc, 9).is_none());
    assert_eq!(widget.selected_value(), "l");
}

#[test]
fn test_position_strategy_below_anchor() {
    let mut doc = document();
    let mut widget = CustomSelect::mount(&mut doc, "root", "native", WidgetConfig::new(options(), "s"))
        .unwrap()
        .position_strategy(PositionStrategy::BelowAnchor);

    widget.open(&mut doc, None);

    let style = &doc.find(&widget.parts().panel).unwrap().style;
    assert_eq!((style.left, style.right, style.top), (Some(4), Some(4), Some(38)));
}
