//! Width equalization: make every control of one class as wide as the widest.
//!
//! Runs once, a short fixed delay after initialization, so the styling layer
//! has settled before widths are measured. It only writes `min-width`, so it
//! is safe to race with user interaction.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use pagedom::Document;

/// Widest of `widths`, or 0 for none.
pub fn max_width(widths: impl IntoIterator<Item = u16>) -> u16 {
    widths.into_iter().max().unwrap_or(0)
}

/// Set `min_width` of every element with `class` to the widest one's width.
/// Returns the width applied.
pub fn apply_equal_width(doc: &mut Document, class: &str) -> u16 {
    let ids = doc.query_class(class);
    let width = max_width(ids.iter().filter_map(|id| doc.find(id)).map(|el| el.rect.width));

    for id in &ids {
        if let Some(el) = doc.find_mut(id) {
            el.style.min_width = Some(width);
        }
    }

    log::debug!("equalized {} '{class}' elements to {width}px", ids.len());
    width
}

/// Wait `delay`, then equalize the widths of `class`.
pub async fn equalize_widths(document: Rc<RefCell<Document>>, class: String, delay: Duration) -> u16 {
    tokio::time::sleep(delay).await;
    apply_equal_width(&mut document.borrow_mut(), &class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_width_of_nothing_is_zero() {
        assert_eq!(max_width(Vec::new()), 0);
        assert_eq!(max_width([3, 9, 4]), 9);
    }
}
