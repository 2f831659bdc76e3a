use crate::element::Element;
use crate::event::NavDirection;

/// Collect all elements in sequential focus order (`tabindex="0"`), in tree order.
pub fn collect_focusable(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(element, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.is_tabbable() {
        result.push(element.id.clone());
    }
    for child in &element.children {
        collect_focusable_recursive(child, result);
    }
}

/// Pick the neighbour of `current` in `candidates`.
///
/// No wraparound: stepping past either end yields None, as does a `current`
/// that is not among the candidates.
pub fn step_focus(candidates: &[String], current: &str, direction: NavDirection) -> Option<String> {
    let index = candidates.iter().position(|id| id == current)?;
    let next = match direction {
        NavDirection::Down => index.checked_add(1).filter(|i| *i < candidates.len())?,
        NavDirection::Up => index.checked_sub(1)?,
    };
    log::trace!("[step_focus] {current} -> {} ({direction:?})", candidates[next]);
    Some(candidates[next].clone())
}
