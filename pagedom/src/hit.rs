use crate::element::Element;

/// Chain of element IDs from `root` down to `id`, both ends included.
/// Returns None if `id` is not in the tree.
pub fn path_to(root: &Element, id: &str) -> Option<Vec<String>> {
    let mut path = Vec::new();
    if path_to_recursive(root, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn path_to_recursive(element: &Element, id: &str, path: &mut Vec<String>) -> bool {
    path.push(element.id.clone());

    if element.id == id {
        return true;
    }

    for child in &element.children {
        if path_to_recursive(child, id, path) {
            return true;
        }
    }

    path.pop();
    false
}

/// Whether `id` is `ancestor` itself or lies somewhere below it.
pub fn contains(root: &Element, ancestor: &str, id: &str) -> bool {
    match path_to(root, id) {
        Some(path) => path.iter().any(|p| p == ancestor),
        None => false,
    }
}
