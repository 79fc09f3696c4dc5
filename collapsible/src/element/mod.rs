mod content;
mod node;

use std::collections::HashSet;

pub use content::Content;
pub(crate) use node::generate_id;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Collect all element IDs from the tree.
pub fn collect_element_ids(root: &Element) -> HashSet<String> {
    let mut ids = HashSet::new();
    collect_ids_recursive(root, &mut ids);
    ids
}

fn collect_ids_recursive(element: &Element, ids: &mut HashSet<String>) {
    ids.insert(element.id.clone());
    for child in element.content.children() {
        collect_ids_recursive(child, ids);
    }
}
