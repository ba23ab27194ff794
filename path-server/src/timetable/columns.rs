//! Station names from the table header.

use crate::document::{Element, Node};

/// Station names from every `<thead>` row, in order.
///
/// Each header cell contributes its first non-blank text, trimmed. Cells
/// holding only whitespace, such as an `&nbsp;` corner cell, are not
/// stations. No header section gives an empty list.
pub fn extract_columns(table: &Element) -> Vec<String> {
    table
        .child_elements()
        .filter(|section| section.is("thead"))
        .flat_map(Element::child_elements)
        .flat_map(Element::child_elements)
        .filter_map(|cell| cell.children().iter().find_map(Node::first_text))
        .map(|name| name.trim().to_string())
        .collect()
}
