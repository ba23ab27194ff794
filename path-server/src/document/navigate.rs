//! Locating the timetable in a document.

use super::Element;

/// First `<table>` element in document order (depth-first, pre-order).
///
/// The root itself counts.
pub fn find_table(root: &Element) -> Option<&Element> {
    if root.is("table") {
        return Some(root);
    }
    root.child_elements().find_map(find_table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, Node};

    fn table(id: &str) -> Node {
        Element::new("table", vec![Node::text(id)]).into()
    }

    #[test]
    fn finds_nested_table() {
        let doc = Document::parse(
            "<html><body><div><p>intro</p><div><table id=\"t\"></table></div></div></body></html>",
        );
        assert!(find_table(doc.root()).is_some());
    }

    #[test]
    fn first_in_document_order_wins() {
        // Deep table in the first branch comes before a shallow one in the second.
        let root = Element::new(
            "body",
            vec![
                Element::new("div", vec![Element::new("div", vec![table("deep")]).into()]).into(),
                table("shallow"),
            ],
        );
        let found = find_table(&root).unwrap();
        assert_eq!(found.children()[0].as_text(), Some("deep"));
    }

    #[test]
    fn root_can_be_the_table() {
        let root = Element::new("table", vec![]);
        assert!(std::ptr::eq(find_table(&root).unwrap(), &root));
    }

    #[test]
    fn no_table() {
        let doc = Document::parse("<html><body><p>Service suspended</p></body></html>");
        assert!(find_table(doc.root()).is_none());
    }
}
