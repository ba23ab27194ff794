//! Read-only document trees.
//!
//! Timetable pages are parsed with `scraper` (html5ever), which recovers
//! from the sloppy markup these pages tend to have, and then copied into a
//! small owned tree. The owned tree is `Send + Sync`, so it can cross await
//! points and threads where the parser's own tree cannot.

mod navigate;

use scraper::{ElementRef, Html};

pub use navigate::find_table;

/// A node in a document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

impl Node {
    /// Shorthand for a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// The element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// The text, if this node is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Child nodes. Only elements have any.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => element.children(),
            _ => &[],
        }
    }

    /// First text in document order that is not only whitespace.
    ///
    /// Formatting whitespace (newlines, indentation, `&nbsp;`) around
    /// wrapper elements is passed over, as are comments.
    ///
    /// ```
    /// use path_server::document::{Element, Node};
    ///
    /// let cell = Node::from(Element::new("th", vec![
    ///     Node::text("\n  "),
    ///     Element::new("strong", vec![Node::text(" Grove St ")]).into(),
    /// ]));
    /// assert_eq!(cell.first_text(), Some(" Grove St "));
    /// ```
    pub fn first_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) if !text.trim().is_empty() => Some(text),
            Node::Element(element) => element.children().iter().find_map(Node::first_text),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element with a lower-case tag name and its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    children: Vec<Node>,
}

impl Element {
    /// Create an element.
    pub fn new(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            tag: tag.into(),
            children,
        }
    }

    /// Tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether this element has the given tag.
    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }

    /// All child nodes in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements in document order, skipping text and comments.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }
}

/// A parsed HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Wrap an already built tree.
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Parse HTML. Never fails; malformed markup is repaired the way
    /// browsers repair it (e.g. a missing `<tbody>` is inserted).
    ///
    /// ```
    /// use path_server::document::Document;
    ///
    /// let doc = Document::parse("<p>Hi<table><tr><td>5:15AM</td></tr></table>");
    /// assert_eq!(doc.root().tag(), "html");
    /// ```
    pub fn parse(html: &str) -> Self {
        let html = Html::parse_document(html);
        Self {
            root: convert(html.root_element()),
        }
    }

    /// The root element (`<html>` for parsed documents).
    pub fn root(&self) -> &Element {
        &self.root
    }
}

/// Copy a parsed element and its subtree into an owned `Element`.
fn convert(element: ElementRef<'_>) -> Element {
    let children = element
        .children()
        .filter_map(|child| {
            if let Some(child_element) = ElementRef::wrap(child) {
                return Some(Node::Element(convert(child_element)));
            }
            let value = child.value();
            if let Some(text) = value.as_text() {
                let text: &str = text;
                return Some(Node::Text(text.to_owned()));
            }
            if let Some(comment) = value.as_comment() {
                let comment: &str = comment;
                return Some(Node::Comment(comment.to_owned()));
            }
            None
        })
        .collect();

    Element::new(element.value().name(), children)
}
