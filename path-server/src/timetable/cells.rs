//! Dealing body cells out to stations.
//!
//! A visual row can hold more cells than there are stations, since the
//! site packs several runs of a train into one row. A single cursor walks
//! every body cell in document order and is reset to the first station
//! once a full run has been recorded.

use crate::document::{Element, Node};
use crate::domain::ClockTime;

/// Cell text meaning "this train does not stop here".
pub const PLACEHOLDER: &str = "---";

/// Distribute the time cells of every `<tbody>` into `n` station columns.
///
/// The cursor moves on by one for every cell that has content, whether or
/// not it holds a time. It is only wrapped back to 0 when a time is about
/// to be recorded, so a run of placeholders can leave it past `n` until
/// the next time arrives. Cells with no child nodes at all do not move it.
///
/// ```
/// use path_server::document::Document;
/// use path_server::document::find_table;
/// use path_server::timetable::assign_cells;
///
/// let doc = Document::parse(
///     "<table><tbody><tr><td>8:00AM</td><td>---</td><td>9:00AM</td></tr></tbody></table>",
/// );
/// let columns = assign_cells(find_table(doc.root()).unwrap(), 2);
/// assert_eq!(columns[0].len(), 2);
/// assert!(columns[1].is_empty());
/// ```
pub fn assign_cells(table: &Element, n: usize) -> Vec<Vec<ClockTime>> {
    let mut columns = vec![Vec::new(); n];
    if n == 0 {
        return columns;
    }

    let cells = table
        .child_elements()
        .filter(|section| section.is("tbody"))
        .flat_map(Element::child_elements)
        .flat_map(Element::child_elements)
        .filter(|cell| !cell.children().is_empty());

    let mut index = 0;
    for cell in cells {
        let Some(time) = cell_time(cell) else {
            index += 1;
            continue;
        };

        if index >= n {
            index = 0;
        }
        columns[index].push(time);
        index += 1;
    }

    columns
}

/// The time held in a cell, if any.
///
/// PM times are wrapped in `<strong>`, so an element first child is
/// unwrapped one level.
fn cell_time(cell: &Element) -> Option<ClockTime> {
    let text = match cell.children().first()? {
        Node::Text(text) => text.as_str(),
        Node::Element(wrapper) => wrapper.children().first()?.as_text()?,
        Node::Comment(_) => return None,
    };

    let text = text.trim();
    if text == PLACEHOLDER {
        return None;
    }
    ClockTime::parse(text).ok()
}
