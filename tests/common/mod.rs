#![allow(dead_code)]

use seltrack::{BoundaryPoint, Document, DocumentTree, Id, Range, fixture, max_offset};

pub fn doc(src: &str) -> Document {
    fixture::parse(src).unwrap_or_else(|err| panic!("bad fixture {src:?}: {err}"))
}

pub fn node(doc: &Document, name: &str) -> Id {
    doc.find(name)
        .unwrap_or_else(|| panic!("no node named {name:?}"))
}

pub fn pt(doc: &Document, name: &str, offset: usize) -> BoundaryPoint<Id> {
    BoundaryPoint::new(node(doc, name), offset)
}

pub fn range(doc: &Document, start: (&str, usize), end: (&str, usize)) -> Range<Id> {
    Range::new(doc, pt(doc, start.0, start.1), pt(doc, end.0, end.1))
        .unwrap_or_else(|err| panic!("bad range {start:?}..{end:?}: {err}"))
}

/// Every boundary point of every attached node, in document order of nodes.
pub fn all_points(doc: &Document) -> Vec<BoundaryPoint<Id>> {
    doc.preorder(doc.root())
        .flat_map(|id| (0..=max_offset(doc, id)).map(move |offset| BoundaryPoint::new(id, offset)))
        .collect()
}

pub fn is_leaf(doc: &Document, id: Id) -> bool {
    doc.children(id).is_empty()
}
