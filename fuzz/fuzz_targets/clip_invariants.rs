#![no_main]

use std::cmp::Ordering;

use dom_tree::{Document, Id};
use libfuzzer_sys::fuzz_target;
use selection_core::{
    BoundaryPoint, Clip, DocumentTree, Range, clip, compare_points, max_offset,
};

const MAX_NODES: usize = 64;

/// Builds a tree from `bytes`: each byte appends an element or a text node
/// under one of the existing elements.
fn build(bytes: &[u8]) -> (Document, Vec<Id>) {
    let mut doc = Document::new();
    let mut elements = vec![doc.root()];
    let mut nodes = vec![doc.root()];
    for &byte in bytes.iter().take(MAX_NODES) {
        let parent = elements[usize::from(byte >> 2) % elements.len()];
        let created = if byte & 1 == 0 {
            doc.append_element(parent, "e")
        } else {
            doc.append_text(parent, "x".repeat(usize::from(byte >> 5)))
        };
        let Ok(id) = created else { continue };
        if byte & 1 == 0 {
            elements.push(id);
        }
        nodes.push(id);
    }
    (doc, nodes)
}

fn point(doc: &Document, nodes: &[Id], node: u8, offset: u8) -> BoundaryPoint<Id> {
    let node = nodes[usize::from(node) % nodes.len()];
    let offset = usize::from(offset) % (max_offset(doc, node) + 1);
    BoundaryPoint::new(node, offset)
}

fn before_or_at(doc: &Document, a: BoundaryPoint<Id>, b: BoundaryPoint<Id>) -> bool {
    compare_points(doc, a, b) != Some(Ordering::Greater)
}

fuzz_target!(|data: &[u8]| {
    let Some((picks, shape)) = data.split_first_chunk::<5>() else {
        return;
    };
    let (doc, nodes) = build(shape);
    let container = nodes[usize::from(picks[0]) % nodes.len()];
    let a = point(&doc, &nodes, picks[1], picks[2]);
    let b = point(&doc, &nodes, picks[3], picks[4]);
    let Ok(range) = Range::new(&doc, a, b) else {
        return;
    };

    let result = clip(&doc, container, range).expect("points come from the tree");
    let Clip::Inside(out) = result else { return };
    let span = Range::full_span(&doc, container).expect("container is attached");

    assert!(before_or_at(&doc, out.start(), out.end()));
    assert!(before_or_at(&doc, span.start(), out.start()));
    assert!(before_or_at(&doc, out.end(), span.end()));
    assert!(before_or_at(&doc, out.end(), range.end()));
    if before_or_at(&doc, range.end(), span.end()) {
        assert_eq!(out.end(), range.end());
    }
    assert!(doc.contains(out.start().node) && doc.contains(out.end().node));
    assert_eq!(clip(&doc, container, out), Ok(Clip::Inside(out)));
});
