//! Document-order comparison of nodes and boundary points.

use std::cmp::Ordering;

use crate::point::BoundaryPoint;
use crate::tree::{DocumentTree, inclusive_ancestors, index_in_parent};

/// Compares two nodes by their pre-order position.
///
/// An ancestor precedes its descendants. Returns `None` for nodes under
/// different roots.
pub fn compare_nodes<T: DocumentTree + ?Sized>(
    tree: &T,
    a: T::Node,
    b: T::Node,
) -> Option<Ordering> {
    if a == b {
        return Some(Ordering::Equal);
    }
    let mut path_a: Vec<T::Node> = inclusive_ancestors(tree, a).collect();
    let mut path_b: Vec<T::Node> = inclusive_ancestors(tree, b).collect();
    path_a.reverse();
    path_b.reverse();
    if path_a.first() != path_b.first() {
        return None;
    }

    let shared = path_a
        .iter()
        .zip(&path_b)
        .take_while(|(x, y)| x == y)
        .count();
    match (path_a.get(shared), path_b.get(shared)) {
        // One path is a prefix of the other: the shorter one is the ancestor.
        (None, _) => Some(Ordering::Less),
        (_, None) => Some(Ordering::Greater),
        (Some(&branch_a), Some(&branch_b)) => {
            let siblings = tree.children(path_a[shared - 1]);
            let ia = siblings.iter().position(|&c| c == branch_a)?;
            let ib = siblings.iter().position(|&c| c == branch_b)?;
            Some(ia.cmp(&ib))
        }
    }
}

/// Compares two boundary points in document order.
///
/// Points on the same node compare by offset. Otherwise the point on the
/// earlier node comes first, unless that node is an ancestor of the other and
/// its offset lies past the child that leads to it.
pub fn compare_points<T: DocumentTree + ?Sized>(
    tree: &T,
    a: BoundaryPoint<T::Node>,
    b: BoundaryPoint<T::Node>,
) -> Option<Ordering> {
    if a.node == b.node {
        return Some(a.offset.cmp(&b.offset));
    }
    if compare_nodes(tree, a.node, b.node)? == Ordering::Greater {
        return compare_points(tree, b, a).map(Ordering::reverse);
    }

    // `a.node` precedes `b.node`; if it contains it, locate the child on the path.
    let child = inclusive_ancestors(tree, b.node).find(|&n| tree.parent(n) == Some(a.node));
    if let Some(child) = child {
        let index = index_in_parent(tree, child)?;
        if index < a.offset {
            return Some(Ordering::Greater);
        }
    }
    Some(Ordering::Less)
}
