//! Selection representation.

use std::cmp::Ordering;

use crate::order::compare_points;
use crate::point::{BoundaryPoint, Range};
use crate::tree::{DocumentTree, index_in_parent, max_offset};

/// An ordered list of zero or more ranges.
///
/// Hosts usually expose a single range, but nothing here assumes it. Ranges
/// are expected (not required) to be disjoint and in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection<N> {
    ranges: Vec<Range<N>>,
}

impl<N> Default for Selection<N> {
    fn default() -> Self {
        Self { ranges: Vec::new() }
    }
}

impl<N: Copy + Eq> Selection<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ranges(ranges: Vec<Range<N>>) -> Self {
        Self { ranges }
    }

    pub fn push(&mut self, range: Range<N>) {
        self.ranges.push(range);
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    #[inline]
    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn range_at(&self, index: usize) -> Option<&Range<N>> {
        self.ranges.get(index)
    }

    #[inline]
    pub fn ranges(&self) -> &[Range<N>] {
        &self.ranges
    }

    /// Returns `true` if the selection is empty or its only range is a caret.
    pub fn is_collapsed(&self) -> bool {
        match self.ranges.as_slice() {
            [] => true,
            [only] => only.is_collapsed(),
            _ => false,
        }
    }

    /// Returns `true` if any range reaches into `node`, even partially.
    ///
    /// `node` spans from the point just before it in its parent to the point
    /// just after it, so a range ending right at the node's edge still
    /// touches it. A range touches when it starts at or before the node's
    /// end and ends at or after its start. Nodes from another tree never
    /// touch.
    pub fn touches<T>(&self, tree: &T, node: N) -> bool
    where
        T: DocumentTree<Node = N> + ?Sized,
    {
        if !tree.contains(node) {
            return false;
        }
        let (first, last) = match (tree.parent(node), index_in_parent(tree, node)) {
            (Some(parent), Some(index)) => (
                BoundaryPoint::new(parent, index),
                BoundaryPoint::new(parent, index + 1),
            ),
            _ => (
                BoundaryPoint::new(node, 0),
                BoundaryPoint::new(node, max_offset(tree, node)),
            ),
        };
        self.ranges.iter().any(|range| {
            let starts_before_end = matches!(
                compare_points(tree, range.start(), last),
                Some(Ordering::Less | Ordering::Equal)
            );
            let ends_after_start = matches!(
                compare_points(tree, range.end(), first),
                Some(Ordering::Greater | Ordering::Equal)
            );
            starts_before_end && ends_after_start
        })
    }
}
