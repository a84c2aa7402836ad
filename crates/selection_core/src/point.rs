//! Boundary points and ranges.

use std::cmp::Ordering;

use crate::error::RangeError;
use crate::order::compare_points;
use crate::tree::{DocumentTree, max_offset};

/// A position in the tree: a node plus an offset into it.
///
/// For a leaf the offset is a character index in `0..=content_length`; for a
/// node with children it is a child index in `0..=child_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundaryPoint<N> {
    pub node: N,
    pub offset: usize,
}

impl<N> BoundaryPoint<N> {
    #[inline]
    pub const fn new(node: N, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// Checks that `point` names a node of `tree` and an offset it can hold.
pub(crate) fn validate_point<T: DocumentTree + ?Sized>(
    tree: &T,
    point: BoundaryPoint<T::Node>,
) -> Result<(), RangeError<T::Node>> {
    if !tree.contains(point.node) {
        return Err(RangeError::UnknownNode(point.node));
    }
    let max = max_offset(tree, point.node);
    if point.offset > max {
        return Err(RangeError::OffsetOutOfBounds {
            node: point.node,
            offset: point.offset,
            max,
        });
    }
    Ok(())
}

/// An ordered pair of boundary points.
///
/// The range is always normalized such that `start <= end` in document order;
/// the only way to obtain one is through a constructor that checks this
/// against a tree. Ranges reference nodes but never own them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Range<N> {
    start: BoundaryPoint<N>,
    end: BoundaryPoint<N>,
}

impl<N: Copy + Eq> Range<N> {
    /// Builds a range after validating both points and their order.
    pub fn new<T>(
        tree: &T,
        start: BoundaryPoint<N>,
        end: BoundaryPoint<N>,
    ) -> Result<Self, RangeError<N>>
    where
        T: DocumentTree<Node = N> + ?Sized,
    {
        validate_point(tree, start)?;
        validate_point(tree, end)?;
        match compare_points(tree, start, end) {
            None => Err(RangeError::Disconnected {
                start: start.node,
                end: end.node,
            }),
            Some(Ordering::Greater) => Err(RangeError::Reversed),
            Some(_) => Ok(Self { start, end }),
        }
    }

    /// A collapsed range at `point`.
    pub fn caret<T>(tree: &T, point: BoundaryPoint<N>) -> Result<Self, RangeError<N>>
    where
        T: DocumentTree<Node = N> + ?Sized,
    {
        validate_point(tree, point)?;
        Ok(Self {
            start: point,
            end: point,
        })
    }

    /// The range covering all of `node`'s content: `(node, 0)..(node, max)`.
    pub fn full_span<T>(tree: &T, node: N) -> Result<Self, RangeError<N>>
    where
        T: DocumentTree<Node = N> + ?Sized,
    {
        if !tree.contains(node) {
            return Err(RangeError::UnknownNode(node));
        }
        Ok(Self {
            start: BoundaryPoint::new(node, 0),
            end: BoundaryPoint::new(node, max_offset(tree, node)),
        })
    }

    /// Trusted constructor for points the clipper produced in document order.
    #[inline]
    pub(crate) fn from_ordered(start: BoundaryPoint<N>, end: BoundaryPoint<N>) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn start(&self) -> BoundaryPoint<N> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> BoundaryPoint<N> {
        self.end
    }

    /// Returns `true` if start and end are the same point.
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}
