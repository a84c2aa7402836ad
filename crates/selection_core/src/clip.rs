//! Clipping a range to the content of a container node.
//!
//! The result is the intersection of the range with the container's full
//! span `(container, 0)..(container, max_offset)`, expressed in terms of the
//! range's own boundary nodes wherever they survive:
//!
//! - a range already inside the container is returned unchanged
//! - a start before the container clamps to `(container, 0)`
//! - an end after the container clamps to the end of its last descendant
//! - a range that never meets the container is [`Clip::Empty`]

use log::trace;

use crate::config::{CaretPolicy, ClipConfig};
use crate::error::ClipError;
use crate::point::{BoundaryPoint, Range};
use crate::tree::{
    DocumentTree, common_ancestor, index_in_parent, is_inclusive_ancestor, last_descendant,
    max_offset,
};

/// Outcome of clipping one range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clip<N> {
    /// The part of the range inside the container.
    Inside(Range<N>),
    /// The range does not overlap the container.
    Empty,
}

impl<N> Clip<N> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Clip::Empty)
    }

    #[inline]
    pub fn into_range(self) -> Option<Range<N>> {
        match self {
            Clip::Inside(range) => Some(range),
            Clip::Empty => None,
        }
    }
}

/// Clips `range` to `container` with the default configuration.
pub fn clip<T>(
    tree: &T,
    container: T::Node,
    range: Range<T::Node>,
) -> Result<Clip<T::Node>, ClipError<T::Node>>
where
    T: DocumentTree + ?Sized,
{
    clip_with(tree, container, range, ClipConfig::default())
}

/// Clips `range` to `container`.
///
/// Errors only report ranges or containers that do not fit `tree`; a range
/// outside the container is `Ok(Clip::Empty)`.
pub fn clip_with<T>(
    tree: &T,
    container: T::Node,
    range: Range<T::Node>,
    config: ClipConfig,
) -> Result<Clip<T::Node>, ClipError<T::Node>>
where
    T: DocumentTree + ?Sized,
{
    if !tree.contains(container) {
        return Err(ClipError::UnknownNode(container));
    }
    let (start, end) = (range.start(), range.end());
    check_point(tree, start)?;
    check_point(tree, end)?;

    let Some(ancestor) = common_ancestor(tree, start.node, end.node) else {
        return Err(ClipError::Disconnected {
            start: start.node,
            end: end.node,
        });
    };

    if is_inclusive_ancestor(tree, container, ancestor) {
        trace!(target: "selection.clip", "{ancestor:?} lies inside {container:?}, range kept");
        return Ok(Clip::Inside(range));
    }

    if range.is_collapsed() {
        let clipped = match config.caret {
            CaretPolicy::Reject => Clip::Empty,
            CaretPolicy::SnapAdjacent => snap_caret(tree, container, start),
        };
        trace!(target: "selection.clip", "caret {start:?} outside {container:?}: {clipped:?}");
        return Ok(clipped);
    }

    let clipper = Clipper {
        tree,
        container,
        start,
        end,
    };
    match clipper.visit(ancestor, Walk::Before) {
        Step::Done(clipped) => {
            trace!(target: "selection.clip", "clipped to {clipped:?}");
            Ok(Clip::Inside(clipped))
        }
        Step::Empty => {
            trace!(target: "selection.clip", "no overlap with {container:?}");
            Ok(Clip::Empty)
        }
        Step::Continue(_) => {
            debug_assert!(false, "range end must be reachable from the common ancestor");
            Err(ClipError::EndNotReached { end: end.node })
        }
    }
}

fn check_point<T: DocumentTree + ?Sized>(
    tree: &T,
    point: BoundaryPoint<T::Node>,
) -> Result<(), ClipError<T::Node>> {
    if !tree.contains(point.node) {
        return Err(ClipError::UnknownNode(point.node));
    }
    let max = max_offset(tree, point.node);
    if point.offset > max {
        return Err(ClipError::OffsetOutOfBounds {
            node: point.node,
            offset: point.offset,
            max,
        });
    }
    Ok(())
}

fn snap_caret<T: DocumentTree + ?Sized>(
    tree: &T,
    container: T::Node,
    caret: BoundaryPoint<T::Node>,
) -> Clip<T::Node> {
    if tree.parent(container) != Some(caret.node) {
        return Clip::Empty;
    }
    let Some(index) = index_in_parent(tree, container) else {
        return Clip::Empty;
    };
    let snapped = if caret.offset == index {
        BoundaryPoint::new(container, 0)
    } else if caret.offset == index + 1 {
        BoundaryPoint::new(container, max_offset(tree, container))
    } else {
        return Clip::Empty;
    };
    Clip::Inside(Range::from_ordered(snapped, snapped))
}

/// How far the walk has got towards the start of the intersection.
#[derive(Clone, Copy, Debug)]
enum Walk<N> {
    Before,
    /// The range start was passed while still outside the container.
    StartSeen,
    /// The container was entered before the range start.
    ContainerSeen,
    /// Both were seen; the intersection starts at this point.
    Open(BoundaryPoint<N>),
}

impl<N: Copy + Eq> Walk<N> {
    fn pass_start(self, start: BoundaryPoint<N>) -> Self {
        match self {
            Walk::Before => Walk::StartSeen,
            Walk::ContainerSeen => Walk::Open(start),
            other => other,
        }
    }

    fn enter_container(self, container: N) -> Self {
        match self {
            Walk::Before => Walk::ContainerSeen,
            Walk::StartSeen => Walk::Open(BoundaryPoint::new(container, 0)),
            other => other,
        }
    }

    fn close_at(self, end: BoundaryPoint<N>) -> Step<N> {
        match self {
            Walk::Open(start) => Step::Done(Range::from_ordered(start, end)),
            _ => Step::Empty,
        }
    }
}

enum Step<N> {
    Continue(Walk<N>),
    Done(Range<N>),
    Empty,
}

struct Clipper<'a, T: DocumentTree + ?Sized> {
    tree: &'a T,
    container: T::Node,
    start: BoundaryPoint<T::Node>,
    end: BoundaryPoint<T::Node>,
}

impl<T: DocumentTree + ?Sized> Clipper<'_, T> {
    /// Pre-order visit of `node`.
    fn visit(&self, node: T::Node, mut walk: Walk<T::Node>) -> Step<T::Node> {
        let children = self.tree.children(node);
        let is_container = node == self.container;

        // Points on a childless node are met on entry. So is a start on the
        // container itself, which then clamps to (container, 0).
        if self.start.node == node && (children.is_empty() || is_container) {
            walk = walk.pass_start(self.start);
        }
        if is_container {
            walk = walk.enter_container(node);
        }

        if children.is_empty() {
            if self.end.node == node {
                return walk.close_at(self.end);
            }
            if is_container {
                return self.close_past_content(walk);
            }
            return Step::Continue(walk);
        }

        let count = children.len();
        for (slot, &child) in children.iter().enumerate() {
            walk = match self.slot(node, slot, walk) {
                Step::Continue(walk) => walk,
                finished => return finished,
            };
            walk = match self.visit(child, walk) {
                Step::Continue(walk) => walk,
                finished => return finished,
            };
        }
        match self.slot(node, count, walk) {
            Step::Continue(walk) if is_container => self.close_past_content(walk),
            step => step,
        }
    }

    /// Checks the boundary point sitting before child `slot` of `node`.
    fn slot(&self, node: T::Node, slot: usize, mut walk: Walk<T::Node>) -> Step<T::Node> {
        let point = BoundaryPoint::new(node, slot);
        if self.start == point && node != self.container {
            walk = walk.pass_start(point);
        }
        if self.end == point {
            return walk.close_at(point);
        }
        Step::Continue(walk)
    }

    /// The range end lies past the container: clamp it to the end of the
    /// container's last descendant.
    ///
    /// A start on the last slot of an element on the rightmost path already
    /// lies past that point; the result is then a caret at the start.
    fn close_past_content(&self, walk: Walk<T::Node>) -> Step<T::Node> {
        let last = last_descendant(self.tree, self.container);
        let last = BoundaryPoint::new(last, max_offset(self.tree, last));
        trace!(target: "selection.clip", "container content ends at {last:?}");
        match walk {
            Walk::Open(start) if self.ends_content(start) => walk.close_at(start),
            _ => walk.close_at(last),
        }
    }

    /// Returns `true` for `(n, child_count)` where `n` is a node with children
    /// on the container's rightmost path.
    fn ends_content(&self, point: BoundaryPoint<T::Node>) -> bool {
        let children = self.tree.children(point.node);
        !children.is_empty()
            && point.offset == children.len()
            && is_inclusive_ancestor(self.tree, self.container, point.node)
            && last_descendant(self.tree, point.node) == last_descendant(self.tree, self.container)
    }
}
