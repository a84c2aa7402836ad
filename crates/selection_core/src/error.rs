use std::fmt;

/// Why a range could not be built from the given boundary points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeError<N> {
    /// The node is not part of the tree the range was resolved against.
    UnknownNode(N),
    /// The offset is past the node's last boundary point.
    OffsetOutOfBounds { node: N, offset: usize, max: usize },
    /// The two boundary nodes live in different trees.
    Disconnected { start: N, end: N },
    /// The end boundary precedes the start boundary in document order.
    Reversed,
}

impl<N: fmt::Debug> fmt::Display for RangeError<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::UnknownNode(node) => write!(f, "unknown node: {node:?}"),
            RangeError::OffsetOutOfBounds { node, offset, max } => {
                write!(f, "offset {offset} out of bounds for {node:?} (max {max})")
            }
            RangeError::Disconnected { start, end } => {
                write!(f, "{start:?} and {end:?} do not share a root")
            }
            RangeError::Reversed => write!(f, "range end precedes range start"),
        }
    }
}

impl<N: fmt::Debug> std::error::Error for RangeError<N> {}

/// Contract violations detected while clipping.
///
/// These never describe "no overlap"; that is the normal
/// [`Clip::Empty`](crate::Clip::Empty) result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipError<N> {
    UnknownNode(N),
    OffsetOutOfBounds { node: N, offset: usize, max: usize },
    Disconnected { start: N, end: N },
    /// The walk over the common ancestor finished without meeting the range end.
    EndNotReached { end: N },
}

impl<N: fmt::Debug> fmt::Display for ClipError<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipError::UnknownNode(node) => write!(f, "unknown node: {node:?}"),
            ClipError::OffsetOutOfBounds { node, offset, max } => {
                write!(f, "offset {offset} out of bounds for {node:?} (max {max})")
            }
            ClipError::Disconnected { start, end } => {
                write!(f, "{start:?} and {end:?} do not share a root")
            }
            ClipError::EndNotReached { end } => {
                write!(f, "range end {end:?} not reachable from its common ancestor")
            }
        }
    }
}

impl<N: fmt::Debug> std::error::Error for ClipError<N> {}
