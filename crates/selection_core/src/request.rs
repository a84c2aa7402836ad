//! Building ranges from partially specified endpoints.

use crate::error::RangeError;
use crate::point::{BoundaryPoint, Range};
use crate::tree::DocumentTree;

/// Endpoints of a range to build, with every part but the start node optional.
///
/// Missing parts are filled in as follows:
/// - no start offset: `0`
/// - no end node: the start node
/// - no end offset: the start offset (so a bare request is a caret)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeRequest<N> {
    pub start_node: N,
    pub start_offset: Option<usize>,
    pub end_node: Option<N>,
    pub end_offset: Option<usize>,
}

impl<N: Copy + Eq> RangeRequest<N> {
    pub fn new(start_node: N) -> Self {
        Self {
            start_node,
            start_offset: None,
            end_node: None,
            end_offset: None,
        }
    }

    pub fn start_offset(mut self, offset: usize) -> Self {
        self.start_offset = Some(offset);
        self
    }

    pub fn end_node(mut self, node: N) -> Self {
        self.end_node = Some(node);
        self
    }

    pub fn end_offset(mut self, offset: usize) -> Self {
        self.end_offset = Some(offset);
        self
    }

    /// Fills in the defaults and validates the result against `tree`.
    pub fn resolve<T>(&self, tree: &T) -> Result<Range<N>, RangeError<N>>
    where
        T: DocumentTree<Node = N> + ?Sized,
    {
        let start_offset = self.start_offset.unwrap_or(0);
        let start = BoundaryPoint::new(self.start_node, start_offset);
        let end = BoundaryPoint::new(
            self.end_node.unwrap_or(self.start_node),
            self.end_offset.unwrap_or(start_offset),
        );
        Range::new(tree, start, end)
    }
}
