//! # selection_core
//!
//! Tree-agnostic selection ranges and container clipping.
//!
//! This crate provides the building blocks for asking "which part of the
//! user's selection lies inside this node?":
//! - [`DocumentTree`]: the read-only tree queries the algorithms need
//! - [`BoundaryPoint`] and [`Range`]: positions and spans in document order
//! - [`clip`]: intersects one range with a container's content
//! - [`ranges_inside`]: clips every range of a [`Selection`]
//!
//! ## Design Principles
//!
//! This crate does not know about any concrete document model, event source
//! or platform selection object. Hosts pass the tree and the selection in
//! explicitly; nothing is read from global state and nothing is mutated.
//!
//! ## Integration
//!
//! Implement [`DocumentTree`] for your node storage:
//! ```ignore
//! impl DocumentTree for MyDom {
//!     type Node = MyNodeId;
//!     fn parent(&self, node: MyNodeId) -> Option<MyNodeId> { ... }
//!     fn children(&self, node: MyNodeId) -> &[MyNodeId] { ... }
//!     fn content_length(&self, node: MyNodeId) -> usize { ... }
//!     fn contains(&self, node: MyNodeId) -> bool { ... }
//! }
//! ```

mod clip;
mod config;
mod error;
mod order;
mod point;
mod request;
mod scan;
mod selection;
mod tree;

#[cfg(test)]
mod test_tree;

pub use clip::{Clip, clip, clip_with};
pub use config::{CaretPolicy, ClipConfig};
pub use error::{ClipError, RangeError};
pub use order::{compare_nodes, compare_points};
pub use point::{BoundaryPoint, Range};
pub use request::RangeRequest;
pub use scan::{ranges_inside, ranges_inside_with};
pub use selection::Selection;
pub use tree::{
    Ancestors, DocumentTree, common_ancestor, inclusive_ancestors, index_in_parent,
    is_inclusive_ancestor, last_descendant, max_offset,
};
