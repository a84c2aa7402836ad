//! Arena document tree for selection clipping.
//!
//! [`Document`] implements [`selection_core::DocumentTree`], so any range over
//! it can be ordered, clipped and scanned by `selection_core`.

mod document;
pub mod fixture;
mod outline;
pub mod perf_fixtures;
mod traverse;
mod types;

pub use document::{Document, TreeError};
pub use traverse::Preorder;
pub use types::{Id, NodeId, NodeKind};
