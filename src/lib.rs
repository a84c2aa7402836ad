//! # seltrack
//!
//! Find the part of a document selection that lies inside a container node.
//!
//! This crate re-exports the tree-agnostic algorithms from `selection_core`
//! together with the arena document from `dom_tree`:
//!
//! ```
//! use seltrack::{BoundaryPoint, Range, clip, fixture};
//!
//! let doc = fixture::parse(r#"root[container[a("hello"), b("world")]]"#).unwrap();
//! let root = doc.find("root").unwrap();
//! let container = doc.find("container").unwrap();
//! let b = doc.find("b").unwrap();
//!
//! let range = Range::new(&doc, BoundaryPoint::new(root, 0), BoundaryPoint::new(b, 3)).unwrap();
//! let inside = clip(&doc, container, range).unwrap().into_range().unwrap();
//! assert_eq!(inside.start(), BoundaryPoint::new(container, 0));
//! assert_eq!(inside.end(), BoundaryPoint::new(b, 3));
//! ```

pub use dom_tree::{Document, Id, NodeKind, TreeError, fixture, perf_fixtures};
pub use selection_core::*;
