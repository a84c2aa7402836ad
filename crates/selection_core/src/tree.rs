//! Read-only tree interface consumed by the clipper.
//!
//! This trait is the only coupling between this crate and a concrete document
//! model. Integration layers implement it for their own node storage; the
//! `dom_tree` crate provides an arena implementation.
//!
//! # Design Principles
//!
//! - Node handles are small `Copy` values (arena ids, indices, pointers)
//! - Parent links are relations only; nothing here owns a node
//! - Every method is a pure query, the tree is never mutated through it

use std::fmt::Debug;

/// Trait defining the tree queries needed to order and clip ranges.
pub trait DocumentTree {
    /// Handle identifying one node of the tree.
    type Node: Copy + Eq + Debug;

    /// Returns the parent of `node`, or `None` for a root (or unknown) node.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Returns the children of `node` in document order.
    ///
    /// Unknown nodes have no children.
    fn children(&self, node: Self::Node) -> &[Self::Node];

    /// Character count of a leaf node.
    ///
    /// Only consulted for nodes without children.
    fn content_length(&self, node: Self::Node) -> usize;

    /// Returns `true` if `node` belongs to this tree.
    fn contains(&self, node: Self::Node) -> bool;
}

/// Largest valid offset of a boundary point on `node`.
///
/// A node with children is addressed by child index, a leaf by character index.
pub fn max_offset<T: DocumentTree + ?Sized>(tree: &T, node: T::Node) -> usize {
    let children = tree.children(node);
    if children.is_empty() {
        tree.content_length(node)
    } else {
        children.len()
    }
}

/// Iterator over `node` and its ancestors, nearest first.
pub struct Ancestors<'a, T: DocumentTree + ?Sized> {
    tree: &'a T,
    next: Option<T::Node>,
}

impl<T: DocumentTree + ?Sized> Iterator for Ancestors<'_, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

/// Walks from `node` up to its root, `node` included.
pub fn inclusive_ancestors<T: DocumentTree + ?Sized>(tree: &T, node: T::Node) -> Ancestors<'_, T> {
    Ancestors {
        tree,
        next: Some(node),
    }
}

pub fn is_inclusive_ancestor<T: DocumentTree + ?Sized>(
    tree: &T,
    ancestor: T::Node,
    node: T::Node,
) -> bool {
    inclusive_ancestors(tree, node).any(|n| n == ancestor)
}

/// Position of `node` within its parent's children.
pub fn index_in_parent<T: DocumentTree + ?Sized>(tree: &T, node: T::Node) -> Option<usize> {
    let parent = tree.parent(node)?;
    tree.children(parent).iter().position(|&c| c == node)
}

/// Nearest node that is an inclusive ancestor of both `a` and `b`.
///
/// Returns `None` when the nodes live under different roots.
pub fn common_ancestor<T: DocumentTree + ?Sized>(
    tree: &T,
    a: T::Node,
    b: T::Node,
) -> Option<T::Node> {
    // O(depth^2), allocation free.
    inclusive_ancestors(tree, a).find(|&candidate| is_inclusive_ancestor(tree, candidate, b))
}

/// Deepest node on the rightmost path below `node` (or `node` itself).
pub fn last_descendant<T: DocumentTree + ?Sized>(tree: &T, node: T::Node) -> T::Node {
    let mut current = node;
    while let Some(&last) = tree.children(current).last() {
        current = last;
    }
    current
}
