use selection_core::DocumentTree;

use crate::{Document, Id};

/// Document-order iterator over a subtree.
pub struct Preorder<'a> {
    doc: &'a Document,
    stack: Vec<Id>,
}

impl Iterator for Preorder<'_> {
    type Item = Id;

    fn next(&mut self) -> Option<Id> {
        let id = self.stack.pop()?;
        // reversed so the first child is popped first
        self.stack.extend(self.doc.children(id).iter().rev().copied());
        Some(id)
    }
}

impl Document {
    /// Iterates `start` and its descendants in document order.
    pub fn preorder(&self, start: Id) -> Preorder<'_> {
        let stack = if self.contains(start) {
            vec![start]
        } else {
            Vec::new()
        };
        Preorder { doc: self, stack }
    }

    /// First attached node named `name` (element tag or text label).
    pub fn find(&self, name: &str) -> Option<Id> {
        self.preorder(self.root())
            .find(|&id| self.kind(id).and_then(|kind| kind.name()) == Some(name))
    }
}
