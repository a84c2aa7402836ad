use std::fmt;

use log::debug;
use selection_core::DocumentTree;

use crate::types::{Id, NodeId, NodeKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeError {
    UnknownNode(Id),
    /// The parent is a text or comment node, or the child is the document.
    WrongNodeKind(Id),
    /// The child is already attached somewhere else.
    InvalidParent { parent: Id, child: Id },
    CycleDetected { parent: Id, child: Id },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::UnknownNode(id) => write!(f, "unknown node {}", id.0),
            TreeError::WrongNodeKind(id) => write!(f, "node {} cannot take this position", id.0),
            TreeError::InvalidParent { parent, child } => {
                write!(f, "node {} already has a parent, cannot move under {}", child.0, parent.0)
            }
            TreeError::CycleDetected { parent, child } => {
                write!(f, "appending {} under {} would create a cycle", child.0, parent.0)
            }
        }
    }
}

impl std::error::Error for TreeError {}

#[derive(Clone, Debug)]
struct NodeRecord {
    kind: NodeKind,
    parent: Option<Id>,
    children: Vec<Id>,
}

/// Arena-backed document tree.
///
/// Nodes are created detached and attached with [`Document::append_child`].
/// Parent links are plain ids, so a child never owns its parent. Nodes are
/// never removed; an id stays valid for the lifetime of the document.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<NodeRecord>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeRecord {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    #[inline]
    pub fn root(&self) -> Id {
        Id::ROOT
    }

    /// Number of nodes created so far, detached ones included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn insert(&mut self, kind: NodeKind) -> Id {
        let id = Id(self.nodes.len() as NodeId);
        self.nodes.push(NodeRecord {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    pub fn create_element(&mut self, name: impl Into<String>) -> Id {
        self.insert(NodeKind::Element { name: name.into() })
    }

    pub fn create_text(&mut self, text: impl Into<String>) -> Id {
        self.insert(NodeKind::Text {
            label: None,
            text: text.into(),
        })
    }

    /// Creates a text node that [`Document::find`] can locate by `label`.
    pub fn create_labeled_text(&mut self, label: impl Into<String>, text: impl Into<String>) -> Id {
        self.insert(NodeKind::Text {
            label: Some(label.into()),
            text: text.into(),
        })
    }

    pub fn create_comment(&mut self, text: impl Into<String>) -> Id {
        self.insert(NodeKind::Comment { text: text.into() })
    }

    pub fn append_child(&mut self, parent: Id, child: Id) -> Result<(), TreeError> {
        let parent_kind = &self.record(parent).ok_or(TreeError::UnknownNode(parent))?.kind;
        if !parent_kind.can_have_children() {
            debug!(target: "dom_tree", "rejecting child under leaf {parent:?}");
            return Err(TreeError::WrongNodeKind(parent));
        }
        let child_record = self.record(child).ok_or(TreeError::UnknownNode(child))?;
        if child_record.kind == NodeKind::Document {
            return Err(TreeError::WrongNodeKind(child));
        }
        if child_record.parent.is_some() {
            debug!(target: "dom_tree", "rejecting reparent of {child:?} under {parent:?}");
            return Err(TreeError::InvalidParent { parent, child });
        }
        if self.is_inclusive_ancestor(child, parent) {
            debug!(target: "dom_tree", "rejecting cycle {child:?} under {parent:?}");
            return Err(TreeError::CycleDetected { parent, child });
        }

        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
        Ok(())
    }

    /// Creates an element and appends it to `parent` in one step.
    pub fn append_element(&mut self, parent: Id, name: impl Into<String>) -> Result<Id, TreeError> {
        let id = self.create_element(name);
        self.append_child(parent, id)?;
        Ok(id)
    }

    /// Creates a text node and appends it to `parent` in one step.
    pub fn append_text(&mut self, parent: Id, text: impl Into<String>) -> Result<Id, TreeError> {
        let id = self.create_text(text);
        self.append_child(parent, id)?;
        Ok(id)
    }

    pub fn kind(&self, id: Id) -> Option<&NodeKind> {
        self.record(id).map(|record| &record.kind)
    }

    /// Concatenated text of all text descendants of `id`.
    pub fn text_content(&self, id: Id) -> String {
        let mut out = String::new();
        for node in self.preorder(id) {
            if let Some(NodeKind::Text { text, .. }) = self.kind(node) {
                out.push_str(text);
            }
        }
        out
    }

    fn record(&self, id: Id) -> Option<&NodeRecord> {
        self.nodes.get(id.index())
    }

    fn is_inclusive_ancestor(&self, ancestor: Id, node: Id) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.record(id).and_then(|record| record.parent);
        }
        false
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentTree for Document {
    type Node = Id;

    fn parent(&self, node: Id) -> Option<Id> {
        self.record(node)?.parent
    }

    fn children(&self, node: Id) -> &[Id] {
        self.record(node)
            .map(|record| record.children.as_slice())
            .unwrap_or(&[])
    }

    fn content_length(&self, node: Id) -> usize {
        self.record(node)
            .map(|record| record.kind.content_length())
            .unwrap_or(0)
    }

    fn contains(&self, node: Id) -> bool {
        node.index() < self.nodes.len()
    }
}
