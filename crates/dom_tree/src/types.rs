pub type NodeId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub NodeId);

impl Id {
    pub const ROOT: Id = Id(0);

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element {
        name: String,
    },
    Text {
        /// Optional handle used to look the node up by name.
        label: Option<String>,
        text: String,
    },
    Comment {
        text: String,
    },
}

impl NodeKind {
    pub fn can_have_children(&self) -> bool {
        matches!(self, NodeKind::Document | NodeKind::Element { .. })
    }

    /// Name used by lookups: tag name for elements, label for text.
    pub fn name(&self) -> Option<&str> {
        match self {
            NodeKind::Element { name } => Some(name),
            NodeKind::Text { label, .. } => label.as_deref(),
            NodeKind::Document | NodeKind::Comment { .. } => None,
        }
    }

    /// Character count of text and comment data; zero otherwise.
    pub fn content_length(&self) -> usize {
        match self {
            NodeKind::Text { text, .. } | NodeKind::Comment { text } => text.chars().count(),
            NodeKind::Document | NodeKind::Element { .. } => 0,
        }
    }
}
