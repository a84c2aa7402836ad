use selection_core::{BoundaryPoint, DocumentTree, Range};

use crate::{Document, Id, NodeKind};

impl Document {
    /// Indented one-line-per-node dump of the subtree at `start`, capped at
    /// `cap` nodes.
    pub fn outline(&self, start: Id, cap: usize) -> Vec<String> {
        fn walk(doc: &Document, id: Id, depth: usize, out: &mut Vec<String>, left: &mut usize) {
            if *left == 0 {
                return;
            }
            *left -= 1;
            let indent = "  ".repeat(depth);
            match doc.kind(id) {
                Some(NodeKind::Document) => out.push(format!("{indent}#document")),
                Some(NodeKind::Element { name }) => out.push(format!("{indent}<{name}>")),
                Some(NodeKind::Text { label, text }) => {
                    let t = text.replace('\n', " ");
                    let show = if t.chars().count() > 40 {
                        format!("{}…", t.chars().take(40).collect::<String>())
                    } else {
                        t
                    };
                    match label {
                        Some(label) => out.push(format!("{indent}{label}: \"{show}\"")),
                        None => out.push(format!("{indent}\"{show}\"")),
                    }
                }
                Some(NodeKind::Comment { text }) => {
                    out.push(format!("{indent}<!-- {} -->", text.replace('\n', " ")))
                }
                None => return,
            }
            for &child in doc.children(id) {
                walk(doc, child, depth + 1, out, left);
            }
        }

        let mut out = Vec::new();
        let mut left = cap;
        walk(self, start, 0, &mut out, &mut left);
        out
    }

    /// Short name of `id` for diagnostics: its tag or label, else `#<id>`.
    pub fn describe_node(&self, id: Id) -> String {
        match self.kind(id).and_then(NodeKind::name) {
            Some(name) => name.to_string(),
            None => format!("#{}", id.0),
        }
    }

    /// `node@offset`
    pub fn describe_point(&self, point: BoundaryPoint<Id>) -> String {
        format!("{}@{}", self.describe_node(point.node), point.offset)
    }

    /// `start..end`, in [`Document::describe_point`] form.
    pub fn describe_range(&self, range: &Range<Id>) -> String {
        format!(
            "{}..{}",
            self.describe_point(range.start()),
            self.describe_point(range.end())
        )
    }
}
