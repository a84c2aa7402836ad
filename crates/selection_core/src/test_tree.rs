use crate::tree::DocumentTree;

/// Minimal vector-backed tree for unit tests.
pub(crate) struct TestTree {
    parents: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    lengths: Vec<usize>,
}

impl TestTree {
    pub(crate) fn new() -> Self {
        Self {
            parents: vec![None],
            children: vec![Vec::new()],
            lengths: vec![0],
        }
    }

    pub(crate) fn root(&self) -> usize {
        0
    }

    fn push(&mut self, parent: Option<usize>, len: usize) -> usize {
        let id = self.parents.len();
        self.parents.push(parent);
        self.children.push(Vec::new());
        self.lengths.push(len);
        if let Some(parent) = parent {
            self.children[parent].push(id);
        }
        id
    }

    pub(crate) fn element(&mut self, parent: usize) -> usize {
        self.push(Some(parent), 0)
    }

    pub(crate) fn text(&mut self, parent: usize, text: &str) -> usize {
        self.push(Some(parent), text.chars().count())
    }

    pub(crate) fn detached(&mut self, text: &str) -> usize {
        self.push(None, text.chars().count())
    }
}

impl DocumentTree for TestTree {
    type Node = usize;

    fn parent(&self, node: usize) -> Option<usize> {
        self.parents.get(node).copied().flatten()
    }

    fn children(&self, node: usize) -> &[usize] {
        self.children.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    fn content_length(&self, node: usize) -> usize {
        self.lengths.get(node).copied().unwrap_or(0)
    }

    fn contains(&self, node: usize) -> bool {
        node < self.parents.len()
    }
}
