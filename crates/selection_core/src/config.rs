/// How the clipper treats a collapsed range that is not inside the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaretPolicy {
    /// Every caret outside the container clips to `Empty`.
    #[default]
    Reject,
    /// A caret sitting directly on the container's outer edge, i.e. at
    /// `(parent, index)` or `(parent, index + 1)`, snaps to the matching inner
    /// edge of the container. Any other outside caret is still `Empty`.
    SnapAdjacent,
}

/// Clipper configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClipConfig {
    pub caret: CaretPolicy,
}

impl ClipConfig {
    pub fn with_caret(mut self, caret: CaretPolicy) -> Self {
        self.caret = caret;
        self
    }
}
