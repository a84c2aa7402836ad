use log::trace;

use crate::clip::clip_with;
use crate::config::ClipConfig;
use crate::error::ClipError;
use crate::point::Range;
use crate::selection::Selection;
use crate::tree::DocumentTree;

/// Collects the parts of `selection` that fall inside `container`.
///
/// Each selected range yields at most one clipped range; order is preserved
/// and nothing is merged or deduplicated.
pub fn ranges_inside<T>(
    tree: &T,
    container: T::Node,
    selection: &Selection<T::Node>,
) -> Result<Vec<Range<T::Node>>, ClipError<T::Node>>
where
    T: DocumentTree + ?Sized,
{
    ranges_inside_with(tree, container, selection, ClipConfig::default())
}

pub fn ranges_inside_with<T>(
    tree: &T,
    container: T::Node,
    selection: &Selection<T::Node>,
    config: ClipConfig,
) -> Result<Vec<Range<T::Node>>, ClipError<T::Node>>
where
    T: DocumentTree + ?Sized,
{
    if !selection.touches(tree, container) {
        trace!(target: "selection.scan", "selection does not touch {container:?}");
        return Ok(Vec::new());
    }

    let mut inside = Vec::with_capacity(selection.range_count());
    for range in selection.ranges() {
        if let Some(clipped) = clip_with(tree, container, *range, config)?.into_range() {
            inside.push(clipped);
        }
    }
    trace!(
        target: "selection.scan",
        "{} of {} ranges inside {container:?}",
        inside.len(),
        selection.range_count()
    );
    Ok(inside)
}
