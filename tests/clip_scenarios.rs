mod common;

use common::{doc, node, pt, range};
use seltrack::{
    BoundaryPoint, CaretPolicy, Clip, ClipConfig, ClipError, RangeRequest, Selection, clip,
    clip_with, ranges_inside,
};

const BASIC: &str = r#"root[container[a("hello"), b("world")]]"#;
const WITH_SIBLINGS: &str =
    r#"root[intro("<<"), container[a("hello"), b("world")], aside[c("elsewhere")]]"#;

#[test]
fn caret_inside_container_is_returned_as_is() {
    let doc = doc(BASIC);
    let caret = range(&doc, ("a", 2), ("a", 2));
    let result = clip(&doc, node(&doc, "container"), caret).unwrap();
    assert_eq!(result, Clip::Inside(caret));
}

#[test]
fn range_from_root_clamps_start_to_container() {
    let doc = doc(BASIC);
    let result = clip(&doc, node(&doc, "container"), range(&doc, ("root", 0), ("b", 3)))
        .unwrap()
        .into_range()
        .unwrap();
    assert_eq!(result.start(), pt(&doc, "container", 0));
    assert_eq!(result.end(), pt(&doc, "b", 3));
}

#[test]
fn range_past_container_clamps_end_to_last_text() {
    let doc = doc(BASIC);
    // (root, 1) sits right after the container closes.
    let result = clip(&doc, node(&doc, "container"), range(&doc, ("a", 2), ("root", 1)))
        .unwrap()
        .into_range()
        .unwrap();
    assert_eq!(result.start(), pt(&doc, "a", 2));
    assert_eq!(result.end(), pt(&doc, "b", 5));

    let doc = self::doc(WITH_SIBLINGS);
    let result = clip(&doc, node(&doc, "container"), range(&doc, ("a", 2), ("c", 4)))
        .unwrap()
        .into_range()
        .unwrap();
    assert_eq!(doc.describe_range(&result), "a@2..b@5");
}

#[test]
fn ends_on_trailing_slots_are_kept() {
    let doc = doc(r#"root[before("<<"), container[a("hello"), b("world")], after("!")]"#);
    let result = clip(&doc, node(&doc, "container"), range(&doc, ("before", 1), ("container", 2)))
        .unwrap()
        .into_range()
        .unwrap();
    assert_eq!(doc.describe_range(&result), "container@0..container@2");

    let doc = self::doc(r#"root[before("<<"), container[p[x("ab")]], after("!")]"#);
    let container = node(&doc, "container");
    let result = clip(&doc, container, range(&doc, ("before", 1), ("p", 1)))
        .unwrap()
        .into_range()
        .unwrap();
    assert_eq!(doc.describe_range(&result), "container@0..p@1");

    let result = clip(&doc, container, range(&doc, ("p", 1), ("after", 1)))
        .unwrap()
        .into_range()
        .unwrap();
    assert_eq!(doc.describe_range(&result), "p@1..p@1");
}

#[test]
fn range_inside_sibling_is_empty() {
    let doc = doc(WITH_SIBLINGS);
    let container = node(&doc, "container");
    assert_eq!(clip(&doc, container, range(&doc, ("c", 1), ("c", 6))), Ok(Clip::Empty));
    assert_eq!(clip(&doc, container, range(&doc, ("intro", 0), ("intro", 2))), Ok(Clip::Empty));
}

#[test]
fn caret_outside_container_is_empty_unless_snapping() {
    let doc = doc(WITH_SIBLINGS);
    let container = node(&doc, "container");
    let edge = range(&doc, ("root", 1), ("root", 1));
    assert_eq!(clip(&doc, container, edge), Ok(Clip::Empty));

    let snap = ClipConfig::default().with_caret(CaretPolicy::SnapAdjacent);
    let snapped = clip_with(&doc, container, edge, snap)
        .unwrap()
        .into_range()
        .unwrap();
    assert_eq!(snapped.start(), BoundaryPoint::new(container, 0));
    assert!(snapped.is_collapsed());

    let far = range(&doc, ("c", 3), ("c", 3));
    assert_eq!(clip_with(&doc, container, far, snap), Ok(Clip::Empty));
}

#[test]
fn range_around_container_covers_all_of_it() {
    let doc = doc(WITH_SIBLINGS);
    let result = clip(&doc, node(&doc, "container"), range(&doc, ("intro", 1), ("c", 2)))
        .unwrap()
        .into_range()
        .unwrap();
    assert_eq!(doc.describe_range(&result), "container@0..b@5");
}

#[test]
fn empty_and_deeply_nested_containers() {
    let doc = doc(r#"root[l("ab"), hole, deep[x[y[z("end")]]], r("cd")]"#);
    let hole = clip(&doc, node(&doc, "hole"), range(&doc, ("l", 1), ("r", 1)))
        .unwrap()
        .into_range()
        .unwrap();
    assert_eq!(doc.describe_range(&hole), "hole@0..hole@0");

    let deep = clip(&doc, node(&doc, "deep"), range(&doc, ("l", 0), ("r", 2)))
        .unwrap()
        .into_range()
        .unwrap();
    assert_eq!(doc.describe_range(&deep), "deep@0..z@3");

    let inner = clip(&doc, node(&doc, "x"), range(&doc, ("z", 1), ("r", 2)))
        .unwrap()
        .into_range()
        .unwrap();
    assert_eq!(doc.describe_range(&inner), "z@1..z@3");
}

#[test]
fn ranges_from_another_document_are_rejected() {
    let doc = doc(BASIC);
    let other = self::doc(r#"root[container[a("hello"), b("world")], more[m("x"), n("y")]]"#);
    let foreign = range(&other, ("m", 0), ("n", 1));
    assert!(matches!(
        clip(&doc, node(&doc, "container"), foreign),
        Err(ClipError::UnknownNode(_))
    ));
}

#[test]
fn scanner_collects_clipped_ranges_in_order() {
    let doc = doc(WITH_SIBLINGS);
    let container = node(&doc, "container");
    let selection = Selection::from_ranges(vec![
        range(&doc, ("intro", 1), ("a", 3)),
        range(&doc, ("c", 0), ("c", 2)),
        range(&doc, ("b", 1), ("c", 2)),
    ]);

    let inside = ranges_inside(&doc, container, &selection).unwrap();
    let described: Vec<String> = inside.iter().map(|r| doc.describe_range(r)).collect();
    assert_eq!(described, vec!["container@0..a@3", "b@1..b@5"]);
}

#[test]
fn scanner_skips_untouched_containers() {
    let doc = doc(WITH_SIBLINGS);
    let selection = Selection::from_ranges(vec![range(&doc, ("c", 0), ("c", 2))]);
    assert_eq!(
        ranges_inside(&doc, node(&doc, "container"), &selection),
        Ok(Vec::new())
    );
    assert_eq!(
        ranges_inside(&doc, node(&doc, "container"), &Selection::new()),
        Ok(Vec::new())
    );
}

#[test]
fn requests_fill_in_missing_endpoints() {
    let doc = doc(WITH_SIBLINGS);
    let a = node(&doc, "a");
    let c = node(&doc, "c");

    let caret = RangeRequest::new(a).start_offset(2).resolve(&doc).unwrap();
    assert_eq!(doc.describe_range(&caret), "a@2..a@2");

    let across = RangeRequest::new(a)
        .start_offset(2)
        .end_node(c)
        .end_offset(4)
        .resolve(&doc)
        .unwrap();
    let result = clip(&doc, node(&doc, "container"), across)
        .unwrap()
        .into_range()
        .unwrap();
    assert_eq!(doc.describe_range(&result), "a@2..b@5");
}
