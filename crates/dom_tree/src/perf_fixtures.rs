use crate::Document;
use crate::fixture::{FixtureError, parse};

pub const BLOCK_TEMPLATE: &str = r#"div[span["hello"], img], "#;

/// A `body` element holding `blocks` copies of [`BLOCK_TEMPLATE`].
pub fn make_blocks(blocks: usize) -> Result<Document, FixtureError> {
    let mut src = String::with_capacity(BLOCK_TEMPLATE.len() * blocks + 8);
    src.push_str("body[");
    for _ in 0..blocks {
        src.push_str(BLOCK_TEMPLATE);
    }
    src.push(']');
    parse(&src)
}
