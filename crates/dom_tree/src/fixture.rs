//! Compact text notation for building documents in tests and benches.
//!
//! ```text
//! root[container[a("hello"), b("world")], "anonymous text", !"comment", br]
//! ```
//!
//! - `name[...]` is an element with children, a bare `name` an empty element
//! - `name("...")` is a text node labeled `name`
//! - `"..."` is an unlabeled text node, `!"..."` a comment
//! - strings accept `\"`, `\\` and `\n` escapes
//!
//! Top-level nodes are appended to the document node.

use std::fmt;

use crate::document::TreeError;
use crate::{Document, Id};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FixtureError {
    UnexpectedChar { found: char, at: usize },
    UnexpectedEnd,
    UnterminatedString { at: usize },
    Tree(TreeError),
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::UnexpectedChar { found, at } => {
                write!(f, "unexpected {found:?} at byte {at}")
            }
            FixtureError::UnexpectedEnd => write!(f, "unexpected end of input"),
            FixtureError::UnterminatedString { at } => {
                write!(f, "string starting at byte {at} is not terminated")
            }
            FixtureError::Tree(err) => write!(f, "invalid tree: {err}"),
        }
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixtureError::Tree(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TreeError> for FixtureError {
    fn from(err: TreeError) -> Self {
        FixtureError::Tree(err)
    }
}

/// Parses `src` into a fresh document.
pub fn parse(src: &str) -> Result<Document, FixtureError> {
    let mut doc = Document::new();
    let root = doc.root();
    let mut parser = Parser { src, pos: 0 };
    parser.skip_ws();
    if parser.peek().is_some() {
        parser.list(&mut doc, root)?;
    }
    parser.skip_ws();
    if let Some(found) = parser.peek() {
        return Err(FixtureError::UnexpectedChar {
            found,
            at: parser.pos,
        });
    }
    Ok(doc)
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

fn is_ident(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn unexpected(&self) -> FixtureError {
        match self.peek() {
            Some(found) => FixtureError::UnexpectedChar {
                found,
                at: self.pos,
            },
            None => FixtureError::UnexpectedEnd,
        }
    }

    fn expect(&mut self, want: char) -> Result<(), FixtureError> {
        self.skip_ws();
        if self.peek() == Some(want) {
            self.bump();
            return Ok(());
        }
        Err(self.unexpected())
    }

    /// Comma separated nodes; a trailing comma is allowed.
    fn list(&mut self, doc: &mut Document, parent: Id) -> Result<(), FixtureError> {
        loop {
            self.node(doc, parent)?;
            self.skip_ws();
            if self.peek() != Some(',') {
                return Ok(());
            }
            self.bump();
            self.skip_ws();
            if matches!(self.peek(), Some(']') | None) {
                return Ok(());
            }
        }
    }

    fn node(&mut self, doc: &mut Document, parent: Id) -> Result<(), FixtureError> {
        self.skip_ws();
        match self.peek() {
            Some('"') => {
                let text = self.string()?;
                doc.append_text(parent, text)?;
            }
            Some('!') => {
                self.bump();
                self.skip_ws();
                let text = self.string()?;
                let comment = doc.create_comment(text);
                doc.append_child(parent, comment)?;
            }
            Some(c) if is_ident(c) => {
                let name = self.ident();
                self.skip_ws();
                match self.peek() {
                    Some('(') => {
                        self.bump();
                        self.skip_ws();
                        let text = self.string()?;
                        self.expect(')')?;
                        let id = doc.create_labeled_text(name, text);
                        doc.append_child(parent, id)?;
                    }
                    Some('[') => {
                        self.bump();
                        let id = doc.append_element(parent, name)?;
                        self.skip_ws();
                        if self.peek() != Some(']') {
                            self.list(doc, id)?;
                        }
                        self.expect(']')?;
                    }
                    _ => {
                        doc.append_element(parent, name)?;
                    }
                }
            }
            _ => return Err(self.unexpected()),
        }
        Ok(())
    }

    fn ident(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(is_ident) {
            self.bump();
        }
        self.src[start..self.pos].to_string()
    }

    fn string(&mut self) -> Result<String, FixtureError> {
        let at = self.pos;
        if self.peek() != Some('"') {
            return Err(self.unexpected());
        }
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(FixtureError::UnterminatedString { at }),
                Some('"') => return Ok(out),
                Some('\\') => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some(c) => out.push(c),
                    None => return Err(FixtureError::UnterminatedString { at }),
                },
                Some(c) => out.push(c),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeKind;
    use selection_core::DocumentTree;

    #[test]
    fn parses_nested_elements_and_labeled_text() {
        let doc = parse(r#"root[container[a("hello"), b("world")], after("!")]"#).unwrap();
        let root = doc.find("root").unwrap();
        let container = doc.find("container").unwrap();
        let a = doc.find("a").unwrap();
        let b = doc.find("b").unwrap();

        assert_eq!(doc.parent(root), Some(doc.root()));
        assert_eq!(doc.children(container), &[a, b]);
        assert_eq!(doc.content_length(b), 5);
        assert_eq!(doc.text_content(root), "helloworld!");
    }

    #[test]
    fn parses_anonymous_text_comments_and_empty_elements() {
        let doc = parse(r#"p["one\"two", !"note", br, span[],]"#).unwrap();
        let p = doc.find("p").unwrap();
        let kinds: Vec<&NodeKind> = doc
            .children(p)
            .iter()
            .filter_map(|&id| doc.kind(id))
            .collect();
        assert_eq!(kinds.len(), 4);
        assert_eq!(
            kinds[0],
            &NodeKind::Text {
                label: None,
                text: "one\"two".to_string()
            }
        );
        assert_eq!(
            kinds[1],
            &NodeKind::Comment {
                text: "note".to_string()
            }
        );
        assert!(doc.children(doc.find("br").unwrap()).is_empty());
        assert!(doc.children(doc.find("span").unwrap()).is_empty());
    }

    #[test]
    fn empty_input_is_an_empty_document() {
        let doc = parse("  ").unwrap();
        assert!(doc.children(doc.root()).is_empty());
    }

    #[test]
    fn reports_malformed_input() {
        assert_eq!(parse("a[b").unwrap_err(), FixtureError::UnexpectedEnd);
        assert_eq!(
            parse(r#"a("open"#).unwrap_err(),
            FixtureError::UnterminatedString { at: 2 }
        );
        assert_eq!(
            parse("a] b").unwrap_err(),
            FixtureError::UnexpectedChar { found: ']', at: 1 }
        );
        assert!(matches!(
            parse(r#"t("x")["y"]"#),
            Err(FixtureError::UnexpectedChar { found: '[', .. })
        ));
    }
}
