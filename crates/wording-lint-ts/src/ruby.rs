//! Ruby frontend using Tree-sitter.
//!
//! Lowers the concrete Ruby tree into [`SyntaxNode`]s:
//!
//! - `call` with a `block`/`do_block` becomes [`SyntaxNode::Block`]
//! - `call` without one becomes [`SyntaxNode::Call`]
//! - quote-delimited strings without interpolation become [`SyntaxNode::Str`]
//! - strings with `#{...}` become [`SyntaxNode::Interpolated`]
//! - symbols become [`SyntaxNode::Symbol`]
//!
//! Everything else, including percent literals and heredocs, is kept as
//! [`SyntaxNode::Other`]. Comments are dropped.

use tracing::debug;
use tree_sitter::{Language, Node, Parser};
use wording_lint_core::{ByteRange, Call, ParseError, SourceParser, SyntaxNode};

const STRING_DELIMITERS: [u8; 2] = [b'\'', b'"'];

/// Parses Ruby source into the lowered syntax model.
pub struct RubyParser {
    language: Language,
}

impl RubyParser {
    /// Creates a new Ruby parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_ruby::LANGUAGE.into(),
        }
    }

    fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
        node.utf8_text(src).unwrap_or_default()
    }

    fn range(node: &Node<'_>) -> ByteRange {
        node.start_byte()..node.end_byte()
    }

    fn lower(node: &Node<'_>, src: &[u8]) -> SyntaxNode {
        match node.kind() {
            "call" => Self::lower_call(node, src),
            "string" => Self::lower_string(node, src),
            "simple_symbol" | "delimited_symbol" | "hash_key_symbol" => SyntaxNode::Symbol {
                range: Self::range(node),
            },
            kind => SyntaxNode::other(kind, Self::range(node), Self::lower_children(node, src)),
        }
    }

    fn lower_children(node: &Node<'_>, src: &[u8]) -> Vec<SyntaxNode> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .filter(|child| child.kind() != "comment")
            .map(|child| Self::lower(&child, src))
            .collect()
    }

    fn lower_call(node: &Node<'_>, src: &[u8]) -> SyntaxNode {
        let method = node.child_by_field_name("method");
        let arguments = node.child_by_field_name("arguments");
        let block = node.child_by_field_name("block");

        // The invocation ends with its arguments, or its name when it has none.
        let end = arguments
            .or(method)
            .map_or_else(|| node.end_byte(), |n| n.end_byte());
        let name = method.map_or("", |m| Self::text(&m, src));

        let mut call = Call::new(name, node.start_byte()..end);
        if let Some(receiver) = node.child_by_field_name("receiver") {
            call = call.with_receiver(Self::lower(&receiver, src));
        }
        if let Some(arguments) = arguments {
            call.arguments = Self::lower_children(&arguments, src);
        }

        match block {
            Some(block) => {
                SyntaxNode::block(call, Self::lower_children(&block, src), Self::range(node))
            }
            None => SyntaxNode::Call(call),
        }
    }

    fn lower_string(node: &Node<'_>, src: &[u8]) -> SyntaxNode {
        let range = Self::range(node);

        let mut cursor = node.walk();
        let parts: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
        if parts.iter().any(|part| part.kind() == "interpolation") {
            return SyntaxNode::Interpolated {
                range,
                parts: parts.iter().map(|part| Self::lower(part, src)).collect(),
            };
        }

        let quoted = src
            .get(range.start)
            .is_some_and(|first| STRING_DELIMITERS.contains(first));
        if !quoted {
            return SyntaxNode::other("string", range, Vec::new());
        }

        // Content between the delimiters, escapes kept as written.
        let value = src
            .get(range.start + 1..range.end.saturating_sub(1))
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .unwrap_or_default();
        SyntaxNode::string(value, range)
    }
}

impl Default for RubyParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser for RubyParser {
    fn language_id(&self) -> &'static str {
        "ruby"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["rb"]
    }

    fn parse(&self, source: &str) -> Result<SyntaxNode, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseError::new(format!("failed to load ruby grammar: {e}")))?;

        let src = source.as_bytes();
        let tree = parser
            .parse(src, None)
            .ok_or_else(|| ParseError::new("tree-sitter produced no tree"))?;
        let root = tree.root_node();
        if root.has_error() {
            debug!("ruby source contains syntax errors; lowering the recovered tree");
        }

        Ok(Self::lower(&root, src))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> SyntaxNode {
        RubyParser::new().parse(src).unwrap()
    }

    fn blocks(tree: &SyntaxNode) -> Vec<&wording_lint_core::Block> {
        tree.descendants()
            .filter_map(|n| match n {
                SyntaxNode::Block(b) => Some(b),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn lowers_nested_example_blocks() {
        let src = "describe User do\n  it 'should work' do\n    expect(1).to eq(1)\n  end\nend\n";
        let tree = parse(src);
        let found = blocks(&tree);

        let methods: Vec<&str> = found.iter().map(|b| b.call.method.as_str()).collect();
        assert_eq!(methods, vec!["describe", "it"]);

        let SyntaxNode::Str(lit) = &found[1].call.arguments[0] else {
            panic!("expected a plain string argument");
        };
        assert_eq!(lit.value, "should work");
        assert_eq!(&src[lit.range.clone()], "'should work'");
    }

    #[test]
    fn brace_blocks_and_parenthesized_arguments() {
        let tree = parse("it(\"should work\") { expect(true).to be(true) }\n");
        let found = blocks(&tree);
        assert_eq!(found.len(), 1);
        assert!(matches!(
            &found[0].call.arguments[0],
            SyntaxNode::Str(lit) if lit.value == "should work"
        ));
    }

    #[test]
    fn call_without_block_stays_a_call() {
        let tree = parse("it 'should work'\n");
        assert!(blocks(&tree).is_empty());
        assert!(tree.descendants().any(|n| matches!(
            n,
            SyntaxNode::Call(c) if c.method == "it" && c.arguments.len() == 1
        )));
    }

    #[test]
    fn interpolated_strings_are_not_plain() {
        let tree = parse("it \"should #{thing}\" do\nend\n");
        let found = blocks(&tree);
        assert!(matches!(
            found[0].call.arguments[0],
            SyntaxNode::Interpolated { .. }
        ));
    }

    #[test]
    fn symbols_and_percent_literals() {
        let tree = parse("it :should_work do\nend\nit(%q(should work)) do\nend\n");
        let found = blocks(&tree);
        assert!(matches!(found[0].call.arguments[0], SyntaxNode::Symbol { .. }));
        assert!(matches!(
            &found[1].call.arguments[0],
            SyntaxNode::Other { kind, .. } if kind == "string"
        ));
    }

    #[test]
    fn receiver_is_lowered() {
        let tree = parse("RSpec.describe Widget do\nend\n");
        let found = blocks(&tree);
        assert_eq!(found[0].call.method, "describe");
        assert!(found[0].call.receiver.is_some());
    }

    #[test]
    fn call_range_excludes_block() {
        let src = "it 'x' do\nend\n";
        let tree = parse(src);
        let found = blocks(&tree);
        assert_eq!(&src[found[0].call.range.clone()], "it 'x'");
        assert_eq!(&src[found[0].range.clone()], "it 'x' do\nend");
    }

    #[test]
    fn comments_are_dropped() {
        let tree = parse("# it 'should not count' do\nit 'works' do\nend\n");
        assert!(!tree
            .descendants()
            .any(|n| matches!(n, SyntaxNode::Other { kind, .. } if kind == "comment")));
        assert_eq!(blocks(&tree).len(), 1);
    }

    #[test]
    fn broken_source_still_yields_a_tree() {
        let tree = parse("it 'should work' do\n");
        assert!(matches!(tree, SyntaxNode::Other { .. }));
    }

    #[test]
    fn empty_source() {
        let tree = parse("");
        assert!(tree.children().is_empty());
    }

    #[test]
    fn parser_metadata() {
        let parser = RubyParser::default();
        assert_eq!(parser.language_id(), "ruby");
        assert_eq!(parser.extensions(), &["rb"]);
    }
}
