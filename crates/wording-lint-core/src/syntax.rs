//! Syntax tree model consumed by rules.
//!
//! Parsers lower their concrete trees into [`SyntaxNode`], a closed set of
//! shapes that rules match on. Every node carries the byte range it covers
//! in the shared source buffer; nodes never own source text beyond decoded
//! literal values.

use std::ops::Range;

/// Half-open byte range into a source buffer.
pub type ByteRange = Range<usize>;

/// A node of the lowered syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// A method invocation with an attached block (`it "..." do ... end`).
    Block(Block),
    /// A method invocation without a block.
    Call(Call),
    /// A plain string literal without interpolation.
    Str(StringLiteral),
    /// A string literal containing interpolation.
    Interpolated {
        /// Source range including delimiters.
        range: ByteRange,
        /// Lowered interpolated parts.
        parts: Vec<SyntaxNode>,
    },
    /// A symbol literal.
    Symbol {
        /// Source range of the symbol.
        range: ByteRange,
    },
    /// Any node shape rules do not distinguish.
    Other {
        /// Parser-specific node kind, kept for debugging.
        kind: String,
        /// Source range of the node.
        range: ByteRange,
        /// Lowered children.
        children: Vec<SyntaxNode>,
    },
}

/// A method invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// Receiver expression, if the call has one.
    pub receiver: Option<Box<SyntaxNode>>,
    /// Invoked method name.
    pub method: String,
    /// Positional arguments in source order.
    pub arguments: Vec<SyntaxNode>,
    /// Source range of the invocation, block excluded.
    pub range: ByteRange,
}

impl Call {
    /// Creates a call without receiver or arguments.
    #[must_use]
    pub fn new(method: impl Into<String>, range: ByteRange) -> Self {
        Self {
            receiver: None,
            method: method.into(),
            arguments: Vec::new(),
            range,
        }
    }

    /// Sets the receiver.
    #[must_use]
    pub fn with_receiver(mut self, receiver: SyntaxNode) -> Self {
        self.receiver = Some(Box::new(receiver));
        self
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn with_argument(mut self, argument: SyntaxNode) -> Self {
        self.arguments.push(argument);
        self
    }
}

/// A method invocation with its block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The invocation the block is attached to.
    pub call: Call,
    /// Lowered statements of the block body.
    pub body: Vec<SyntaxNode>,
    /// Source range of the whole construct.
    pub range: ByteRange,
}

/// A plain string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    /// Literal content without delimiters.
    pub value: String,
    /// Source range including delimiters.
    pub range: ByteRange,
}

impl SyntaxNode {
    /// Creates a block node.
    #[must_use]
    pub fn block(call: Call, body: Vec<SyntaxNode>, range: ByteRange) -> Self {
        Self::Block(Block { call, body, range })
    }

    /// Creates a plain string literal node.
    #[must_use]
    pub fn string(value: impl Into<String>, range: ByteRange) -> Self {
        Self::Str(StringLiteral {
            value: value.into(),
            range,
        })
    }

    /// Creates an opaque node.
    #[must_use]
    pub fn other(kind: impl Into<String>, range: ByteRange, children: Vec<SyntaxNode>) -> Self {
        Self::Other {
            kind: kind.into(),
            range,
            children,
        }
    }

    /// Returns the direct children in source order.
    #[must_use]
    pub fn children(&self) -> Vec<&SyntaxNode> {
        fn call_children(call: &Call) -> impl Iterator<Item = &SyntaxNode> {
            call.receiver.as_deref().into_iter().chain(&call.arguments)
        }

        match self {
            Self::Block(block) => call_children(&block.call).chain(&block.body).collect(),
            Self::Call(call) => call_children(call).collect(),
            Self::Interpolated { parts, .. } => parts.iter().collect(),
            Self::Other { children, .. } => children.iter().collect(),
            Self::Str(_) | Self::Symbol { .. } => Vec::new(),
        }
    }

    /// Iterates over this node and all its descendants in pre-order.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Pre-order iterator returned by [`SyntaxNode::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().into_iter().rev());
        Some(node)
    }
}

/// An immutable byte range into a single source buffer.
///
/// Always satisfies `start <= end`, with both ends on char boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSpan<'src> {
    start: usize,
    end: usize,
    source: &'src str,
}

impl<'src> TextSpan<'src> {
    /// Creates a span, or `None` if the range is not valid for `source`.
    #[must_use]
    pub fn new(source: &'src str, start: usize, end: usize) -> Option<Self> {
        let valid = start <= end
            && end <= source.len()
            && source.is_char_boundary(start)
            && source.is_char_boundary(end);
        valid.then_some(Self { start, end, source })
    }

    /// Creates the span of a delimited literal's content: the range with its
    /// first and last character removed.
    #[must_use]
    pub fn inner(source: &'src str, range: &ByteRange) -> Option<Self> {
        let outer = source.get(range.clone())?;
        let mut chars = outer.chars();
        let open = chars.next()?;
        let close = chars.next_back()?;
        Self::new(
            source,
            range.start + open.len_utf8(),
            range.end - close.len_utf8(),
        )
    }

    /// Start offset in bytes.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// End offset in bytes (exclusive).
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The covered text.
    #[must_use]
    pub fn text(&self) -> &'src str {
        &self.source[self.start..self.end]
    }

    /// The whole source buffer this span points into.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// 1-indexed line and column (in characters) of the span start.
    #[must_use]
    pub fn line_column(&self) -> (usize, usize) {
        let before = &self.source[..self.start];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_tree() -> SyntaxNode {
        // describe "x" do; it "should a" do; end; end
        let inner = SyntaxNode::block(
            Call::new("it", 16..26).with_argument(SyntaxNode::string("should a", 19..29)),
            vec![],
            16..36,
        );
        SyntaxNode::block(
            Call::new("describe", 0..12).with_argument(SyntaxNode::string("x", 9..12)),
            vec![inner],
            0..45,
        )
    }

    #[test]
    fn descendants_are_pre_order() {
        let tree = example_tree();
        let kinds: Vec<&str> = tree
            .descendants()
            .map(|n| match n {
                SyntaxNode::Block(b) => b.call.method.as_str(),
                SyntaxNode::Str(s) => s.value.as_str(),
                _ => "?",
            })
            .collect();
        assert_eq!(kinds, vec!["describe", "x", "it", "should a"]);
    }

    #[test]
    fn call_children_include_receiver_first() {
        let call = Call::new("it", 0..10)
            .with_receiver(SyntaxNode::Symbol { range: 0..2 })
            .with_argument(SyntaxNode::string("a", 3..6));
        let node = SyntaxNode::Call(call);
        let children = node.children();
        assert_eq!(children.len(), 2);
        assert!(matches!(children[0], SyntaxNode::Symbol { .. }));
    }

    #[test]
    fn text_span_rejects_invalid_ranges() {
        let src = "héllo";
        assert!(TextSpan::new(src, 3, 1).is_none());
        assert!(TextSpan::new(src, 0, 99).is_none());
        // inside the two-byte 'é'
        assert!(TextSpan::new(src, 2, 3).is_none());
        assert_eq!(TextSpan::new(src, 0, 3).map(|s| s.text()), Some("hé"));
    }

    #[test]
    fn inner_strips_delimiters() {
        let src = "it 'should work' do";
        let span = TextSpan::inner(src, &(3..16)).unwrap();
        assert_eq!(span.text(), "should work");
        assert_eq!((span.start(), span.end()), (4, 15));
    }

    #[test]
    fn inner_of_empty_literal_is_empty() {
        let src = "it '' do";
        let span = TextSpan::inner(src, &(3..5)).unwrap();
        assert!(span.is_empty());
    }

    #[test]
    fn inner_requires_two_characters() {
        assert!(TextSpan::inner("'", &(0..1)).is_none());
        assert!(TextSpan::inner("", &(0..0)).is_none());
    }

    #[test]
    fn line_column_counts_chars() {
        let src = "a\n  é 'x'";
        let span = TextSpan::new(src, 7, 8).unwrap();
        assert_eq!(span.line_column(), (2, 5));
    }
}
