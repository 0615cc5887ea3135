//! NodeArena creation methods (add_* methods).

use untypedconst_common::Span;

use crate::base::NodeIndex;
use crate::node::{BasicLitKind, BinaryOp, Node, NodeArena, NodeKind, UnaryOp};

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Append a node and return its handle.
    pub fn add(&mut self, kind: NodeKind, span: Span) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(Node { kind, span });
        index
    }

    pub fn add_ident(&mut self, name: impl Into<String>, span: Span) -> NodeIndex {
        self.add(NodeKind::Ident { name: name.into() }, span)
    }

    pub fn add_basic_lit(
        &mut self,
        kind: BasicLitKind,
        raw: impl Into<String>,
        span: Span,
    ) -> NodeIndex {
        self.add(
            NodeKind::BasicLit {
                kind,
                raw: raw.into(),
            },
            span,
        )
    }

    /// Wrap `expr` in parentheses; the span grows by one byte on each side.
    pub fn add_paren(&mut self, expr: NodeIndex) -> NodeIndex {
        let inner = self.span_of(expr);
        let span = Span::new(inner.start.saturating_sub(1), inner.end + 1);
        self.add(NodeKind::Paren { expr }, span)
    }

    pub fn add_unary(&mut self, op: UnaryOp, operand: NodeIndex, span: Span) -> NodeIndex {
        self.add(NodeKind::Unary { op, operand }, span)
    }

    /// Binary expression spanning both operands.
    pub fn add_binary(&mut self, op: BinaryOp, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        let span = self.span_of(left).merge(self.span_of(right));
        self.add(NodeKind::Binary { op, left, right }, span)
    }

    pub fn add_call(&mut self, callee: NodeIndex, args: Vec<NodeIndex>, span: Span) -> NodeIndex {
        self.add(
            NodeKind::Call {
                callee,
                args,
                has_ellipsis: false,
            },
            span,
        )
    }

    pub fn add_key_value(&mut self, key: NodeIndex, value: NodeIndex) -> NodeIndex {
        let span = self.span_of(key).merge(self.span_of(value));
        self.add(NodeKind::KeyValue { key, value }, span)
    }

    fn span_of(&self, index: NodeIndex) -> Span {
        self.get(index).map(|node| node.span).unwrap_or_default()
    }
}
