//! NodeArena access methods.

use smallvec::SmallVec;

use crate::base::NodeIndex;
use crate::node::{Node, NodeArena, NodeKind};

impl NodeArena {
    /// Get a node by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes with their handles, in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeIndex(i as u32), node))
    }

    /// Skip parenthesized expressions to get to the underlying expression.
    pub fn skip_parenthesized_expression(&self, mut expr_idx: NodeIndex) -> NodeIndex {
        while let Some(node) = self.get(expr_idx) {
            let NodeKind::Paren { expr } = node.kind else {
                break;
            };
            expr_idx = expr;
        }
        expr_idx
    }

    /// Present children of `index`, in source order.
    pub fn children(&self, index: NodeIndex) -> SmallVec<[NodeIndex; 4]> {
        let mut out = SmallVec::new();
        if let Some(node) = self.get(index) {
            node.kind.for_each_child(|child| {
                if child.is_some() {
                    out.push(child);
                }
            });
        }
        out
    }
}

impl NodeKind {
    /// Visit every child slot in source order, including `NONE` slots.
    pub fn for_each_child(&self, mut f: impl FnMut(NodeIndex)) {
        match self {
            NodeKind::SourceFile { decls, .. } => decls.iter().copied().for_each(f),
            NodeKind::FuncDecl { body, .. } => f(*body),
            NodeKind::ValueSpec { values, .. } => values.iter().copied().for_each(f),
            NodeKind::Block { stmts } => stmts.iter().copied().for_each(f),
            NodeKind::ExprStmt { expr } | NodeKind::IncDec { expr } => f(*expr),
            NodeKind::DeclStmt { specs } => specs.iter().copied().for_each(f),
            NodeKind::Assign { lhs, rhs } => {
                lhs.iter().chain(rhs).copied().for_each(f);
            }
            NodeKind::Return { results } => results.iter().copied().for_each(f),
            NodeKind::Send { chan, value } => {
                f(*chan);
                f(*value);
            }
            NodeKind::If {
                init,
                cond,
                then,
                else_branch,
            } => {
                f(*init);
                f(*cond);
                f(*then);
                f(*else_branch);
            }
            NodeKind::For {
                init,
                cond,
                post,
                body,
            } => {
                f(*init);
                f(*cond);
                f(*post);
                f(*body);
            }
            NodeKind::Range {
                key,
                value,
                expr,
                body,
            } => {
                f(*key);
                f(*value);
                f(*expr);
                f(*body);
            }
            NodeKind::Switch { init, tag, clauses } => {
                f(*init);
                f(*tag);
                clauses.iter().copied().for_each(f);
            }
            NodeKind::CaseClause { exprs, body } => {
                exprs.iter().chain(body).copied().for_each(f);
            }
            NodeKind::Go { call } | NodeKind::Defer { call } => f(*call),
            NodeKind::Paren { expr }
            | NodeKind::Star { expr }
            | NodeKind::TypeAssert { expr }
            | NodeKind::Selector { expr, .. } => f(*expr),
            NodeKind::Unary { operand, .. } => f(*operand),
            NodeKind::Binary { left, right, .. } => {
                f(*left);
                f(*right);
            }
            NodeKind::Call { callee, args, .. } => {
                f(*callee);
                args.iter().copied().for_each(f);
            }
            NodeKind::Index { base, index } => {
                f(*base);
                f(*index);
            }
            NodeKind::Slice {
                base,
                low,
                high,
                max,
            } => {
                f(*base);
                f(*low);
                f(*high);
                f(*max);
            }
            NodeKind::KeyValue { key, value } => {
                f(*key);
                f(*value);
            }
            NodeKind::CompositeLit { elements } => elements.iter().copied().for_each(f),
            NodeKind::FuncLit { body } => f(*body),
            NodeKind::TypeSpec { .. }
            | NodeKind::Ident { .. }
            | NodeKind::BasicLit { .. }
            | NodeKind::TypeExpr { .. }
            | NodeKind::Bad => {}
        }
    }
}
