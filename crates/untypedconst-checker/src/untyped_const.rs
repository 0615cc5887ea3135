//! Untyped constant classification.
//!
//! Decides whether a constant expression is still *untyped*, i.e. whether its
//! type would be picked up from context rather than fixed by the expression
//! itself. Follows the constant rules of the language:
//!
//! - basic literals and `true`/`false`/`iota` are untyped
//! - a constant identifier is untyped iff its declaration is
//! - unary expressions inherit the operand's typedness
//! - comparisons always yield an untyped boolean
//! - other binary expressions are untyped iff both operands are
//! - `complex`/`real`/`imag` applied to untyped arguments stay untyped;
//!   every other call (conversions included) is typed

use untypedconst_syntax::{NodeArena, NodeIndex, NodeKind};

use crate::type_api::TypeQueries;
use crate::types::Callee;

/// Predeclared identifiers that denote untyped constants.
const UNTYPED_CONST_IDENTS: &[&str] = &["true", "false", "iota"];

/// Builtins whose result is untyped when all arguments are.
const COMPLEX_BUILTINS: &[&str] = &["complex", "real", "imag"];

/// Classifies constant expressions of one unit.
#[derive(Clone, Copy)]
pub struct UntypedConstClassifier<'a> {
    arena: &'a NodeArena,
    queries: &'a dyn TypeQueries,
}

impl<'a> UntypedConstClassifier<'a> {
    pub fn new(arena: &'a NodeArena, queries: &'a dyn TypeQueries) -> Self {
        Self { arena, queries }
    }

    /// Whether `expr` is an untyped constant expression.
    ///
    /// Precondition: `expr` has a constant value. Shapes that cannot occur in
    /// a constant expression are logged and classified as typed.
    pub fn is_untyped_const_expr(&self, expr: NodeIndex) -> bool {
        let idx = self.arena.skip_parenthesized_expression(expr);
        let Some(node) = self.arena.get(idx) else {
            tracing::warn!(idx = idx.0, "is_untyped_const_expr: missing node");
            return false;
        };

        let untyped = match &node.kind {
            NodeKind::BasicLit { .. } => true,

            NodeKind::Ident { name } => self.is_untyped_ident(name),

            NodeKind::Unary { operand, .. } => self.is_untyped_const_expr(*operand),

            // "A constant comparison always yields an untyped boolean constant."
            NodeKind::Binary { op, .. } if op.is_comparison() => true,
            NodeKind::Binary { left, right, .. } => {
                self.is_untyped_const_expr(*left) && self.is_untyped_const_expr(*right)
            }

            NodeKind::Call { args, .. } => match self.queries.resolve_callee(idx) {
                Some(Callee::Builtin { name }) if COMPLEX_BUILTINS.contains(&name.as_str()) => {
                    args.iter().all(|arg| self.is_untyped_const_expr(*arg))
                }
                _ => false,
            },

            // Selectors, index, slice, star, key-value: not constant shapes.
            other => {
                tracing::warn!(
                    idx = idx.0,
                    kind = other.name(),
                    "is_untyped_const_expr: unexpected node kind"
                );
                false
            }
        };

        tracing::trace!(idx = idx.0, kind = node.kind.name(), untyped);
        untyped
    }

    fn is_untyped_ident(&self, name: &str) -> bool {
        if UNTYPED_CONST_IDENTS.contains(&name) {
            return true;
        }
        match self.queries.lookup_constant(name) {
            Some(decl) => decl.ty.is_untyped(),
            None => {
                // A constant-valued identifier must resolve to a package constant.
                tracing::warn!(
                    name,
                    package = self.queries.package_path(),
                    "is_untyped_const_expr: identifier is not a package-level constant"
                );
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/untyped_const_tests.rs"]
mod tests;
