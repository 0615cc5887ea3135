//! Site dispatcher.
//!
//! Picks out, per node kind, the sub-expressions that sit in a position
//! expecting a value of some (possibly defined) type, and hands each one to
//! the reporting policy. Node kinds:
//!
//! | node            | candidates                                   |
//! |-----------------|----------------------------------------------|
//! | call            | every argument, if the callee is a function  |
//! | return          | every result                                 |
//! | send            | the sent value                               |
//! | composite lit   | key and value of `k: v`, else the element    |
//! | index           | the index                                    |

use smallvec::SmallVec;
use untypedconst_syntax::{Node, NodeArena, NodeIndex, NodeKind};

use crate::context::CheckerContext;
use crate::site::SiteKind;
use crate::type_api::TypeQueries;
use crate::types::Callee;

pub type Candidates = SmallVec<[(NodeIndex, SiteKind); 4]>;

/// Candidate expressions of one node, in source order.
pub fn collect_candidates(
    arena: &NodeArena,
    queries: &dyn TypeQueries,
    idx: NodeIndex,
    node: &Node,
) -> Candidates {
    let mut out = Candidates::new();

    match &node.kind {
        NodeKind::Call { args, .. } => {
            // Conversions, builtins and calls through variables have no
            // declared parameter list to compare against.
            if !matches!(queries.resolve_callee(idx), Some(Callee::Func { .. })) {
                return out;
            }
            out.extend(args.iter().map(|arg| (*arg, SiteKind::CallArgument)));
        }
        NodeKind::Return { results } => {
            out.extend(results.iter().map(|res| (*res, SiteKind::ReturnValue)));
        }
        NodeKind::Send { value, .. } => out.push((*value, SiteKind::SendOperand)),
        NodeKind::CompositeLit { elements } => {
            for &elt in elements {
                match arena.get(elt).map(|n| &n.kind) {
                    // map/struct element
                    Some(NodeKind::KeyValue { key, value }) => {
                        out.push((*key, SiteKind::CompositeLiteralKey));
                        out.push((*value, SiteKind::CompositeLiteralValue));
                    }
                    // slice/array element
                    _ => out.push((elt, SiteKind::CompositeLiteralElement)),
                }
            }
        }
        NodeKind::Index { index, .. } => out.push((*index, SiteKind::IndexKey)),
        _ => {}
    }

    out
}

/// Dispatches visited nodes to the reporting policy.
pub struct SiteDispatcher<'a, 'b> {
    pub ctx: &'a mut CheckerContext<'b>,
}

impl<'a, 'b> SiteDispatcher<'a, 'b> {
    pub fn new(ctx: &'a mut CheckerContext<'b>) -> Self {
        Self { ctx }
    }

    pub fn dispatch(&mut self, idx: NodeIndex, node: &Node) {
        let candidates = collect_candidates(self.ctx.arena, self.ctx.queries, idx, node);
        if candidates.is_empty() {
            return;
        }
        tracing::trace!(
            idx = idx.0,
            kind = node.kind.name(),
            count = candidates.len(),
            "dispatch"
        );
        for (expr, site) in candidates {
            self.ctx.check_and_report(expr, site);
        }
    }
}

#[cfg(test)]
#[path = "../tests/dispatch_tests.rs"]
mod tests;
