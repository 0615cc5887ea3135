//! Pre-order traversal.

use crate::base::NodeIndex;
use crate::node::{Node, NodeArena};

impl NodeArena {
    /// Visit `root` and every node reachable from it, parents before
    /// children, siblings in source order. Each node is visited once even if
    /// a malformed snapshot shares it between parents.
    pub fn for_each_preorder(&self, root: NodeIndex, mut visit: impl FnMut(NodeIndex, &Node)) {
        let mut seen = vec![false; self.len()];
        let mut stack = vec![root];

        while let Some(idx) = stack.pop() {
            let Some(node) = self.get(idx) else {
                tracing::warn!(idx = idx.0, "walk: dangling node index");
                continue;
            };
            let slot = &mut seen[idx.0 as usize];
            if *slot {
                tracing::warn!(idx = idx.0, kind = node.kind.name(), "walk: node reached twice");
                continue;
            }
            *slot = true;

            visit(idx, node);

            let children = self.children(idx);
            stack.extend(children.into_iter().rev());
        }
    }
}

#[cfg(test)]
#[path = "../tests/walk_tests.rs"]
mod tests;
