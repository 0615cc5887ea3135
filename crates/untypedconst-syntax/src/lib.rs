//! AST model for one compilation unit.
//!
//! The host front end produces the tree; this crate only stores and walks it.
//! Nodes live in a flat [`NodeArena`] and refer to each other through
//! [`NodeIndex`] handles, so a whole unit can be shipped as one snapshot.
//!
//! - `base` - `NodeIndex` handle and sentinel
//! - `node` - `Node`, the closed `NodeKind` sum type, operator tokens
//! - `node_arena` - arena construction (`add_*` methods)
//! - `node_access` - lookups and structural helpers
//! - `walk` - pre-order traversal

pub mod base;
pub mod node;
mod node_access;
mod node_arena;
pub mod walk;

pub use base::NodeIndex;
pub use node::{BasicLitKind, BinaryOp, Node, NodeArena, NodeKind, UnaryOp};
