//! Untyped constant checker.
//!
//! Flags untyped constant expressions (bare literals and folds of them) used
//! where a value of a defined scalar type is expected, e.g. `F(5)` for
//! `func F(m Meters)`. The defined type's identity is lost silently at such
//! sites, which usually means a named constant or an explicit conversion was
//! intended.
//!
//! - `types` - type model supplied by the host
//! - `type_api` - `TypeQueries` boundary and `TypeTable`
//! - `untyped_const` - untyped constant classification
//! - `error_reporter` - reporting policy
//! - `dispatch` - site dispatcher
//! - `unit` - whole-unit snapshots

pub mod context;
pub mod dispatch;
pub mod error_reporter;
pub mod site;
pub mod type_api;
pub mod types;
pub mod unit;
pub mod untyped_const;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use context::{CheckerContext, DiagnosticSink};
pub use dispatch::SiteDispatcher;
pub use site::SiteKind;
pub use type_api::{TypeQueries, TypeTable};
pub use types::{BasicKind, Callee, ChanDir, ConstDecl, ConstValue, NamedType, Type, TypeAndValue};
pub use unit::CompilationUnit;
pub use untyped_const::UntypedConstClassifier;
pub use untypedconst_common::{ANALYZER_DOC, ANALYZER_NAME};

pub mod diagnostics {
    pub use untypedconst_common::diagnostics::{
        Diagnostic, DiagnosticCategory, DiagnosticMessage, diagnostic_codes, diagnostic_messages,
        format_message,
    };
}

use untypedconst_syntax::{NodeArena, NodeIndex};

/// Run the pass over one compilation unit.
///
/// Walks the tree under `root` in pre-order and reports every finding to
/// `sink`. The pass keeps no state between calls.
#[tracing::instrument(level = "debug", skip_all, fields(file = %file_name, package = queries.package_path()))]
pub fn check_source_file(
    arena: &NodeArena,
    root: NodeIndex,
    queries: &dyn TypeQueries,
    file_name: &str,
    sink: &mut dyn DiagnosticSink,
) {
    let mut ctx = CheckerContext::new(arena, queries, file_name.to_string(), sink);
    let mut dispatcher = SiteDispatcher::new(&mut ctx);
    arena.for_each_preorder(root, |idx, node| dispatcher.dispatch(idx, node));
}

#[cfg(test)]
#[path = "../tests/scenario_tests.rs"]
mod scenario_tests;
