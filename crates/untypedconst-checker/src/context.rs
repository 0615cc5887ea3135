//! Per-unit checker state.

use untypedconst_common::Diagnostic;
use untypedconst_syntax::NodeArena;

use crate::type_api::TypeQueries;
use crate::untyped_const::UntypedConstClassifier;

/// Receives diagnostics as they are produced.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Everything one pass over one compilation unit needs.
///
/// Inputs are borrowed read-only from the host; the only side effect is
/// reporting through `sink`.
pub struct CheckerContext<'a> {
    pub arena: &'a NodeArena,
    pub queries: &'a dyn TypeQueries,
    pub file_name: String,
    pub sink: &'a mut dyn DiagnosticSink,
}

impl<'a> CheckerContext<'a> {
    pub fn new(
        arena: &'a NodeArena,
        queries: &'a dyn TypeQueries,
        file_name: String,
        sink: &'a mut dyn DiagnosticSink,
    ) -> Self {
        CheckerContext {
            arena,
            queries,
            file_name,
            sink,
        }
    }

    pub fn classifier(&self) -> UntypedConstClassifier<'a> {
        UntypedConstClassifier::new(self.arena, self.queries)
    }
}
