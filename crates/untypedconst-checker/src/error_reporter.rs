//! Reporting policy: turns a candidate expression into (at most) one
//! diagnostic.

use untypedconst_common::Diagnostic;
use untypedconst_syntax::NodeIndex;

use crate::context::CheckerContext;
use crate::site::SiteKind;
use crate::type_api::TypeQueries;
use crate::types::{NamedType, Type};
use crate::untyped_const::UntypedConstClassifier;

/// The defined type an untyped constant `expr` silently converts to, if that
/// conversion is worth reporting.
///
/// Returns `None` when `expr` is not constant, not untyped, not converted to
/// a defined type, converted to a defined type whose underlying type is not
/// basic, or converted to an unexported type of another package.
pub fn reportable_named_type<'q>(
    classifier: &UntypedConstClassifier<'_>,
    queries: &'q dyn TypeQueries,
    expr: NodeIndex,
) -> Option<&'q NamedType> {
    let fact = queries.type_and_value(expr)?;
    if !fact.is_constant() {
        return None;
    }
    if !classifier.is_untyped_const_expr(expr) {
        return None;
    }

    let Type::Named(named) = &fact.ty else {
        return None;
    };
    if !fact.ty.underlying().is_basic() {
        return None;
    }

    // An unexported type of another package cannot be named by the author
    // of this code.
    if !named.exported && named.package != queries.package_path() {
        tracing::debug!(
            idx = expr.0,
            ty = %named.qualified_name(),
            "suppressed: unexported type of another package"
        );
        return None;
    }

    Some(named)
}

impl CheckerContext<'_> {
    /// Check a candidate at `site` and report it when the policy allows.
    pub fn check_and_report(&mut self, expr: NodeIndex, site: SiteKind) {
        let classifier = self.classifier();
        let Some(named) = reportable_named_type(&classifier, self.queries, expr) else {
            return;
        };
        let Some(node) = self.arena.get(expr) else {
            return;
        };

        let message = site.message();
        let text = message.format(&[&named.qualified_name()]);
        tracing::debug!(idx = expr.0, ?site, code = message.code, "report");

        self.sink.report(Diagnostic::new(
            self.file_name.clone(),
            node.span.start,
            node.span.len(),
            message,
            text,
        ));
    }
}

#[cfg(test)]
#[path = "../tests/error_reporter_tests.rs"]
mod tests;
