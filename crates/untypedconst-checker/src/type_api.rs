//! Query boundary between the analyzer and the host type checker.
//!
//! The analyzer never computes types itself. Everything it knows about an
//! expression comes through [`TypeQueries`], which keeps the classifier and the
//! reporting policy testable without a full front end.

use rustc_hash::FxHashMap;
use untypedconst_syntax::NodeIndex;

use crate::types::{Callee, ConstDecl, TypeAndValue};

/// Read-only facts about one compilation unit.
pub trait TypeQueries {
    /// Type (and constant value, if any) recorded for an expression.
    fn type_and_value(&self, expr: NodeIndex) -> Option<&TypeAndValue>;

    /// Package-level constant named `name` in the unit's own package.
    fn lookup_constant(&self, name: &str) -> Option<&ConstDecl>;

    /// The function, builtin or variable a call expression invokes.
    /// `None` for conversions.
    fn resolve_callee(&self, call: NodeIndex) -> Option<&Callee>;

    /// Import path of the package being analyzed.
    fn package_path(&self) -> &str;
}

/// Map-backed [`TypeQueries`] filled in by a host or a snapshot.
#[derive(Clone, Debug, Default)]
pub struct TypeTable {
    package: String,
    types: FxHashMap<NodeIndex, TypeAndValue>,
    constants: FxHashMap<String, ConstDecl>,
    callees: FxHashMap<NodeIndex, Callee>,
}

impl TypeTable {
    pub fn new(package: impl Into<String>) -> Self {
        TypeTable {
            package: package.into(),
            ..TypeTable::default()
        }
    }

    pub fn record_type(&mut self, expr: NodeIndex, fact: TypeAndValue) {
        self.types.insert(expr, fact);
    }

    pub fn record_constant(&mut self, decl: ConstDecl) {
        self.constants.insert(decl.name.clone(), decl);
    }

    pub fn record_callee(&mut self, call: NodeIndex, callee: Callee) {
        self.callees.insert(call, callee);
    }

    /// Type facts sorted by node, for stable serialization.
    pub fn types_sorted(&self) -> Vec<(NodeIndex, &TypeAndValue)> {
        let mut out: Vec<_> = self.types.iter().map(|(idx, fact)| (*idx, fact)).collect();
        out.sort_unstable_by_key(|(idx, _)| *idx);
        out
    }

    pub fn constants_sorted(&self) -> Vec<&ConstDecl> {
        let mut out: Vec<_> = self.constants.values().collect();
        out.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        out
    }

    pub fn callees_sorted(&self) -> Vec<(NodeIndex, &Callee)> {
        let mut out: Vec<_> = self
            .callees
            .iter()
            .map(|(idx, callee)| (*idx, callee))
            .collect();
        out.sort_unstable_by_key(|(idx, _)| *idx);
        out
    }
}

impl TypeQueries for TypeTable {
    fn type_and_value(&self, expr: NodeIndex) -> Option<&TypeAndValue> {
        self.types.get(&expr)
    }

    fn lookup_constant(&self, name: &str) -> Option<&ConstDecl> {
        self.constants.get(name)
    }

    fn resolve_callee(&self, call: NodeIndex) -> Option<&Callee> {
        self.callees.get(&call)
    }

    fn package_path(&self) -> &str {
        &self.package
    }
}
